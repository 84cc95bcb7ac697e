//! Built-in animation presets.
//!
//! A preset is a pure function of per-item progress. Every preset must
//! stay defined for any finite progress value, however far out of range,
//! and return an opacity inside `[0, 1]` at `progress == 0`.

use std::collections::HashMap;

use crate::math::{compute_z_index, directional_interpolate, map_clamped};
use crate::style::{ItemStyle, TransformOp};

/// Configuration overrides passed to preset evaluation
pub type PresetConfig = HashMap<String, f64>;

/// Item width used by presets whose geometry is not configured
const DEFAULT_PRESET_ITEM_WIDTH: f64 = 300.0;

/// An animation preset: a named pure function of progress
pub trait AnimationPreset: Send + Sync {
    /// Unique preset name
    fn name(&self) -> &str;

    /// Short human-readable description
    fn description(&self) -> &str;

    /// Default configuration values
    fn defaults(&self) -> PresetConfig;

    /// Evaluate the style for a progress value. Must not panic for any
    /// finite progress.
    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle;
}

#[inline]
fn param(config: &PresetConfig, key: &str, fallback: f64) -> f64 {
    config.get(key).copied().unwrap_or(fallback)
}

/// Standard slide transition
#[derive(Debug, Clone)]
pub struct SlidePreset;

impl AnimationPreset for SlidePreset {
    fn name(&self) -> &str {
        "slide"
    }

    fn description(&self) -> &str {
        "Standard horizontal slide transition"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([("distance".to_string(), 1.0)])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let distance = param(config, "distance", 1.0);
        let extent = DEFAULT_PRESET_ITEM_WIDTH * distance;
        let translate_x = directional_interpolate(progress, -extent, 0.0, extent);

        ItemStyle::new()
            .with_transform(TransformOp::TranslateX(translate_x))
            .with_opacity(1.0)
    }
}

/// Crossfade between stacked items
#[derive(Debug, Clone)]
pub struct FadePreset;

impl AnimationPreset for FadePreset {
    fn name(&self) -> &str {
        "fade"
    }

    fn description(&self) -> &str {
        "Crossfade transition between stacked items"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([("minOpacity".to_string(), 0.0)])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let min_opacity = param(config, "minOpacity", 0.0);
        let opacity = map_clamped(progress.abs(), [0.0, 1.0], [1.0, min_opacity]);

        ItemStyle::new()
            .with_opacity(opacity)
            .with_z_index(compute_z_index(progress, 100))
    }
}

/// Slide combined with an opacity fade
#[derive(Debug, Clone)]
pub struct SlideFadePreset;

impl AnimationPreset for SlideFadePreset {
    fn name(&self) -> &str {
        "slide-fade"
    }

    fn description(&self) -> &str {
        "Horizontal slide combined with opacity fade"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([
            ("distance".to_string(), 200.0),
            ("minOpacity".to_string(), 0.3),
        ])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let distance = param(config, "distance", 200.0);
        let min_opacity = param(config, "minOpacity", 0.3);

        let translate_x = directional_interpolate(progress, -distance, 0.0, distance);
        let opacity = map_clamped(progress.abs(), [0.0, 1.0], [1.0, min_opacity]);

        ItemStyle::new()
            .with_transform(TransformOp::TranslateX(translate_x))
            .with_opacity(opacity)
    }
}

/// Active item full size, neighbors scaled down
#[derive(Debug, Clone)]
pub struct ScalePreset;

impl AnimationPreset for ScalePreset {
    fn name(&self) -> &str {
        "scale"
    }

    fn description(&self) -> &str {
        "Active item full size, neighbors scale down"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([
            ("minScale".to_string(), 0.8),
            ("spacing".to_string(), 50.0),
        ])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let min_scale = param(config, "minScale", 0.8);
        let spacing = param(config, "spacing", 50.0);

        let translate_x = directional_interpolate(progress, -spacing, 0.0, spacing);
        let scale = map_clamped(progress.abs(), [0.0, 1.0], [1.0, min_scale]);

        ItemStyle::new()
            .with_transform(TransformOp::TranslateX(translate_x))
            .with_transform(TransformOp::Scale(scale))
            .with_opacity(1.0)
    }
}

/// Scale reduction combined with an opacity fade
#[derive(Debug, Clone)]
pub struct ScaleFadePreset;

impl AnimationPreset for ScaleFadePreset {
    fn name(&self) -> &str {
        "scale-fade"
    }

    fn description(&self) -> &str {
        "Scale reduction combined with opacity fade"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([
            ("minScale".to_string(), 0.85),
            ("minOpacity".to_string(), 0.5),
            ("spacing".to_string(), 40.0),
        ])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let min_scale = param(config, "minScale", 0.85);
        let min_opacity = param(config, "minOpacity", 0.5);
        let spacing = param(config, "spacing", 40.0);

        let scale = map_clamped(progress.abs(), [0.0, 1.0], [1.0, min_scale]);
        let opacity = map_clamped(progress.abs(), [0.0, 1.0], [1.0, min_opacity]);
        let translate_x = directional_interpolate(progress, -spacing, 0.0, spacing);

        ItemStyle::new()
            .with_transform(TransformOp::TranslateX(translate_x))
            .with_transform(TransformOp::Scale(scale))
            .with_opacity(opacity)
    }
}

/// Vertical slide transition
#[derive(Debug, Clone)]
pub struct VerticalPreset;

impl AnimationPreset for VerticalPreset {
    fn name(&self) -> &str {
        "vertical"
    }

    fn description(&self) -> &str {
        "Vertical slide transition"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([("distance".to_string(), 250.0)])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let distance = param(config, "distance", 250.0);
        let translate_y = directional_interpolate(progress, -distance, 0.0, distance);

        ItemStyle::new()
            .with_transform(TransformOp::TranslateY(translate_y))
            .with_opacity(1.0)
    }
}

/// Vertical slide combined with an opacity fade
#[derive(Debug, Clone)]
pub struct VerticalFadePreset;

impl AnimationPreset for VerticalFadePreset {
    fn name(&self) -> &str {
        "vertical-fade"
    }

    fn description(&self) -> &str {
        "Vertical slide combined with opacity fade"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([
            ("distance".to_string(), 200.0),
            ("minOpacity".to_string(), 0.3),
        ])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let distance = param(config, "distance", 200.0);
        let min_opacity = param(config, "minOpacity", 0.3);

        let translate_y = directional_interpolate(progress, -distance, 0.0, distance);
        let opacity = map_clamped(progress.abs(), [0.0, 1.0], [1.0, min_opacity]);

        ItemStyle::new()
            .with_transform(TransformOp::TranslateY(translate_y))
            .with_opacity(opacity)
    }
}

/// Background layer moving slower than the container
#[derive(Debug, Clone)]
pub struct ParallaxPreset;

impl AnimationPreset for ParallaxPreset {
    fn name(&self) -> &str {
        "parallax"
    }

    fn description(&self) -> &str {
        "Multi-layer parallax depth effect"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([
            ("parallaxFactor".to_string(), 0.3),
            ("distance".to_string(), 300.0),
            ("minOpacity".to_string(), 0.8),
        ])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let factor = param(config, "parallaxFactor", 0.3);
        let distance = param(config, "distance", 300.0);
        let min_opacity = param(config, "minOpacity", 0.8);

        let extent = distance * factor;
        let translate_x = directional_interpolate(progress, -extent, 0.0, extent);
        let opacity = map_clamped(progress.abs(), [0.0, 1.0], [1.0, min_opacity]);

        ItemStyle::new()
            .with_transform(TransformOp::TranslateX(translate_x))
            .with_opacity(opacity)
    }
}

/// Items overlap with a stacked appearance
#[derive(Debug, Clone)]
pub struct OverlapPreset;

impl AnimationPreset for OverlapPreset {
    fn name(&self) -> &str {
        "overlap"
    }

    fn description(&self) -> &str {
        "Items overlap each other with stacked appearance"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([
            ("overlapRatio".to_string(), 0.7),
            ("minScale".to_string(), 0.95),
            ("itemWidth".to_string(), DEFAULT_PRESET_ITEM_WIDTH),
        ])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let overlap_ratio = param(config, "overlapRatio", 0.7);
        let min_scale = param(config, "minScale", 0.95);
        let item_width = param(config, "itemWidth", DEFAULT_PRESET_ITEM_WIDTH);

        let extent = item_width * overlap_ratio;
        let translate_x = directional_interpolate(progress, -extent, 0.0, extent);
        let scale = map_clamped(progress.abs(), [0.0, 1.0], [1.0, min_scale]);

        ItemStyle::new()
            .with_transform(TransformOp::TranslateX(translate_x))
            .with_transform(TransformOp::Scale(scale))
            .with_z_index(compute_z_index(progress, 100))
            .with_opacity(1.0)
    }
}

/// Active item centered with neighbors peeking from the sides
#[derive(Debug, Clone)]
pub struct PeekPreset;

impl AnimationPreset for PeekPreset {
    fn name(&self) -> &str {
        "peek"
    }

    fn description(&self) -> &str {
        "Active item centered with adjacent items peeking from sides"
    }

    fn defaults(&self) -> PresetConfig {
        PresetConfig::from([
            ("peekAmount".to_string(), 0.2),
            ("peekScale".to_string(), 0.85),
            ("peekOpacity".to_string(), 0.7),
            ("itemWidth".to_string(), DEFAULT_PRESET_ITEM_WIDTH),
        ])
    }

    fn animate(&self, progress: f64, config: &PresetConfig) -> ItemStyle {
        let peek_amount = param(config, "peekAmount", 0.2);
        let peek_scale = param(config, "peekScale", 0.85);
        let peek_opacity = param(config, "peekOpacity", 0.7);
        let item_width = param(config, "itemWidth", DEFAULT_PRESET_ITEM_WIDTH);

        let peek_offset = item_width * (1.0 - peek_amount);
        let translate_x = directional_interpolate(progress, -peek_offset, 0.0, peek_offset);
        let scale = map_clamped(progress.abs(), [0.0, 1.0], [1.0, peek_scale]);
        let opacity = map_clamped(progress.abs(), [0.0, 1.0], [1.0, peek_opacity]);

        ItemStyle::new()
            .with_transform(TransformOp::TranslateX(translate_x))
            .with_transform(TransformOp::Scale(scale))
            .with_opacity(opacity)
    }
}
