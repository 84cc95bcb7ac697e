//! Registry for animation presets.
//!
//! Owned by one carousel instance rather than shared process-wide, so
//! instances stay independent and testable in isolation. Unconfigured
//! evaluations are memoized in an LRU cache keyed by preset and progress.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::error::CarouselError;
use crate::presets::functions::{
    AnimationPreset, FadePreset, OverlapPreset, ParallaxPreset, PeekPreset, PresetConfig,
    ScaleFadePreset, ScalePreset, SlideFadePreset, SlidePreset, VerticalFadePreset, VerticalPreset,
};
use crate::presets::metrics::EvaluationMetrics;
use crate::style::ItemStyle;
use crate::time::Timer;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StyleCacheKey {
    preset: String,
    progress_bits: u64,
}

impl StyleCacheKey {
    fn new(preset: &str, progress: f64) -> Self {
        Self {
            preset: preset.to_string(),
            progress_bits: progress.to_bits(),
        }
    }
}

/// Registry managing animation presets for one carousel instance
pub struct PresetRegistry {
    presets: HashMap<String, Box<dyn AnimationPreset>>,
    cache: LruCache<StyleCacheKey, ItemStyle>,
    metrics: EvaluationMetrics,
    enable_caching: bool,
    enable_metrics: bool,
}

impl PresetRegistry {
    /// Create a registry with the built-in presets registered
    pub fn new(cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::new(1).unwrap());
        let mut registry = Self {
            presets: HashMap::new(),
            cache: LruCache::new(cache_size),
            metrics: EvaluationMetrics::new(),
            enable_caching: true,
            enable_metrics: true,
        };

        registry.register_builtin_presets();
        registry
    }

    fn register_builtin_presets(&mut self) {
        self.register(Box::new(SlidePreset));
        self.register(Box::new(FadePreset));
        self.register(Box::new(SlideFadePreset));
        self.register(Box::new(ScalePreset));
        self.register(Box::new(ScaleFadePreset));
        self.register(Box::new(VerticalPreset));
        self.register(Box::new(VerticalFadePreset));
        self.register(Box::new(ParallaxPreset));
        self.register(Box::new(OverlapPreset));
        self.register(Box::new(PeekPreset));
    }

    /// Register a preset, replacing any previous preset of the same name
    pub fn register(&mut self, preset: Box<dyn AnimationPreset>) {
        self.presets.insert(preset.name().to_string(), preset);
    }

    /// Get a preset by name
    #[inline]
    pub fn get(&self, name: &str) -> Option<&dyn AnimationPreset> {
        self.presets.get(name).map(|p| p.as_ref())
    }

    /// Whether a preset name is registered
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// List all registered preset names
    #[inline]
    pub fn names(&self) -> Vec<&str> {
        self.presets.keys().map(|k| k.as_str()).collect()
    }

    /// Evaluate a preset at a progress value.
    ///
    /// Only unconfigured evaluations hit the style cache; configured ones
    /// go straight to the preset.
    pub fn evaluate(
        &mut self,
        name: &str,
        progress: f64,
        config: Option<&PresetConfig>,
    ) -> Result<ItemStyle, CarouselError> {
        if !self.presets.contains_key(name) {
            return Err(CarouselError::PresetNotFound {
                name: name.to_string(),
            });
        }

        let timer = if self.enable_metrics {
            Some(Timer::new())
        } else {
            None
        };
        let cacheable = self.enable_caching && config.is_none();

        if cacheable {
            let key = StyleCacheKey::new(name, progress);
            if let Some(cached) = self.cache.get(&key) {
                let style = cached.clone();
                if let Some(timer) = timer {
                    self.metrics.record_evaluation(timer.elapsed_micros() as u64, true);
                }
                return Ok(style);
            }
        }

        let empty = PresetConfig::new();
        let preset = self.presets.get(name).unwrap();
        let style = preset.animate(progress, config.unwrap_or(&empty));

        if cacheable {
            self.cache
                .put(StyleCacheKey::new(name, progress), style.clone());
        }
        if let Some(timer) = timer {
            self.metrics.record_evaluation(timer.elapsed_micros() as u64, false);
        }

        Ok(style)
    }

    /// Enable or disable style caching
    pub fn set_caching_enabled(&mut self, enabled: bool) {
        self.enable_caching = enabled;
        if !enabled {
            self.cache.clear();
        }
    }

    /// Enable or disable metric recording
    pub fn set_metrics_enabled(&mut self, enabled: bool) {
        self.enable_metrics = enabled;
        if !enabled {
            self.metrics.reset();
        }
    }

    /// Clear the style cache
    #[inline]
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached styles
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Evaluation metrics
    #[inline]
    pub fn metrics(&self) -> &EvaluationMetrics {
        &self.metrics
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new(256)
    }
}

impl std::fmt::Debug for PresetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresetRegistry")
            .field("presets", &self.presets.len())
            .field("cache_len", &self.cache.len())
            .field("metrics", &self.metrics)
            .finish()
    }
}
