//! Animation presets: named pure functions of per-item progress.

pub mod functions;
pub mod metrics;
pub mod registry;

pub use functions::{
    AnimationPreset, FadePreset, OverlapPreset, ParallaxPreset, PeekPreset, PresetConfig,
    ScaleFadePreset, ScalePreset, SlideFadePreset, SlidePreset, VerticalFadePreset, VerticalPreset,
};
pub use metrics::EvaluationMetrics;
pub use registry::PresetRegistry;
