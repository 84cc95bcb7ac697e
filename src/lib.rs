//! Carousel Engine Core
//!
//! A headless interaction engine for swipeable carousels: raw drag
//! gestures become a continuous scroll offset, the offset settles onto
//! snap points and resolves to a discrete active index, and every frame a
//! normalized per-item progress value drives animation presets and plugin
//! style composition. Rendering, pagination indicators and accessibility
//! are external collaborators driven through the engine's read-only
//! surface.

pub mod autoplay;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod math;
pub mod offset;
pub mod plugin;
pub mod presets;
pub mod progress;
pub mod style;
pub mod time;
pub mod virtualization;

// Re-export common types for convenience
pub use autoplay::{AutoPlayController, AutoPlayState};
pub use config::{
    AutoPlay, AutoPlayConfig, AutoPlayDirection, CarouselConfig, CarouselDirection, GestureConfig,
    SnapAlignment,
};
pub use engine::{CarouselEngine, ItemAnimation};
pub use error::CarouselError;
pub use event::{CarouselEvent, EventDispatcher, EventType};
pub use gesture::{GesturePhase, GestureState, PanGestureMachine, SettleAnimation, SnapResult};
pub use layout::SnapPointTable;
pub use offset::SharedOffset;
pub use plugin::{CarouselPlugin, FnPlugin, PluginManager};
pub use presets::{AnimationPreset, EvaluationMetrics, PresetConfig, PresetRegistry};
pub use progress::ProgressSampler;
pub use style::{ItemStyle, Overflow, TransformOp};
pub use time::CarouselTime;
pub use virtualization::compute_visible_indices;

/// Carousel engine result type
pub type Result<T> = core::result::Result<T, CarouselError>;
