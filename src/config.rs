//! Configuration surface and default values.

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Default activation threshold along the scroll axis (px)
pub const DEFAULT_ACTIVE_OFFSET_MAIN: f64 = 10.0;
/// Default activation threshold across the scroll axis (px)
pub const DEFAULT_ACTIVE_OFFSET_CROSS: f64 = 50.0;
/// Default fling velocity threshold (px/s)
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 500.0;
/// Default auto-play interval (ms)
pub const DEFAULT_AUTO_PLAY_INTERVAL_MS: f64 = 3000.0;
/// Default settle tween duration (ms)
pub const DEFAULT_SETTLE_DURATION_MS: f64 = 240.0;
/// Default number of extra items rendered on each side of the window
pub const DEFAULT_RENDER_BUFFER: usize = 2;
/// Fallback item size when neither item nor container size is known (px)
pub const DEFAULT_ITEM_SIZE: f64 = 300.0;

/// Scroll axis of the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselDirection {
    Horizontal,
    Vertical,
}

impl CarouselDirection {
    /// Whether this is the horizontal axis
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

impl Default for CarouselDirection {
    fn default() -> Self {
        Self::Horizontal
    }
}

/// Where an item rests inside the container when settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapAlignment {
    Start,
    Center,
    End,
}

impl Default for SnapAlignment {
    fn default() -> Self {
        Self::Start
    }
}

/// Auto-play advance direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoPlayDirection {
    Forward,
    Backward,
}

impl Default for AutoPlayDirection {
    fn default() -> Self {
        Self::Forward
    }
}

/// Gesture recognition configuration.
///
/// Activation bands are `[negative, positive]` displacement thresholds in
/// pixels. The gesture activates once displacement along the scroll axis
/// leaves its band while cross-axis displacement stays inside its own band,
/// which lets the carousel coexist with an enclosing scrollable container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    pub active_offset_x: [f64; 2],
    pub active_offset_y: [f64; 2],
    /// Release velocity magnitude at or above which a gesture resolves as a fling
    pub velocity_threshold: f64,
    /// Whether pointer interaction is recognized at all
    pub enabled: bool,
}

impl GestureConfig {
    /// Defaults for the given scroll axis: a tight band on the scroll axis,
    /// a loose band on the cross axis.
    pub fn for_direction(direction: CarouselDirection) -> Self {
        let main = [-DEFAULT_ACTIVE_OFFSET_MAIN, DEFAULT_ACTIVE_OFFSET_MAIN];
        let cross = [-DEFAULT_ACTIVE_OFFSET_CROSS, DEFAULT_ACTIVE_OFFSET_CROSS];
        let (active_offset_x, active_offset_y) = if direction.is_horizontal() {
            (main, cross)
        } else {
            (cross, main)
        };
        Self {
            active_offset_x,
            active_offset_y,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            enabled: true,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::for_direction(CarouselDirection::Horizontal)
    }
}

/// Auto-play configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoPlayConfig {
    pub enabled: bool,
    /// Advance interval in milliseconds
    pub interval_ms: f64,
    pub direction: AutoPlayDirection,
    /// Pause while the user interacts, resuming one interval later
    pub pause_on_interaction: bool,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_ms: DEFAULT_AUTO_PLAY_INTERVAL_MS,
            direction: AutoPlayDirection::Forward,
            pause_on_interaction: true,
        }
    }
}

/// Auto-play option accepting the boolean shorthand:
/// `true` enables with defaults, `false` disables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AutoPlay {
    Enabled(bool),
    Config(AutoPlayConfig),
}

impl AutoPlay {
    /// Expand the shorthand into a full configuration
    pub fn normalized(&self) -> AutoPlayConfig {
        match self {
            Self::Enabled(enabled) => AutoPlayConfig {
                enabled: *enabled,
                ..AutoPlayConfig::default()
            },
            Self::Config(config) => config.clone(),
        }
    }
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl From<bool> for AutoPlay {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl From<AutoPlayConfig> for AutoPlay {
    fn from(config: AutoPlayConfig) -> Self {
        Self::Config(config)
    }
}

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    pub direction: CarouselDirection,
    /// Wrap index arithmetic and offsets modulo the item count
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Item extent along the scroll axis (px)
    pub item_size: f64,
    /// Gap between adjacent items (px)
    pub gap: f64,
    /// Container extent along the scroll axis (px)
    pub container_size: f64,
    pub snap_alignment: SnapAlignment,
    pub gesture: GestureConfig,
    pub auto_play: AutoPlay,
    /// Virtualization threshold; 0 renders every item
    pub max_render_items: usize,
    /// Extra indices mounted on each side of the visible window
    pub render_buffer: usize,
    /// Settle tween duration (ms)
    pub settle_duration_ms: f64,
    /// Animation preset applied per item, if any
    pub animation: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            direction: CarouselDirection::Horizontal,
            looping: false,
            item_size: DEFAULT_ITEM_SIZE,
            gap: 0.0,
            container_size: DEFAULT_ITEM_SIZE,
            snap_alignment: SnapAlignment::Start,
            gesture: GestureConfig::default(),
            auto_play: AutoPlay::default(),
            max_render_items: 0,
            render_buffer: DEFAULT_RENDER_BUFFER,
            settle_duration_ms: DEFAULT_SETTLE_DURATION_MS,
            animation: None,
        }
    }
}

impl CarouselConfig {
    /// Create a configuration with defaults
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scroll axis; also resets gesture thresholds to the
    /// defaults for that axis.
    #[inline]
    pub fn with_direction(mut self, direction: CarouselDirection) -> Self {
        self.direction = direction;
        self.gesture = GestureConfig::for_direction(direction);
        self
    }

    /// Enable loop mode
    #[inline]
    pub fn with_loop(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Set item size and gap
    #[inline]
    pub fn with_item_size(mut self, item_size: f64, gap: f64) -> Self {
        self.item_size = item_size;
        self.gap = gap;
        self
    }

    /// Set container size
    #[inline]
    pub fn with_container_size(mut self, container_size: f64) -> Self {
        self.container_size = container_size;
        self
    }

    /// Set snap alignment
    #[inline]
    pub fn with_alignment(mut self, alignment: SnapAlignment) -> Self {
        self.snap_alignment = alignment;
        self
    }

    /// Set auto-play from a boolean or a full configuration
    #[inline]
    pub fn with_auto_play(mut self, auto_play: impl Into<AutoPlay>) -> Self {
        self.auto_play = auto_play.into();
        self
    }

    /// Enable virtualization
    #[inline]
    pub fn with_virtualization(mut self, max_render_items: usize, render_buffer: usize) -> Self {
        self.max_render_items = max_render_items;
        self.render_buffer = render_buffer;
        self
    }

    /// Select an animation preset by name
    #[inline]
    pub fn with_animation(mut self, preset: impl Into<String>) -> Self {
        self.animation = Some(preset.into());
        self
    }

    /// Item size plus gap; the spacing unit for all offset math
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.item_size + self.gap
    }

    /// Validate geometry and timing values
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !self.item_size.is_finite() || self.item_size < 0.0 {
            return Err(CarouselError::InvalidConfig {
                reason: format!("item_size must be finite and non-negative, got {}", self.item_size),
            });
        }
        if !self.gap.is_finite() {
            return Err(CarouselError::InvalidConfig {
                reason: format!("gap must be finite, got {}", self.gap),
            });
        }
        if !self.container_size.is_finite() || self.container_size < 0.0 {
            return Err(CarouselError::InvalidConfig {
                reason: format!(
                    "container_size must be finite and non-negative, got {}",
                    self.container_size
                ),
            });
        }
        if !self.gesture.velocity_threshold.is_finite() || self.gesture.velocity_threshold <= 0.0 {
            return Err(CarouselError::InvalidConfig {
                reason: format!(
                    "velocity_threshold must be positive, got {}",
                    self.gesture.velocity_threshold
                ),
            });
        }
        if !self.settle_duration_ms.is_finite() || self.settle_duration_ms <= 0.0 {
            return Err(CarouselError::InvalidConfig {
                reason: format!(
                    "settle_duration_ms must be positive, got {}",
                    self.settle_duration_ms
                ),
            });
        }
        let auto_play = self.auto_play.normalized();
        if auto_play.enabled && (!auto_play.interval_ms.is_finite() || auto_play.interval_ms <= 0.0)
        {
            return Err(CarouselError::InvalidConfig {
                reason: format!(
                    "auto_play interval_ms must be positive, got {}",
                    auto_play.interval_ms
                ),
            });
        }
        Ok(())
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, CarouselError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> Result<String, CarouselError> {
        Ok(serde_json::to_string(self)?)
    }
}
