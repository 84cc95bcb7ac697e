//! Gesture lifecycle state types.

use serde::{Deserialize, Serialize};

/// Phase of the pan gesture lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GesturePhase {
    /// At rest between interactions
    Idle,
    /// Pointer is down and the activation threshold has been crossed
    Dragging,
    /// Released above the velocity threshold; animating to the flung target
    Flinging,
    /// Released below the velocity threshold, or navigating
    /// programmatically; animating to the nearest/requested target
    Settling,
}

impl GesturePhase {
    /// Get the name of this phase
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Flinging => "flinging",
            Self::Settling => "settling",
        }
    }

    /// Whether a pointer is actively driving the offset
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Whether the offset is animating toward a snap target
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Flinging | Self::Settling)
    }
}

impl Default for GesturePhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Transient record of the current pointer interaction.
/// Exists only while a pointer is down; destroyed on release.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureState {
    /// Cumulative pointer translation on the X axis
    pub translation_x: f64,
    /// Cumulative pointer translation on the Y axis
    pub translation_y: f64,
    /// Pointer velocity on the X axis (px/s)
    pub velocity_x: f64,
    /// Pointer velocity on the Y axis (px/s)
    pub velocity_y: f64,
    /// Whether the gesture has crossed the activation threshold
    pub is_active: bool,
}

/// Resolution of a released gesture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    /// Index to settle on
    pub target_index: usize,
    /// Offset to animate to; in loop mode this may sit a whole extent
    /// away from the canonical snap point so motion takes the shorter path
    pub target_offset: f64,
    /// Whether the release resolved as a fling
    pub flung: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(GesturePhase::Idle.name(), "idle");
        assert_eq!(GesturePhase::Dragging.name(), "dragging");
        assert_eq!(GesturePhase::Flinging.name(), "flinging");
        assert_eq!(GesturePhase::Settling.name(), "settling");
    }

    #[test]
    fn test_phase_predicates() {
        assert!(GesturePhase::Dragging.is_dragging());
        assert!(!GesturePhase::Dragging.is_animating());
        assert!(GesturePhase::Flinging.is_animating());
        assert!(GesturePhase::Settling.is_animating());
        assert!(!GesturePhase::Idle.is_animating());
    }
}
