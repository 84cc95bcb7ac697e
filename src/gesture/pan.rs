//! Pan gesture state machine.
//!
//! Converts raw pointer samples into scroll offset updates and resolves a
//! release into a snap target. Lifecycle: `Idle -> Dragging -> (Flinging |
//! Settling) -> Idle`. While a pointer is down the machine owns the scroll
//! offset; the settle tween owns it afterwards.

use log::debug;

use crate::config::GestureConfig;
use crate::gesture::state::{GesturePhase, GestureState, SnapResult};
use crate::layout::SnapPointTable;
use crate::math::wrap_index;

/// Outcome of feeding a pointer sample to the machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    /// Displacement crossed the activation threshold; dragging begins
    Activated { offset: f64 },
    /// Live drag update
    Moved { offset: f64 },
}

/// The drag/fling/settle state machine
#[derive(Debug)]
pub struct PanGestureMachine {
    config: GestureConfig,
    horizontal: bool,
    looping: bool,
    phase: GesturePhase,
    /// Scroll offset captured at pointer-down; drag offsets are relative to it
    baseline: f64,
    state: Option<GestureState>,
}

impl PanGestureMachine {
    /// Create a machine for the given axis and loop mode
    pub fn new(config: GestureConfig, horizontal: bool, looping: bool) -> Self {
        Self {
            config,
            horizontal,
            looping,
            phase: GesturePhase::Idle,
            baseline: 0.0,
            state: None,
        }
    }

    /// Current lifecycle phase
    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Transient state of the current pointer interaction, if any
    #[inline]
    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    /// Pointer down. Captures the current offset as the drag baseline;
    /// an in-flight settle must be cancelled by the caller first so the
    /// baseline is the mid-flight offset, never the stale settle target.
    ///
    /// Returns `false` when gestures are disabled or there is nothing to
    /// drag (zero items): no state transitions fire at all.
    pub fn begin(&mut self, current_offset: f64, item_count: usize) -> bool {
        if !self.config.enabled || item_count == 0 {
            return false;
        }
        self.baseline = current_offset;
        self.state = Some(GestureState::default());
        self.phase = GesturePhase::Idle;
        true
    }

    /// Pointer move. Returns an offset update once the gesture is active;
    /// `None` while below the activation threshold or after cross-axis
    /// rejection.
    pub fn update(
        &mut self,
        translation_x: f64,
        translation_y: f64,
        velocity_x: f64,
        velocity_y: f64,
    ) -> Option<PanEvent> {
        let horizontal = self.horizontal;
        let state = self.state.as_mut()?;
        state.translation_x = translation_x;
        state.translation_y = translation_y;
        state.velocity_x = velocity_x;
        state.velocity_y = velocity_y;

        let (main, cross) = if horizontal {
            (translation_x, translation_y)
        } else {
            (translation_y, translation_x)
        };

        match self.phase {
            GesturePhase::Idle => {
                let (main_band, cross_band) = if horizontal {
                    (self.config.active_offset_x, self.config.active_offset_y)
                } else {
                    (self.config.active_offset_y, self.config.active_offset_x)
                };

                if main < main_band[0] || main > main_band[1] {
                    // Main-axis intent wins even if the cross axis has
                    // also wandered by now
                    state.is_active = true;
                    self.phase = GesturePhase::Dragging;
                    debug!("pan gesture activated at translation {main}");
                    Some(PanEvent::Activated {
                        offset: self.baseline - main,
                    })
                } else if cross < cross_band[0] || cross > cross_band[1] {
                    // Cross axis escaped first: the enclosing scrollable
                    // owns this pointer
                    debug!("pan gesture rejected, cross-axis translation {cross}");
                    self.state = None;
                    None
                } else {
                    None
                }
            }
            GesturePhase::Dragging => Some(PanEvent::Moved {
                offset: self.baseline - main,
            }),
            _ => None,
        }
    }

    /// Pointer up. Destroys the transient gesture state and, if the
    /// gesture had activated, resolves the release into a snap target.
    pub fn end(&mut self, table: &SnapPointTable) -> Option<SnapResult> {
        let state = self.state.take()?;
        if !state.is_active || table.is_empty() {
            self.phase = GesturePhase::Idle;
            return None;
        }

        let (main_translation, main_velocity) = if self.horizontal {
            (state.translation_x, state.velocity_x)
        } else {
            (state.translation_y, state.velocity_y)
        };

        let offset = self.baseline - main_translation;
        let result = resolve_release(
            offset,
            main_velocity,
            self.config.velocity_threshold,
            table,
            self.looping,
        );
        self.phase = if result.flung {
            GesturePhase::Flinging
        } else {
            GesturePhase::Settling
        };
        debug!(
            "pan gesture released at {offset}, {} to index {}",
            self.phase.name(),
            result.target_index
        );
        Some(result)
    }

    /// A programmatic navigation entered the settle path
    pub fn note_settle(&mut self) {
        self.phase = GesturePhase::Settling;
    }

    /// The settle tween finished or was dropped; return to rest
    pub fn finish(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

/// Resolve a released gesture into a snap target.
///
/// At or above the velocity threshold the release is a fling: the target is
/// one step from the nearest index, in the velocity's direction (negative
/// velocity, a leftward/upward swipe, reveals the next item). Below the
/// threshold the nearest snap point wins. Loop mode wraps index arithmetic
/// and leaves the target offset un-normalized so motion takes the shorter
/// path; bounded mode clamps to the item range.
pub fn resolve_release(
    offset: f64,
    velocity: f64,
    velocity_threshold: f64,
    table: &SnapPointTable,
    looping: bool,
) -> SnapResult {
    let count = table.len();
    if count <= 1 || table.step() == 0.0 {
        return SnapResult {
            target_index: 0,
            target_offset: table.get(0).unwrap_or(0.0),
            flung: false,
        };
    }

    let step = table.step();
    let first = table.points()[0];
    let flung = velocity.abs() >= velocity_threshold;
    let fling_step = if velocity < 0.0 { 1 } else { -1 };

    let raw_nearest = if looping {
        // The table holds one period; distant offsets round to virtual
        // indices outside it
        ((offset - first) / step).round() as i64
    } else {
        table.nearest_index(offset) as i64
    };
    let raw_target = if flung { raw_nearest + fling_step } else { raw_nearest };

    if looping {
        let target_index = wrap_index(raw_target, count);
        SnapResult {
            target_index,
            target_offset: first + raw_target as f64 * step,
            flung,
        }
    } else {
        let target_index = raw_target.clamp(0, count as i64 - 1) as usize;
        SnapResult {
            target_index,
            target_offset: table.points()[target_index],
            flung,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SnapAlignment;
    use approx::assert_relative_eq;

    fn table(count: usize) -> SnapPointTable {
        SnapPointTable::compute(count, 100.0, 0.0, 100.0, SnapAlignment::Start)
    }

    #[test]
    fn test_release_snaps_to_nearest() {
        let result = resolve_release(260.0, 0.0, 500.0, &table(6), false);
        assert_eq!(result.target_index, 3);
        assert!(!result.flung);
        assert_relative_eq!(result.target_offset, 300.0);
    }

    #[test]
    fn test_fling_overrides_proximity() {
        // Released barely past index 4 but flung backward
        let result = resolve_release(410.0, 800.0, 500.0, &table(6), false);
        assert_eq!(result.target_index, 3);
        assert!(result.flung);
    }

    #[test]
    fn test_fling_forward_clamps_at_end() {
        let result = resolve_release(500.0, -900.0, 500.0, &table(6), false);
        assert_eq!(result.target_index, 5);
    }

    #[test]
    fn test_loop_fling_wraps_forward() {
        let result = resolve_release(500.0, -900.0, 500.0, &table(6), true);
        assert_eq!(result.target_index, 0);
        // Target offset continues forward past the end rather than
        // traversing the whole list backward
        assert_relative_eq!(result.target_offset, 600.0);
    }

    #[test]
    fn test_loop_fling_wraps_backward() {
        let result = resolve_release(0.0, 900.0, 500.0, &table(6), true);
        assert_eq!(result.target_index, 5);
        assert_relative_eq!(result.target_offset, -100.0);
    }

    #[test]
    fn test_single_item_always_targets_zero() {
        let result = resolve_release(260.0, -900.0, 500.0, &table(1), false);
        assert_eq!(result.target_index, 0);
        assert!(!result.flung);
    }

    #[test]
    fn test_machine_activation_and_drag() {
        let mut machine = PanGestureMachine::new(GestureConfig::default(), true, false);
        assert!(machine.begin(0.0, 6));

        // Below the activation threshold: no offset updates
        assert_eq!(machine.update(-5.0, 0.0, 0.0, 0.0), None);

        let event = machine.update(-20.0, 0.0, -100.0, 0.0).unwrap();
        assert_eq!(event, PanEvent::Activated { offset: 20.0 });
        assert!(machine.phase().is_dragging());

        let event = machine.update(-60.0, 0.0, -200.0, 0.0).unwrap();
        assert_eq!(event, PanEvent::Moved { offset: 60.0 });
    }

    #[test]
    fn test_machine_cross_axis_rejection() {
        let mut machine = PanGestureMachine::new(GestureConfig::default(), true, false);
        assert!(machine.begin(0.0, 6));

        // Vertical displacement escapes its band first
        assert_eq!(machine.update(-5.0, 80.0, 0.0, 0.0), None);
        // The gesture is surrendered: further samples are ignored
        assert_eq!(machine.update(-40.0, 80.0, -300.0, 0.0), None);
        assert_eq!(machine.end(&table(6)), None);
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_machine_disabled_by_zero_items() {
        let mut machine = PanGestureMachine::new(GestureConfig::default(), true, false);
        assert!(!machine.begin(0.0, 0));
        assert_eq!(machine.update(-40.0, 0.0, 0.0, 0.0), None);
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_machine_release_without_activation() {
        let mut machine = PanGestureMachine::new(GestureConfig::default(), true, false);
        machine.begin(0.0, 6);
        machine.update(-3.0, 0.0, 0.0, 0.0);
        assert_eq!(machine.end(&table(6)), None);
        assert!(machine.state().is_none());
    }

    #[test]
    fn test_machine_full_drag_release() {
        let mut machine = PanGestureMachine::new(GestureConfig::default(), true, false);
        machine.begin(0.0, 6);
        machine.update(-260.0, 0.0, -100.0, 0.0);

        let result = machine.end(&table(6)).unwrap();
        assert_eq!(result.target_index, 3);
        assert_eq!(machine.phase(), GesturePhase::Settling);
        // Transient gesture state is destroyed on release
        assert!(machine.state().is_none());

        machine.finish();
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_machine_fling_phase() {
        let mut machine = PanGestureMachine::new(GestureConfig::default(), true, false);
        machine.begin(400.0, 6);
        machine.update(-20.0, 0.0, -800.0, 0.0);

        let result = machine.end(&table(6)).unwrap();
        assert_eq!(result.target_index, 5);
        assert!(result.flung);
        assert_eq!(machine.phase(), GesturePhase::Flinging);
    }
}
