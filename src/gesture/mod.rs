//! Gesture handling: pan state machine, release resolution, settle tween.

pub mod pan;
pub mod settle;
pub mod state;

pub use pan::{resolve_release, PanEvent, PanGestureMachine};
pub use settle::SettleAnimation;
pub use state::{GesturePhase, GestureState, SnapResult};
