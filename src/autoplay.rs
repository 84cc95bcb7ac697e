//! Automatic slide advancement with pause and resume semantics.
//!
//! The controller is deadline-driven: the host pumps control time through
//! `update(now)` and the controller reports when an advance is due. Ticks
//! that fall while paused are skipped, not rescheduled, so the cadence
//! survives a pause. Teardown cancels every deadline and makes later
//! updates no-ops.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{AutoPlay, AutoPlayConfig, AutoPlayDirection, DEFAULT_AUTO_PLAY_INTERVAL_MS};
use crate::time::CarouselTime;

/// Runtime auto-play state snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoPlayState {
    pub enabled: bool,
    pub is_playing: bool,
    pub is_paused: bool,
    pub direction: AutoPlayDirection,
    pub interval: CarouselTime,
}

/// Timer-driven index advance controller
#[derive(Debug, Clone)]
pub struct AutoPlayController {
    config: AutoPlayConfig,
    interval: CarouselTime,
    playing: bool,
    paused: bool,
    next_tick: Option<CarouselTime>,
    resume_at: Option<CarouselTime>,
    alive: bool,
}

impl AutoPlayController {
    /// Build a controller from the auto-play option (boolean shorthand or
    /// full configuration). An enabled controller starts playing; its
    /// first deadline arms on the first `update`.
    pub fn new(auto_play: &AutoPlay) -> Self {
        let mut config = auto_play.normalized();
        if !config.interval_ms.is_finite() || config.interval_ms <= 0.0 {
            warn!(
                "auto-play interval {} is invalid, using default",
                config.interval_ms
            );
            config.interval_ms = DEFAULT_AUTO_PLAY_INTERVAL_MS;
        }
        let interval = CarouselTime::from_millis(config.interval_ms)
            .unwrap_or_else(|_| CarouselTime::from_millis(DEFAULT_AUTO_PLAY_INTERVAL_MS).unwrap());
        let playing = config.enabled;
        Self {
            config,
            interval,
            playing,
            paused: false,
            next_tick: None,
            resume_at: None,
            alive: true,
        }
    }

    /// Whether the repeating timer is armed
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether ticks are currently being skipped
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current state snapshot
    pub fn state(&self) -> AutoPlayState {
        AutoPlayState {
            enabled: self.config.enabled,
            is_playing: self.playing,
            is_paused: self.paused,
            direction: self.config.direction,
            interval: self.interval,
        }
    }

    /// Arm the repeating timer; the next tick fires one interval after the
    /// next `update`
    pub fn start(&mut self) {
        if !self.alive {
            return;
        }
        self.playing = true;
        self.paused = false;
        self.next_tick = None;
        self.resume_at = None;
    }

    /// Cancel the timer entirely
    pub fn stop(&mut self) {
        self.playing = false;
        self.paused = false;
        self.next_tick = None;
        self.resume_at = None;
    }

    /// Skip ticks until `resume`; the timer keeps its cadence
    pub fn pause(&mut self) {
        if self.playing {
            self.paused = true;
        }
    }

    /// Stop skipping ticks
    pub fn resume(&mut self) {
        self.paused = false;
        self.resume_at = None;
    }

    /// The user interacted: pause now and schedule a one-shot resume one
    /// interval from `now`, superseding any previously scheduled resume.
    pub fn on_interaction(&mut self, now: CarouselTime) {
        if self.config.pause_on_interaction && self.playing {
            self.paused = true;
            self.resume_at = Some(now + self.interval);
        }
    }

    /// Cancel all pending deadlines; the controller never fires again
    pub fn teardown(&mut self) {
        self.alive = false;
        self.stop();
    }

    /// Advance deadlines to `now`. Returns the direction to advance when
    /// an unpaused tick fired. A stall spanning several intervals fires a
    /// single advance and re-arms from `now`.
    pub fn update(&mut self, now: CarouselTime) -> Option<AutoPlayDirection> {
        if !self.alive || !self.playing {
            return None;
        }

        if let Some(resume_at) = self.resume_at {
            if now >= resume_at {
                self.paused = false;
                self.resume_at = None;
            }
        }

        let deadline = match self.next_tick {
            Some(deadline) => deadline,
            None => {
                // Lazily arm against the host clock
                self.next_tick = Some(now + self.interval);
                return None;
            }
        };

        if now < deadline {
            return None;
        }

        let mut next = deadline + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_tick = Some(next);

        if self.paused {
            None
        } else {
            Some(self.config.direction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: f64) -> CarouselTime {
        CarouselTime::from_millis(value).unwrap()
    }

    fn playing_controller(interval_ms: f64) -> AutoPlayController {
        let mut controller = AutoPlayController::new(&AutoPlay::Config(AutoPlayConfig {
            enabled: true,
            interval_ms,
            ..AutoPlayConfig::default()
        }));
        // Arm the first deadline
        assert_eq!(controller.update(ms(0.0)), None);
        controller
    }

    #[test]
    fn test_boolean_shorthand() {
        assert!(AutoPlayController::new(&AutoPlay::Enabled(true)).is_playing());
        assert!(!AutoPlayController::new(&AutoPlay::Enabled(false)).is_playing());
        assert!(!AutoPlayController::new(&AutoPlay::default()).is_playing());
    }

    #[test]
    fn test_ticks_at_interval() {
        let mut controller = playing_controller(1000.0);

        assert_eq!(controller.update(ms(999.0)), None);
        assert_eq!(controller.update(ms(1000.0)), Some(AutoPlayDirection::Forward));
        assert_eq!(controller.update(ms(1500.0)), None);
        assert_eq!(controller.update(ms(2000.0)), Some(AutoPlayDirection::Forward));
    }

    #[test]
    fn test_backward_direction() {
        let mut controller = AutoPlayController::new(&AutoPlay::Config(AutoPlayConfig {
            enabled: true,
            interval_ms: 1000.0,
            direction: AutoPlayDirection::Backward,
            ..AutoPlayConfig::default()
        }));
        controller.update(ms(0.0));
        assert_eq!(controller.update(ms(1000.0)), Some(AutoPlayDirection::Backward));
    }

    #[test]
    fn test_stop_cancels_everything() {
        let mut controller = playing_controller(1000.0);
        controller.stop();
        assert!(!controller.is_playing());
        assert_eq!(controller.update(ms(6000.0)), None);
    }

    #[test]
    fn test_pause_skips_ticks_without_rescheduling() {
        let mut controller = playing_controller(1000.0);
        controller.pause();
        assert!(controller.is_paused());

        // The deadline passes while paused: skipped, cadence kept
        assert_eq!(controller.update(ms(1000.0)), None);
        controller.resume();
        assert_eq!(controller.update(ms(1500.0)), None);
        assert_eq!(controller.update(ms(2000.0)), Some(AutoPlayDirection::Forward));
    }

    #[test]
    fn test_interaction_pause_resumes_after_one_interval() {
        let mut controller = playing_controller(1000.0);

        controller.on_interaction(ms(500.0));
        assert!(controller.is_paused());
        assert_eq!(controller.update(ms(1000.0)), None);

        // Resume deadline at 1500 passed: unpaused; tick at 2000 fires
        assert_eq!(controller.update(ms(1600.0)), None);
        assert!(!controller.is_paused());
        assert_eq!(controller.update(ms(2000.0)), Some(AutoPlayDirection::Forward));
    }

    #[test]
    fn test_interaction_resume_is_debounced() {
        let mut controller = playing_controller(1000.0);

        controller.on_interaction(ms(500.0));
        // A later interaction supersedes the scheduled resume
        controller.on_interaction(ms(900.0));

        assert_eq!(controller.update(ms(1600.0)), None);
        assert!(controller.is_paused());
        assert_eq!(controller.update(ms(1900.0)), None);
        assert!(!controller.is_paused());
    }

    #[test]
    fn test_catch_up_fires_once() {
        let mut controller = playing_controller(1000.0);

        // A long stall spans many intervals but yields a single advance
        assert_eq!(controller.update(ms(5500.0)), Some(AutoPlayDirection::Forward));
        assert_eq!(controller.update(ms(5900.0)), None);
        assert_eq!(controller.update(ms(6500.0)), Some(AutoPlayDirection::Forward));
    }

    #[test]
    fn test_teardown_silences_updates() {
        let mut controller = playing_controller(1000.0);
        controller.teardown();
        assert_eq!(controller.update(ms(2000.0)), None);
        controller.start();
        assert!(!controller.is_playing());
    }

    #[test]
    fn test_invalid_interval_falls_back_to_default() {
        let controller = AutoPlayController::new(&AutoPlay::Config(AutoPlayConfig {
            enabled: true,
            interval_ms: 0.0,
            ..AutoPlayConfig::default()
        }));
        assert_eq!(
            controller.state().interval,
            CarouselTime::from_millis(DEFAULT_AUTO_PLAY_INTERVAL_MS).unwrap()
        );
    }
}
