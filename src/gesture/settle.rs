//! Cancellable settle animation.
//!
//! A fixed-duration smoothstep tween that carries the scroll offset from a
//! released or programmatic position to a snap target. The owner samples it
//! on every control tick and drops it to cancel; `retarget` re-baselines
//! from the current mid-flight position so an interrupting navigation never
//! jumps back.

use crate::time::CarouselTime;

#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// In-flight settle tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleAnimation {
    from: f64,
    to: f64,
    start: CarouselTime,
    duration: CarouselTime,
    target_index: usize,
}

impl SettleAnimation {
    /// Start a tween from `from` to `to`, settling on `target_index`
    pub fn new(
        from: f64,
        to: f64,
        target_index: usize,
        start: CarouselTime,
        duration: CarouselTime,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            target_index,
        }
    }

    /// Index this tween settles on
    #[inline]
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Offset this tween ends at
    #[inline]
    pub fn target_offset(&self) -> f64 {
        self.to
    }

    /// Whether the tween has reached its end
    #[inline]
    pub fn is_done(&self, now: CarouselTime) -> bool {
        now.duration_since(self.start) >= self.duration
    }

    /// Offset at `now`, eased and clamped to the tween range
    pub fn sample(&self, now: CarouselTime) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.duration_since(self.start);
        let t = (elapsed.as_seconds() / self.duration.as_seconds()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }

    /// Redirect the tween to a new target, starting from the current
    /// mid-flight offset
    pub fn retarget(
        &mut self,
        now: CarouselTime,
        new_to: f64,
        new_target_index: usize,
        duration: CarouselTime,
    ) {
        let current = self.sample(now);
        *self = Self::new(current, new_to, new_target_index, now, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ms(value: f64) -> CarouselTime {
        CarouselTime::from_millis(value).unwrap()
    }

    #[test]
    fn test_sample_endpoints() {
        let settle = SettleAnimation::new(0.0, 100.0, 1, ms(0.0), ms(200.0));
        assert_relative_eq!(settle.sample(ms(0.0)), 0.0);
        assert_relative_eq!(settle.sample(ms(200.0)), 100.0);
        assert_relative_eq!(settle.sample(ms(500.0)), 100.0);
    }

    #[test]
    fn test_sample_midpoint_eased() {
        let settle = SettleAnimation::new(0.0, 100.0, 1, ms(0.0), ms(200.0));
        // smoothstep(0.5) == 0.5
        assert_relative_eq!(settle.sample(ms(100.0)), 50.0);
        // Eased, not linear, off the midpoint
        assert!(settle.sample(ms(50.0)) < 25.0);
        assert!(settle.sample(ms(150.0)) > 75.0);
    }

    #[test]
    fn test_is_done() {
        let settle = SettleAnimation::new(0.0, 100.0, 1, ms(10.0), ms(200.0));
        assert!(!settle.is_done(ms(100.0)));
        assert!(settle.is_done(ms(210.0)));
        // A time before the start is simply not done
        assert!(!settle.is_done(ms(0.0)));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let settle = SettleAnimation::new(0.0, 100.0, 1, ms(0.0), CarouselTime::zero());
        assert!(settle.is_done(ms(0.0)));
        assert_relative_eq!(settle.sample(ms(0.0)), 100.0);
    }

    #[test]
    fn test_retarget_rebaselines_from_flight() {
        let mut settle = SettleAnimation::new(0.0, 100.0, 1, ms(0.0), ms(200.0));
        let mid = settle.sample(ms(100.0));
        settle.retarget(ms(100.0), 0.0, 0, ms(200.0));

        assert_eq!(settle.target_index(), 0);
        assert_relative_eq!(settle.sample(ms(100.0)), mid);
        assert_relative_eq!(settle.sample(ms(300.0)), 0.0);
    }
}
