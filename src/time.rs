/**
 * Time handling for the control context.
 * The engine performs no I/O and spawns no threads; hosts pump
 * time into `update` and all deadlines are computed against it.
 */
use std::time::Duration;

use instant::Instant;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Represents a moment on the carousel's control timeline
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize, Default)]
pub struct CarouselTime(u64); // u64 nanoseconds for Ord compliance

impl CarouselTime {
    /// Create carousel time from nanoseconds
    #[inline]
    pub fn from_nanos(nanoseconds: u64) -> Self {
        Self(nanoseconds)
    }

    /// Create carousel time from milliseconds
    #[inline]
    pub fn from_millis(milliseconds: f64) -> Result<Self, CarouselError> {
        Self::from_seconds(milliseconds / 1000.0)
    }

    /// Create a new carousel time
    #[inline]
    pub fn from_seconds(seconds: f64) -> Result<Self, CarouselError> {
        if seconds < 0.0 || !seconds.is_finite() {
            return Err(CarouselError::InvalidTime { time: seconds });
        }
        let nanos = (seconds * 1_000_000_000.0) as u64;
        Ok(Self(nanos))
    }

    /// Zero time
    #[inline]
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get time in seconds
    #[inline]
    pub fn as_seconds(&self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    /// Get time in milliseconds
    #[inline]
    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Get time in nanoseconds
    #[inline]
    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Get the difference between two times, saturating at zero
    #[inline]
    pub fn duration_since(&self, earlier: CarouselTime) -> CarouselTime {
        CarouselTime(self.0.saturating_sub(earlier.0))
    }

    /// Clamp time to a range
    #[inline]
    pub fn clamp(&self, min: CarouselTime, max: CarouselTime) -> Self {
        if self.0 < min.0 {
            min
        } else if self.0 > max.0 {
            max
        } else {
            *self
        }
    }

    /// Whether this time is exactly zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::Add for CarouselTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for CarouselTime {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::ops::Sub for CarouselTime {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::ops::SubAssign for CarouselTime {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

// Easier conversions
impl From<u64> for CarouselTime {
    fn from(nanos: u64) -> Self {
        Self::from_nanos(nanos)
    }
}

impl From<CarouselTime> for u64 {
    fn from(time: CarouselTime) -> u64 {
        time.0
    }
}

impl From<f64> for CarouselTime {
    fn from(seconds: f64) -> Self {
        Self::from_seconds(seconds.max(0.0)).unwrap_or(Self::zero())
    }
}

impl From<CarouselTime> for f64 {
    fn from(time: CarouselTime) -> f64 {
        time.as_seconds()
    }
}

impl From<Duration> for CarouselTime {
    fn from(duration: Duration) -> Self {
        CarouselTime::from_nanos(duration.as_nanos() as u64)
    }
}

impl From<CarouselTime> for Duration {
    fn from(time: CarouselTime) -> Duration {
        Duration::from_nanos(time.0)
    }
}

/// Wall-clock timer for metric measurements
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in microseconds
    #[inline]
    pub fn elapsed_micros(&self) -> u128 {
        self.start.elapsed().as_micros()
    }

    /// Elapsed time in milliseconds
    #[inline]
    pub fn elapsed_millis(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
