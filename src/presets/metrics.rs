//! Preset evaluation metrics.

use serde::{Deserialize, Serialize};

/// Counters for preset evaluation performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    /// Total evaluations, cached or not
    pub evaluations: u64,
    /// Evaluations served from the style cache
    pub cache_hits: u64,
    /// Wall-clock time spent in uncached evaluations (µs)
    pub total_eval_micros: u64,
}

impl EvaluationMetrics {
    /// Create zeroed metrics
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluation
    #[inline]
    pub fn record_evaluation(&mut self, micros: u64, cache_hit: bool) {
        self.evaluations += 1;
        if cache_hit {
            self.cache_hits += 1;
        } else {
            self.total_eval_micros += micros;
        }
    }

    /// Fraction of evaluations served from the cache
    #[inline]
    pub fn cache_hit_rate(&self) -> f64 {
        if self.evaluations == 0 {
            return 0.0;
        }
        self.cache_hits as f64 / self.evaluations as f64
    }

    /// Mean uncached evaluation time (µs)
    #[inline]
    pub fn average_eval_micros(&self) -> f64 {
        let misses = self.evaluations - self.cache_hits;
        if misses == 0 {
            return 0.0;
        }
        self.total_eval_micros as f64 / misses as f64
    }

    /// Reset all counters
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
