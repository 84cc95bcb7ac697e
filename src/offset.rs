//! Shared scroll offset cell.
//!
//! The scroll offset is the one piece of state read by both the control
//! context and the render-synchronous context. `SharedOffset` stores the
//! value as raw bits in an atomic word, so a writer always publishes a
//! complete value and a reader can never observe a torn update.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tear-free shared `f64` cell for the authoritative scroll offset.
///
/// Cloning yields another handle to the same cell; hand clones to the
/// render context for per-frame reads. Writes are owned by the gesture
/// state machine and the settle/navigation path.
#[derive(Debug, Clone)]
pub struct SharedOffset {
    bits: Arc<AtomicU64>,
}

impl SharedOffset {
    /// Create a cell holding `value`
    pub fn new(value: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(value.to_bits())),
        }
    }

    /// Read the current offset
    #[inline]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Publish a new offset, visible to the next read from any context
    #[inline]
    pub fn set(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }
}

impl Default for SharedOffset {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let offset = SharedOffset::new(0.0);
        assert_eq!(offset.get(), 0.0);

        offset.set(320.5);
        assert_eq!(offset.get(), 320.5);

        offset.set(-150.25);
        assert_eq!(offset.get(), -150.25);
    }

    #[test]
    fn test_clones_share_the_cell() {
        let writer = SharedOffset::new(1.0);
        let reader = writer.clone();

        writer.set(42.0);
        assert_eq!(reader.get(), 42.0);
    }

    #[test]
    fn test_visible_across_threads() {
        let writer = SharedOffset::new(0.0);
        let reader = writer.clone();

        let handle = std::thread::spawn(move || {
            writer.set(600.0);
        });
        handle.join().unwrap();

        assert_eq!(reader.get(), 600.0);
    }
}
