//! Per-item animation progress derivation.
//!
//! Progress is the normalized distance, in step units, of an item from the
//! settled position: `0` means active, `-1` one position before (the
//! previous item), `+1` one position after (the next item). Values well
//! outside `[-1, 1]` are normal when stacked presets query distant
//! neighbors.

use crate::offset::SharedOffset;

/// Progress of `index` for a given scroll offset.
///
/// Measured against the item's snap point
/// (`index * step - alignment_offset`), which keeps the active item at
/// exactly `0` for every alignment mode. Dragging toward the next item
/// moves its progress from `+1` down to `0`. Returns `0` for degenerate
/// zero-step geometry.
#[inline]
pub fn item_progress(offset: f64, index: usize, step: f64, alignment_offset: f64) -> f64 {
    if step == 0.0 {
        return 0.0;
    }
    (index as f64 * step - alignment_offset - offset) / step
}

/// Render-context progress sampler bound to the shared scroll offset.
///
/// Cheap enough to evaluate per visible item per frame: one atomic read,
/// no allocation.
#[derive(Debug, Clone)]
pub struct ProgressSampler {
    offset: SharedOffset,
    step: f64,
    alignment_offset: f64,
}

impl ProgressSampler {
    /// Bind a sampler to an offset handle and fixed geometry
    pub fn new(offset: SharedOffset, step: f64, alignment_offset: f64) -> Self {
        Self {
            offset,
            step,
            alignment_offset,
        }
    }

    /// Live progress of `index`
    #[inline]
    pub fn progress(&self, index: usize) -> f64 {
        item_progress(self.offset.get(), index, self.step, self.alignment_offset)
    }

    /// Live page index derived from the offset, clamped to the item range.
    /// Drives pagination indicators.
    #[inline]
    pub fn current_page(&self, item_count: usize) -> usize {
        if self.step == 0.0 || item_count == 0 {
            return 0;
        }
        let page = ((self.offset.get() + self.alignment_offset) / self.step).round();
        (page.max(0.0) as usize).min(item_count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_progress_at_rest() {
        // Settled on index 2 with step 320 and no alignment offset
        let offset = 2.0 * 320.0;
        assert_relative_eq!(item_progress(offset, 2, 320.0, 0.0), 0.0);
        // Previous item is one position before: negative
        assert_relative_eq!(item_progress(offset, 1, 320.0, 0.0), -1.0);
        // Next item is one position after: positive
        assert_relative_eq!(item_progress(offset, 3, 320.0, 0.0), 1.0);
    }

    #[test]
    fn test_progress_with_alignment() {
        // Centered alignment shifts snap points but not progress
        let alignment_offset = 50.0;
        let settled = 2.0 * 320.0 - alignment_offset;
        assert_relative_eq!(item_progress(settled, 2, 320.0, alignment_offset), 0.0);
        assert_relative_eq!(item_progress(settled, 3, 320.0, alignment_offset), 1.0);
    }

    #[test]
    fn test_progress_degenerate_step() {
        assert_eq!(item_progress(123.0, 4, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_progress_far_neighbors() {
        let offset = 0.0;
        assert_relative_eq!(item_progress(offset, 5, 100.0, 0.0), 5.0);
    }

    #[test]
    fn test_dragging_forward_brings_next_toward_zero() {
        // Mid-drag from index 0 toward index 1
        assert_relative_eq!(item_progress(60.0, 1, 100.0, 0.0), 0.4);
        assert_relative_eq!(item_progress(60.0, 0, 100.0, 0.0), -0.6);
    }

    #[test]
    fn test_sampler_tracks_offset() {
        let offset = SharedOffset::new(0.0);
        let sampler = ProgressSampler::new(offset.clone(), 100.0, 0.0);

        assert_relative_eq!(sampler.progress(0), 0.0);
        offset.set(150.0);
        assert_relative_eq!(sampler.progress(0), -1.5);
        assert_relative_eq!(sampler.progress(2), 0.5);
    }

    #[test]
    fn test_current_page() {
        let offset = SharedOffset::new(0.0);
        let sampler = ProgressSampler::new(offset.clone(), 100.0, 0.0);

        assert_eq!(sampler.current_page(5), 0);
        offset.set(260.0);
        assert_eq!(sampler.current_page(5), 3);
        offset.set(1000.0);
        assert_eq!(sampler.current_page(5), 4);
        offset.set(-80.0);
        assert_eq!(sampler.current_page(5), 0);
        assert_eq!(sampler.current_page(0), 0);
    }
}
