//! Visible window calculation for item virtualization.

/// Compute the indices that must be mounted for the current offset.
///
/// `offset` is the alignment-corrected scroll offset (zero when item 0 is
/// settled). With `max_render == 0`, or when the list fits under the
/// threshold, every index is returned and virtualization is disabled.
/// Otherwise the window covers the on-screen items plus `buffer` extra
/// indices on each side, clamped to the item range, so the active item and
/// its neighbors never pop in during a fast scroll.
pub fn compute_visible_indices(
    offset: f64,
    item_count: usize,
    step: f64,
    container_size: f64,
    max_render: usize,
    buffer: usize,
) -> Vec<usize> {
    if max_render == 0 || item_count <= max_render {
        return (0..item_count).collect();
    }

    if step == 0.0 {
        return vec![0];
    }

    let current_index = (offset / step).round() as i64;
    let visible_count = (container_size / step).ceil() as i64 + 1;
    let half = (visible_count as f64 / 2.0).ceil() as i64;
    let buffer = buffer as i64;

    let start = ((current_index - half - buffer).max(0) as usize).min(item_count - 1);
    let end = ((current_index + half + buffer).max(0) as usize).min(item_count - 1);

    (start..=end).collect()
}
