//! Carousel layout: snap-point geometry and item positioning.

use serde::{Deserialize, Serialize};

use crate::config::{SnapAlignment, DEFAULT_ITEM_SIZE};

/// Offset applied to every snap point for the configured alignment
#[inline]
pub fn alignment_offset(container_size: f64, item_size: f64, alignment: SnapAlignment) -> f64 {
    match alignment {
        SnapAlignment::Start => 0.0,
        SnapAlignment::Center => (container_size - item_size) / 2.0,
        SnapAlignment::End => container_size - item_size,
    }
}

/// Snap point for a single index
#[inline]
pub fn snap_point(index: usize, item_size: f64, gap: f64, alignment_offset: f64) -> f64 {
    index as f64 * (item_size + gap) - alignment_offset
}

/// Compute all snap points for the carousel
pub fn compute_snap_points(
    item_count: usize,
    item_size: f64,
    gap: f64,
    container_size: f64,
    alignment: SnapAlignment,
) -> Vec<f64> {
    let offset = alignment_offset(container_size, item_size, alignment);
    (0..item_count)
        .map(|i| snap_point(i, item_size, gap, offset))
        .collect()
}

/// Find the index of the nearest snap point by left-to-right linear scan.
/// Ties resolve to the lower index. An empty table yields index 0.
pub fn find_nearest_index(offset: f64, points: &[f64]) -> usize {
    let mut nearest_index = 0;
    let mut nearest_distance = f64::INFINITY;

    for (i, point) in points.iter().enumerate() {
        let distance = (offset - point).abs();
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest_index = i;
        }
    }

    nearest_index
}

/// Effective item size, defaulting to the container, then a fixed fallback
#[inline]
pub fn effective_item_size(item_size: Option<f64>, container_size: Option<f64>) -> f64 {
    item_size.or(container_size).unwrap_or(DEFAULT_ITEM_SIZE)
}

/// Precomputed snap-point geometry for one layout.
///
/// Immutable between geometry changes; the engine recomputes the table
/// whenever item count, item size, gap, container size, or alignment
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapPointTable {
    points: Vec<f64>,
    step: f64,
    alignment_offset: f64,
}

impl SnapPointTable {
    /// Compute the table for the given geometry
    pub fn compute(
        item_count: usize,
        item_size: f64,
        gap: f64,
        container_size: f64,
        alignment: SnapAlignment,
    ) -> Self {
        Self {
            points: compute_snap_points(item_count, item_size, gap, container_size, alignment),
            step: item_size + gap,
            alignment_offset: alignment_offset(container_size, item_size, alignment),
        }
    }

    /// An empty table for a carousel with no items
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            step: 0.0,
            alignment_offset: 0.0,
        }
    }

    /// All snap points in index order
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table has no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The spacing unit (item size + gap)
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Alignment offset baked into every point
    #[inline]
    pub fn alignment_offset(&self) -> f64 {
        self.alignment_offset
    }

    /// Snap point for an index, if in range
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.points.get(index).copied()
    }

    /// Nearest snap index for an offset; ties resolve to the lower index
    #[inline]
    pub fn nearest_index(&self, offset: f64) -> usize {
        find_nearest_index(offset, &self.points)
    }

    /// Total scroll extent of one full loop (item count x step)
    #[inline]
    pub fn extent(&self) -> f64 {
        self.points.len() as f64 * self.step
    }
}
