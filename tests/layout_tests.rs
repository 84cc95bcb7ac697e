use approx::assert_relative_eq;
use carousel_engine::layout::{compute_snap_points, find_nearest_index};
use carousel_engine::{SnapAlignment, SnapPointTable};

const ALIGNMENTS: [SnapAlignment; 3] = [
    SnapAlignment::Start,
    SnapAlignment::Center,
    SnapAlignment::End,
];

#[test]
fn test_snap_points_non_decreasing_with_constant_spacing() {
    for alignment in ALIGNMENTS {
        let points = compute_snap_points(8, 280.0, 16.0, 390.0, alignment);
        assert_eq!(points.len(), 8);
        for pair in points.windows(2) {
            assert!(pair[1] >= pair[0]);
            assert_relative_eq!(pair[1] - pair[0], 296.0);
        }
    }
}

#[test]
fn test_snap_point_formula() {
    // points[i] = i * (item_size + gap) - alignment_offset
    let points = compute_snap_points(4, 300.0, 20.0, 400.0, SnapAlignment::Center);
    let alignment_offset = (400.0 - 300.0) / 2.0;
    for (i, point) in points.iter().enumerate() {
        assert_relative_eq!(*point, i as f64 * 320.0 - alignment_offset);
    }
}

#[test]
fn test_find_nearest_round_trip() {
    for alignment in ALIGNMENTS {
        let points = compute_snap_points(10, 120.0, 8.0, 375.0, alignment);
        for (k, point) in points.iter().enumerate() {
            assert_eq!(find_nearest_index(*point, &points), k);
        }
    }
}

#[test]
fn test_find_nearest_ties_resolve_to_lower_index() {
    let points = compute_snap_points(5, 100.0, 0.0, 100.0, SnapAlignment::Start);
    // Exactly halfway between indices 1 and 2
    assert_eq!(find_nearest_index(150.0, &points), 1);
}

#[test]
fn test_table_matches_free_functions() {
    let table = SnapPointTable::compute(6, 200.0, 10.0, 350.0, SnapAlignment::End);
    let points = compute_snap_points(6, 200.0, 10.0, 350.0, SnapAlignment::End);

    assert_eq!(table.points(), points.as_slice());
    assert_relative_eq!(table.step(), 210.0);
    assert_relative_eq!(table.alignment_offset(), 150.0);
}

#[test]
fn test_empty_and_single_item_tables() {
    let empty = SnapPointTable::compute(0, 300.0, 0.0, 300.0, SnapAlignment::Start);
    assert!(empty.is_empty());
    assert_eq!(empty.nearest_index(123.0), 0);

    let single = SnapPointTable::compute(1, 300.0, 0.0, 300.0, SnapAlignment::Start);
    assert_eq!(single.len(), 1);
    assert_eq!(single.nearest_index(-500.0), 0);
    assert_eq!(single.nearest_index(500.0), 0);
}
