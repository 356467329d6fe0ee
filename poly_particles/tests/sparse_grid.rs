use std::collections::BTreeSet;

use cgmath::Vector2;
use poly_particles::{build_sparse_grid, GeometryError, GridKey, SparseGrid};

fn keys(grid: &SparseGrid) -> BTreeSet<(i32, i32)> {
    grid.iter().map(|(k, _)| (k.x, k.y)).collect()
}

#[test]
fn ten_by_ten_with_length_five_collapses_to_nine_keys() {
    let grid = build_sparse_grid((10.0f32, 10.0f32), 5).unwrap();
    assert_eq!(grid.num_hori(), 2);
    assert_eq!(grid.num_vert(), 2);

    let expected: BTreeSet<(i32, i32)> = [
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (-1, 0),
        (0, -1),
        (-1, 1),
        (1, -1),
        (-1, -1),
    ]
    .into_iter()
    .collect();
    assert_eq!(keys(&grid), expected);
    assert_eq!(grid.len(), 9);
}

#[test]
fn entry_count_is_four_quadrants_minus_axis_duplicates() {
    let cases = [
        (16.0f32, 10.0f32, 4u32),
        (10.0, 10.0, 5),
        (7.5, 3.0, 2),
        (100.0, 1.0, 3),
        (1.0, 1.0, 1),
    ];
    for (w, h, s) in cases {
        let grid = SparseGrid::new(Vector2::new(w, h), s).unwrap();
        let a = ((w / s as f32).ceil() as usize).max(1);
        let b = ((h / s as f32).ceil() as usize).max(1);
        assert_eq!(grid.len(), (2 * a - 1) * (2 * b - 1), "{w}x{h} / {s}");
    }
}

#[test]
fn bounds_smaller_than_a_block_still_get_one_block() {
    let grid = build_sparse_grid((0.5f32, 0.25f32), 8).unwrap();
    assert_eq!(grid.num_hori(), 1);
    assert_eq!(grid.num_vert(), 1);
    assert_eq!(grid.sorted_keys(), vec![GridKey::new(0, 0)]);
}

#[test]
fn every_block_holds_subgrid_length_default_cells() {
    let grid = build_sparse_grid((12.0f32, 6.0f32), 3).unwrap();
    assert_eq!(grid.subgrid_length(), 3);
    for (_, block) in grid.iter() {
        assert_eq!(block.len(), 3);
        assert!(block
            .cells()
            .iter()
            .all(|c| c.position == Vector2::new(0.0, 0.0)));
    }
    assert!(grid.contains(GridKey::new(-3, 1)));
    assert!(!grid.contains(GridKey::new(4, 0)));
    assert!(grid.get(GridKey::from((0, -1))).is_some());
}

#[test]
fn sorted_keys_are_ordered_and_unique() {
    let grid = build_sparse_grid((16.0f32, 10.0f32), 4).unwrap();
    let sorted = grid.sorted_keys();
    assert_eq!(sorted.len(), grid.len());
    assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(sorted.first(), Some(&GridKey::new(-3, -2)));
    assert_eq!(sorted.last(), Some(&GridKey::new(3, 2)));
}

#[test]
fn key_origin_scales_by_subgrid_length() {
    let origin = GridKey::new(-2, 3).origin(5);
    assert_eq!(origin, Vector2::new(-10.0, 15.0));
}

#[test]
fn rejects_invalid_input() {
    match build_sparse_grid((10.0f32, 10.0f32), 0) {
        Err(GeometryError::InvalidArgument { name, .. }) => assert_eq!(name, "subgrid_length"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
    match build_sparse_grid((0.0f32, 10.0f32), 2) {
        Err(GeometryError::InvalidArgument { name, .. }) => assert_eq!(name, "bounds_size.x"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
    match build_sparse_grid((4.0f32, -1.0f32), 2) {
        Err(GeometryError::InvalidArgument { name, .. }) => assert_eq!(name, "bounds_size.y"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
    assert!(build_sparse_grid((f32::NAN, 1.0f32), 2).is_err());
}
