//! Behavioural properties of grid sizes, coordinates and meshes, checked
//! through the public API.

use approx::assert_relative_eq;
use compact_mesh::mesh::{
    Coordinate, FieldUpdate, Mesh3D, admissible_in_range, is_admissible, possible_grid_sizes,
};
use compact_mesh::stretching::{StretchMode, stretch};
use compact_mesh::types::Axis;
use compact_mesh::MeshError;

#[test]
fn test_periodic_table_boundaries() {
    for n in [8, 10, 12] {
        assert!(is_admissible(n, true), "{n} should be admissible when periodic");
    }
    for n in [9, 11] {
        assert!(!is_admissible(n, true), "{n} should not be admissible when periodic");
    }
}

#[test]
fn test_non_periodic_table_boundaries() {
    let table = possible_grid_sizes(false);
    assert_eq!(table[0], 9);
    assert!(is_admissible(17, false));
    assert!(!is_admissible(16, false));
    assert!(!is_admissible(8, false));
}

#[test]
fn test_table_is_exactly_the_admissible_set() {
    for periodic in [true, false] {
        let table = possible_grid_sizes(periodic);
        assert!(table.windows(2).all(|w| w[0] < w[1]));
        for &n in table {
            assert!(is_admissible(n, periodic));
            assert_eq!(is_admissible(n + 1, periodic), table.contains(&(n + 1)));
        }
        assert_eq!(admissible_in_range(periodic, 0, 9002), table);
    }
}

#[test]
fn test_delta_consistent_for_all_admissible_sizes() {
    for periodic in [false, true] {
        for &n in possible_grid_sizes(periodic).iter().step_by(7) {
            for length in [0.5, 1.0, 2.0 * std::f64::consts::PI, 1000.0] {
                let coord = Coordinate::with([
                    FieldUpdate::Periodic(periodic),
                    FieldUpdate::GridSize(n),
                    FieldUpdate::Length(length),
                ])
                .unwrap();
                let m = if periodic { n } else { n - 1 };
                assert_eq!(coord.sub_grid_size(), m);
                assert_relative_eq!(coord.delta(), length / m as f64, max_relative = 1e-12);
            }
        }
    }
}

#[test]
fn test_periodic_toggle_round_trip() {
    for &n in possible_grid_sizes(false).iter().step_by(11) {
        let mut coord = Coordinate::with([FieldUpdate::GridSize(n)]).unwrap();
        coord.set_periodic(true).unwrap();
        assert_eq!(coord.grid_size(), n - 1);
        coord.set_periodic(false).unwrap();
        assert_eq!(coord.grid_size(), n);
    }
}

#[test]
fn test_length_delta_round_trip() {
    let mut coord = Coordinate::with([FieldUpdate::GridSize(129)]).unwrap();

    coord.set_delta(0.0371).unwrap();
    assert_relative_eq!(coord.length(), 0.0371 * 128.0, max_relative = 1e-9);

    coord.set_length(7.25).unwrap();
    assert_relative_eq!(coord.delta(), 7.25 / 128.0, max_relative = 1e-9);
}

#[test]
fn test_bottom_refinement_periodic_conflict_both_orders() {
    let mut coord = Coordinate::stretched();
    coord.set_istret(StretchMode::Bottom).unwrap();
    assert!(matches!(
        coord.set_periodic(true),
        Err(MeshError::IncompatibleRefinement { .. })
    ));

    let mut coord = Coordinate::stretched();
    coord.set_periodic(true).unwrap();
    assert!(matches!(
        coord.set_istret(StretchMode::Bottom),
        Err(MeshError::IncompatibleRefinement { .. })
    ));

    // Both in one batch: periodicity is applied first, then the mode fails
    let mut coord = Coordinate::stretched();
    let err = coord
        .set([FieldUpdate::Istret(StretchMode::Bottom), FieldUpdate::Periodic(true)])
        .unwrap_err();
    assert!(matches!(err, MeshError::IncompatibleRefinement { .. }));
    assert_eq!(coord, Coordinate::stretched());
}

#[test]
fn test_invalid_grid_size_message_carries_value() {
    let err = Coordinate::with([FieldUpdate::GridSize(100)]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("100"), "{message}");
    assert!(message.contains("grid_size"), "{message}");
}

#[test]
fn test_stretch_center_profile() {
    let grid = stretch(StretchMode::Center, 1.0, 1.0, 16, 17).unwrap();
    assert_eq!(grid.yp[0], 0.0);
    assert!(grid.yp.windows(2).all(|w| w[1] >= w[0]));
    assert_relative_eq!(grid.yp[16], 1.0, epsilon = 1e-10);
    assert_eq!(grid.len(), 17);
}

#[test]
fn test_stretch_mode_none_is_unsupported() {
    assert_eq!(
        stretch(StretchMode::None, 1.0, 1.0, 16, 17).unwrap_err(),
        MeshError::UnsupportedMode(0)
    );
    assert_eq!(StretchMode::try_from(4u8).unwrap_err(), MeshError::UnsupportedMode(4));
}

#[test]
fn test_mesh_size_and_drop() {
    let mesh = Mesh3D::with([
        (Axis::X, vec![FieldUpdate::GridSize(65), FieldUpdate::Periodic(false)]),
        (Axis::Y, vec![FieldUpdate::GridSize(17)]),
        (Axis::Z, vec![FieldUpdate::GridSize(16), FieldUpdate::Periodic(true)]),
    ])
    .unwrap();
    assert_eq!(mesh.size(), 65 * 17 * 16);

    let yz = mesh.drop(&["x"]).unwrap();
    assert_eq!(yz.keys().copied().collect::<Vec<_>>(), vec![Axis::Y, Axis::Z]);

    assert!(matches!(
        mesh.drop(&["q"]),
        Err(MeshError::UnknownField { .. })
    ));
}

#[test]
fn test_coordinate_shared_across_threads() {
    let coord = std::sync::Arc::new(std::sync::Mutex::new(Coordinate::new()));

    let handles: Vec<_> = [33, 65, 129]
        .into_iter()
        .map(|n| {
            let coord = std::sync::Arc::clone(&coord);
            std::thread::spawn(move || {
                let mut guard = coord.lock().unwrap();
                guard.set_grid_size(n).unwrap();
                assert_relative_eq!(guard.delta(), 1.0 / (n - 1) as f64);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let coord = coord.lock().unwrap();
    assert!([33, 65, 129].contains(&coord.grid_size()));
}
