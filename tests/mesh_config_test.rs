//! Building meshes and boundary descriptions from JSON input.

use compact_mesh::boundary::BoundaryCondition;
use compact_mesh::config::{CoordinateParams, MeshParams};
use compact_mesh::mesh::{FieldValue, Mesh3D};
use compact_mesh::stretching::StretchMode;
use compact_mesh::types::{Axes, Axis};
use compact_mesh::MeshError;

const CHANNEL: &str = r#"{
    "x": {"length": 12.566370614359172, "grid_size": 64, "is_periodic": true},
    "y": {"length": 2.0, "grid_size": 65, "istret": 2, "beta": 0.259065151},
    "z": {"length": 4.1887902047863905, "grid_size": 32, "is_periodic": true}
}"#;

#[test]
fn test_channel_from_json() {
    let params: MeshParams = serde_json::from_str(CHANNEL).unwrap();
    let mesh = Mesh3D::from_params(&params).unwrap();

    assert_eq!(mesh.shape(), Axes::new(64, 65, 32));
    assert!(mesh.x().is_periodic());
    assert!(mesh.z().is_periodic());
    assert_eq!(mesh.y().istret(), StretchMode::BothSides);

    let vectors = mesh.get();
    let y = &vectors[&Axis::Y];
    assert_eq!(y[0], 0.0);
    assert!((y[64] - 2.0).abs() < 1e-10);
    assert!((y[32] - 1.0).abs() < 1e-10);
    // Refined at both walls
    assert!(y[1] - y[0] < y[33] - y[32]);
    assert!(y[64] - y[63] < y[33] - y[32]);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let params: MeshParams = serde_json::from_str(r#"{"y": {"grid_size": 33}}"#).unwrap();
    let mesh = Mesh3D::from_params(&params).unwrap();
    assert_eq!(mesh.shape(), Axes::new(17, 33, 17));
    assert_eq!(mesh.y().istret(), StretchMode::None);
}

#[test]
fn test_invalid_values_surface_as_mesh_errors() {
    let params: MeshParams =
        serde_json::from_str(r#"{"z": {"grid_size": 16, "is_periodic": false}}"#).unwrap();
    assert!(matches!(
        Mesh3D::from_params(&params),
        Err(MeshError::InvalidGridSize { value: 16, .. })
    ));

    let params: MeshParams =
        serde_json::from_str(r#"{"y": {"istret": 3, "is_periodic": true}}"#).unwrap();
    assert!(matches!(
        Mesh3D::from_params(&params),
        Err(MeshError::IncompatibleRefinement { .. })
    ));

    // Refinement only exists on the wall-normal axis
    let params: MeshParams = serde_json::from_str(r#"{"x": {"beta": 0.5}}"#).unwrap();
    assert!(matches!(
        Mesh3D::from_params(&params),
        Err(MeshError::UnknownField { .. })
    ));
}

#[test]
fn test_typos_rejected_at_deserialisation() {
    assert!(serde_json::from_str::<MeshParams>(r#"{"x": {"gridsize": 17}}"#).is_err());
    assert!(serde_json::from_str::<CoordinateParams>(r#"{"istret": 7}"#).is_err());
}

#[test]
fn test_params_round_trip_through_json() {
    let params: MeshParams = serde_json::from_str(CHANNEL).unwrap();
    let mesh = Mesh3D::from_params(&params).unwrap();

    let json = serde_json::to_string_pretty(&mesh.params()).unwrap();
    let copy = Mesh3D::from_params(&serde_json::from_str(&json).unwrap()).unwrap();
    assert_eq!(copy.shape(), mesh.shape());
    for axis in Axis::ALL {
        let (a, b) = (copy.axis(axis), mesh.axis(axis));
        assert!((a.length() - b.length()).abs() < 1e-12);
        assert_eq!(a.is_periodic(), b.is_periodic());
        assert_eq!(a.istret(), b.istret());
    }
    assert!((copy.y().beta().unwrap() - 0.259065151).abs() < 1e-12);
}

#[test]
fn test_named_updates_match_json() {
    let mut mesh = Mesh3D::new();
    mesh.set_named([
        ("x", vec![("grid_size", FieldValue::Int(64)), ("is_periodic", FieldValue::Bool(true))]),
        ("y", vec![("istret", FieldValue::Int(2)), ("beta", FieldValue::Float(0.259065151))]),
    ])
    .unwrap();

    let params: MeshParams = serde_json::from_str(
        r#"{"x": {"grid_size": 64, "is_periodic": true}, "y": {"istret": 2, "beta": 0.259065151}}"#,
    )
    .unwrap();
    let from_json = Mesh3D::from_params(&params).unwrap();
    assert_eq!(mesh.shape(), from_json.shape());
    assert_eq!(mesh.x(), from_json.x());
    assert_eq!(mesh.y().istret(), from_json.y().istret());
    assert!((mesh.y().beta().unwrap() - from_json.y().beta().unwrap()).abs() < 1e-12);
}

#[test]
fn test_boundary_conditions_from_json() {
    let bcs: Axes<BoundaryCondition> = serde_json::from_str(
        r#"{
            "x": {"ncl1": 1, "ncln": 1, "npaire": 0},
            "y": {"ncl1": 2, "ncln": 1, "npaire": 1, "istret": 0, "beta": 1.0},
            "z": {"ncl1": 0, "ncln": 0, "npaire": 1}
        }"#,
    )
    .unwrap();

    assert!(!bcs.x.is_even());
    assert_eq!(bcs.y.interval_count(65), 64);
    assert!(bcs.z.is_periodic());
    assert_eq!(bcs.z.interval_count(32), 32);

    let partial: Axes<BoundaryCondition> = serde_json::from_str(r#"{"y": {"istret": 1}}"#).unwrap();
    assert_eq!(partial.x, BoundaryCondition::default());
    assert!(partial.y.is_stretched());
}

#[test]
fn test_mesh_boundary_conditions_follow_coordinates() {
    let params: MeshParams = serde_json::from_str(CHANNEL).unwrap();
    let bcs = Mesh3D::from_params(&params).unwrap().boundary_conditions();
    assert!(bcs.x.is_periodic());
    assert!(!bcs.y.is_periodic());
    assert_eq!(bcs.y.istret, StretchMode::BothSides);
    assert!(bcs.z.is_periodic());
}
