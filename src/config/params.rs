//! Serde-deserialisable coordinate and mesh parameters.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mesh::{Coordinate, FieldUpdate};
use crate::stretching::StretchMode;
use crate::types::Axes;

/// Parameters of one coordinate. Absent fields keep their current value.
///
/// # Example
///
/// ```
/// use compact_mesh::config::CoordinateParams;
///
/// let params: CoordinateParams =
///     serde_json::from_str(r#"{"length": 2.0, "grid_size": 33}"#).unwrap();
/// let coord = params.to_coordinate().unwrap();
/// assert_eq!(coord.delta(), 0.0625);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoordinateParams {
    /// Physical extent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Number of points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<usize>,
    /// Spacing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    /// Periodicity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_periodic: Option<bool>,
    /// Stretching mode code (0 to 3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub istret: Option<StretchMode>,
    /// Refinement parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
}

impl CoordinateParams {
    /// Field updates for the present values.
    ///
    /// Periodicity comes first, then the refinement, the grid size, and
    /// finally `delta` and `length`; with both given, `length` wins.
    pub fn updates(&self) -> Vec<FieldUpdate> {
        [
            self.is_periodic.map(FieldUpdate::Periodic),
            self.istret.map(FieldUpdate::Istret),
            self.beta.map(FieldUpdate::Beta),
            self.grid_size.map(FieldUpdate::GridSize),
            self.delta.map(FieldUpdate::Delta),
            self.length.map(FieldUpdate::Length),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Whether refinement fields are present.
    pub fn has_refinement(&self) -> bool {
        self.istret.is_some() || self.beta.is_some()
    }

    /// Coordinate with these parameters applied to the defaults; stretched
    /// when refinement fields are present.
    pub fn to_coordinate(&self) -> Result<Coordinate> {
        if self.has_refinement() {
            Coordinate::stretched_with(self.updates())
        } else {
            Coordinate::with(self.updates())
        }
    }
}

impl From<&Coordinate> for CoordinateParams {
    fn from(coord: &Coordinate) -> Self {
        // delta is implied by length and grid_size
        Self {
            length: Some(coord.length()),
            grid_size: Some(coord.grid_size()),
            delta: None,
            is_periodic: Some(coord.is_periodic()),
            istret: coord.refinement().map(|r| r.istret),
            beta: coord.beta(),
        }
    }
}

/// Parameters of a three-dimensional mesh.
///
/// ```
/// use compact_mesh::config::MeshParams;
/// use compact_mesh::mesh::Mesh3D;
///
/// let params: MeshParams = serde_json::from_str(r#"{
///     "x": {"length": 4.0, "grid_size": 65},
///     "y": {"istret": 2, "beta": 0.259065151},
///     "z": {"grid_size": 16, "is_periodic": true}
/// }"#).unwrap();
///
/// let mesh = Mesh3D::from_params(&params).unwrap();
/// assert_eq!(mesh.size(), 65 * 17 * 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeshParams {
    /// Streamwise coordinate
    pub x: CoordinateParams,
    /// Wall-normal coordinate
    pub y: CoordinateParams,
    /// Spanwise coordinate
    pub z: CoordinateParams,
}

impl MeshParams {
    /// Per-axis view.
    pub fn as_axes(&self) -> Axes<CoordinateParams> {
        Axes::new(self.x, self.y, self.z)
    }
}

impl From<Axes<CoordinateParams>> for MeshParams {
    fn from(axes: Axes<CoordinateParams>) -> Self {
        Self {
            x: axes.x,
            y: axes.y,
            z: axes.z,
        }
    }
}
