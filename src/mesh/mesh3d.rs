//! Three-dimensional structured mesh.
//!
//! A [`Mesh3D`] owns exactly three coordinates: `x` (streamwise, uniform),
//! `y` (wall-normal, may be stretched) and `z` (spanwise, uniform).

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use super::coordinate::Coordinate;
use super::field::{FieldUpdate, FieldValue};
use crate::boundary::BoundaryCondition;
use crate::config::{CoordinateParams, MeshParams};
use crate::error::Result;
use crate::types::{Axes, Axis};

/// Coordinate vectors keyed by axis, ordered x, y, z.
pub type CoordinateVectors = BTreeMap<Axis, Vec<f64>>;

/// A three-dimensional coordinate system.
///
/// # Example
///
/// ```
/// use compact_mesh::mesh::{FieldUpdate, Mesh3D};
/// use compact_mesh::types::Axis;
///
/// let mut mesh = Mesh3D::new();
/// mesh.set([
///     (Axis::X, vec![FieldUpdate::Length(4.0), FieldUpdate::GridSize(65)]),
///     (Axis::Z, vec![FieldUpdate::GridSize(16), FieldUpdate::Periodic(true)]),
/// ])
/// .unwrap();
///
/// assert_eq!(mesh.size(), 65 * 17 * 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesh3D {
    axes: Axes<Coordinate>,
}

impl Default for Mesh3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh3D {
    /// Mesh with default coordinates on every axis; `y` is stretchable.
    pub fn new() -> Self {
        Self {
            axes: Axes::new(Coordinate::new(), Coordinate::stretched(), Coordinate::new()),
        }
    }

    /// Mesh with per-axis updates applied to the defaults.
    pub fn with<I, U>(updates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Axis, U)>,
        U: IntoIterator<Item = FieldUpdate>,
    {
        let mut mesh = Self::new();
        mesh.set(updates)?;
        Ok(mesh)
    }

    /// Mesh built from deserialised parameters.
    pub fn from_params(params: &MeshParams) -> Result<Self> {
        let axes = params.as_axes();
        Self::with(axes.iter_axes().map(|(axis, p)| (axis, p.updates())))
    }

    /// Current state as parameters; `from_params` reproduces this mesh.
    pub fn params(&self) -> MeshParams {
        MeshParams::from(self.axes.map(|c| CoordinateParams::from(&c)))
    }

    /// Coordinate of one axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &Coordinate {
        &self.axes[axis]
    }

    /// Mutable coordinate of one axis; its own invariants still hold.
    #[inline]
    pub fn axis_mut(&mut self, axis: Axis) -> &mut Coordinate {
        &mut self.axes[axis]
    }

    /// Streamwise coordinate.
    #[inline]
    pub fn x(&self) -> &Coordinate {
        &self.axes.x
    }

    /// Wall-normal (stretched) coordinate.
    #[inline]
    pub fn y(&self) -> &Coordinate {
        &self.axes.y
    }

    /// Spanwise coordinate.
    #[inline]
    pub fn z(&self) -> &Coordinate {
        &self.axes.z
    }

    /// All three coordinates.
    #[inline]
    pub fn coordinates(&self) -> &Axes<Coordinate> {
        &self.axes
    }

    /// Total number of points, the product of the three axis sizes.
    pub fn size(&self) -> usize {
        self.axes.iter().map(Coordinate::size).product()
    }

    /// Alias for [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Whether the mesh has no points; never true for admissible grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of points per axis.
    pub fn shape(&self) -> Axes<usize> {
        self.axes.map(|c| c.size())
    }

    /// Boundary-condition descriptions derived from each coordinate.
    pub fn boundary_conditions(&self) -> Axes<BoundaryCondition> {
        self.axes.map(|c| c.boundary_condition())
    }

    /// Forward field updates to the named axes, as one transaction.
    pub fn set<I, U>(&mut self, updates: I) -> Result<()>
    where
        I: IntoIterator<Item = (Axis, U)>,
        U: IntoIterator<Item = FieldUpdate>,
    {
        let mut next = self.axes;
        for (axis, fields) in updates {
            next[axis].set(fields)?;
            debug!("Mesh3D: {axis} = {}", next[axis]);
        }
        self.axes = next;
        Ok(())
    }

    /// Forward name-based updates to axes given by name.
    ///
    /// Unknown axis names fail with
    /// [`MeshError::UnknownField`](crate::error::MeshError::UnknownField).
    ///
    /// ```
    /// use compact_mesh::mesh::{FieldValue, Mesh3D};
    ///
    /// let mut mesh = Mesh3D::new();
    /// mesh.set_named([("y", vec![("istret", FieldValue::Int(2))])]).unwrap();
    /// assert!(mesh.y().is_stretched());
    ///
    /// assert!(mesh.set_named([("w", vec![])]).is_err());
    /// ```
    pub fn set_named<'a, I, U>(&mut self, updates: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, U)>,
        U: IntoIterator<Item = (&'a str, FieldValue)>,
    {
        let parsed = updates
            .into_iter()
            .map(|(name, fields)| -> Result<(Axis, Vec<FieldUpdate>)> {
                let axis: Axis = name.parse()?;
                let fields = fields
                    .into_iter()
                    .map(|(field, value)| FieldUpdate::parse(field, value))
                    .collect::<Result<Vec<_>>>()?;
                Ok((axis, fields))
            })
            .collect::<Result<Vec<_>>>()?;
        self.set(parsed)
    }

    /// Coordinate vectors of all three axes.
    pub fn get(&self) -> CoordinateVectors {
        self.drop_axes(&[])
    }

    /// Coordinate vectors of all axes except the named ones, e.g. drop
    /// `x` to work on `yz` planes.
    ///
    /// ```
    /// use compact_mesh::mesh::Mesh3D;
    /// use compact_mesh::types::Axis;
    ///
    /// let planes = Mesh3D::new().drop(&["x"]).unwrap();
    /// assert_eq!(planes.keys().copied().collect::<Vec<_>>(), vec![Axis::Y, Axis::Z]);
    ///
    /// assert!(Mesh3D::new().drop(&["t"]).is_err());
    /// ```
    pub fn drop(&self, names: &[&str]) -> Result<CoordinateVectors> {
        let axes = names
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Axis>>>()?;
        Ok(self.drop_axes(&axes))
    }

    /// Coordinate vectors of all axes not listed in `dropped`.
    pub fn drop_axes(&self, dropped: &[Axis]) -> CoordinateVectors {
        self.axes
            .iter_axes()
            .filter(|(axis, _)| !dropped.contains(axis))
            .map(|(axis, coord)| (axis, coord.vector()))
            .collect()
    }
}

impl fmt::Display for Mesh3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mesh3D(")?;
        for (axis, coord) in self.axes.iter_axes() {
            writeln!(f, "    {axis} = {coord},")?;
        }
        f.write_str(")")
    }
}
