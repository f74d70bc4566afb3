//! Self-consistent coordinate along one axis of a structured mesh.
//!
//! A coordinate holds four mutually dependent attributes: `length`,
//! `grid_size`, `delta` and `is_periodic`. Any of them may be written at
//! any time and in any order; each write goes through one state-transition
//! function that recomputes the others before returning, so that
//!
//! ```text
//! delta == length / sub_grid_size
//! grid_size ∈ possible_grid_sizes(is_periodic)
//! ```
//!
//! always hold. `sub_grid_size` is the interval count: `grid_size` when
//! periodic, `grid_size - 1` otherwise.
//!
//! Propagation rules (never back into the field just written):
//!
//! | Written       | Recomputed                                          |
//! |---------------|-----------------------------------------------------|
//! | `is_periodic` | `grid_size` ∓ 1, `sub_grid_size`, `delta`           |
//! | `grid_size`   | validated, then `sub_grid_size`, `delta`            |
//! | `length`      | `delta`                                             |
//! | `delta`       | `length`                                            |
//!
//! Writes are transactional: on error the coordinate keeps its previous
//! state. Mutation requires `&mut self`, so concurrent writers must
//! synchronise externally (e.g. behind a `Mutex`); reads may be shared.

use std::fmt;

use log::debug;

use super::field::{FieldUpdate, FieldValue};
use super::grid_size::{interval_count, possible_grid_sizes};
use crate::boundary::BoundaryCondition;
use crate::error::{MeshError, Result};
use crate::stretching::{Refinement, StretchMode, StretchedGrid, stretch, validate_beta};

/// Upper bound accepted for `length`.
pub const MAX_LENGTH: f64 = 1.0e10;

/// Coordinate along one axis, optionally stretched.
///
/// # Example
///
/// ```
/// use compact_mesh::mesh::{Coordinate, FieldUpdate};
///
/// let mut coord = Coordinate::new();
/// assert_eq!(coord.grid_size(), 17);
/// assert_eq!(coord.delta(), 0.0625);
///
/// // Length follows delta, grid size stays
/// coord.update(FieldUpdate::Delta(0.125)).unwrap();
/// assert_eq!(coord.length(), 2.0);
///
/// // Periodic coordinates omit the last point
/// coord.update(FieldUpdate::Periodic(true)).unwrap();
/// assert_eq!(coord.grid_size(), 16);
/// assert_eq!(coord.delta(), 0.125);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    length: f64,
    grid_size: usize,
    delta: f64,
    is_periodic: bool,
    sub_grid_size: usize,
    refinement: Option<Refinement>,
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinate {
    /// Uniform coordinate with the default values
    /// (`length = 1.0`, `grid_size = 17`, `delta = 0.0625`, non-periodic).
    pub fn new() -> Self {
        Self {
            length: 1.0,
            grid_size: 17,
            delta: 0.0625,
            is_periodic: false,
            sub_grid_size: 16,
            refinement: None,
        }
    }

    /// Stretched coordinate with the default values and `istret = 0`,
    /// `beta = 1.0`.
    pub fn stretched() -> Self {
        Self {
            refinement: Some(Refinement::default()),
            ..Self::new()
        }
    }

    /// Uniform coordinate with `updates` applied to the defaults.
    ///
    /// ```
    /// use compact_mesh::mesh::{Coordinate, FieldUpdate};
    ///
    /// let coord = Coordinate::with(
    ///     [FieldUpdate::Length(4.0), FieldUpdate::GridSize(65)],
    /// ).unwrap();
    /// assert_eq!(coord.delta(), 0.0625);
    /// ```
    pub fn with(updates: impl IntoIterator<Item = FieldUpdate>) -> Result<Self> {
        let mut coord = Self::new();
        coord.set(updates)?;
        Ok(coord)
    }

    /// Stretched coordinate with `updates` applied to the defaults.
    pub fn stretched_with(updates: impl IntoIterator<Item = FieldUpdate>) -> Result<Self> {
        let mut coord = Self::stretched();
        coord.set(updates)?;
        Ok(coord)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Physical extent.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of points.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Spacing between adjacent points (uniform counterpart when stretched).
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Whether the last point coincides with the first.
    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.is_periodic
    }

    /// Number of intervals.
    #[inline]
    pub fn sub_grid_size(&self) -> usize {
        self.sub_grid_size
    }

    /// Alias for [`grid_size`](Self::grid_size).
    #[inline]
    pub fn size(&self) -> usize {
        self.grid_size
    }

    /// Alias for [`grid_size`](Self::grid_size).
    #[inline]
    pub fn len(&self) -> usize {
        self.grid_size
    }

    /// Whether there are no points; never true for an admissible grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid_size == 0
    }

    /// Refinement settings, `None` for a uniform-only coordinate.
    #[inline]
    pub fn refinement(&self) -> Option<&Refinement> {
        self.refinement.as_ref()
    }

    /// Stretching mode, [`StretchMode::None`] for a uniform-only coordinate.
    #[inline]
    pub fn istret(&self) -> StretchMode {
        self.refinement.map_or(StretchMode::None, |r| r.istret)
    }

    /// Refinement parameter, `None` for a uniform-only coordinate.
    #[inline]
    pub fn beta(&self) -> Option<f64> {
        self.refinement.map(|r| r.beta)
    }

    /// Whether the points are non-uniformly distributed.
    #[inline]
    pub fn is_stretched(&self) -> bool {
        self.istret().is_stretched()
    }

    /// Admissible grid sizes for the current periodicity.
    pub fn possible_grid_size(&self) -> &'static [usize] {
        possible_grid_sizes(self.is_periodic)
    }

    // ---------------------------------------------------------------------
    // Derived arrays
    // ---------------------------------------------------------------------

    /// Coordinate values, `grid_size` of them, starting at 0.
    ///
    /// Uniform coordinates are evenly spaced and include `length` only when
    /// non-periodic. Stretched coordinates follow the stretch transform.
    ///
    /// ```
    /// use compact_mesh::mesh::{Coordinate, FieldUpdate};
    ///
    /// let coord = Coordinate::with([FieldUpdate::GridSize(9)]).unwrap();
    /// let x = coord.vector();
    /// assert_eq!(x.len(), 9);
    /// assert_eq!(x[8], 1.0);
    /// ```
    pub fn vector(&self) -> Vec<f64> {
        match self.stretched_grid() {
            Ok(Some(grid)) => grid.yp,
            Ok(None) => self.uniform_vector(),
            Err(err) => {
                debug!("stretch transform unavailable ({err}), using uniform spacing");
                self.uniform_vector()
            }
        }
    }

    /// Evenly spaced values, ignoring any refinement.
    pub fn uniform_vector(&self) -> Vec<f64> {
        let n = self.grid_size;
        let step = self.length / self.sub_grid_size as f64;
        let mut values: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
        if !self.is_periodic {
            if let Some(last) = values.last_mut() {
                *last = self.length;
            }
        }
        values
    }

    /// Stretch transform output (coordinates and metric terms) for a
    /// stretched coordinate, `None` when the points are uniform.
    ///
    /// A coordinate of zero length is treated as uniform.
    pub fn stretched_grid(&self) -> Result<Option<StretchedGrid>> {
        match self.refinement {
            Some(r) if r.istret.is_stretched() && self.length > 0.0 => stretch(
                r.istret,
                r.beta,
                self.length,
                self.sub_grid_size,
                self.grid_size,
            )
            .map(Some),
            _ => Ok(None),
        }
    }

    /// Boundary-condition description consumed by derivative stencils.
    ///
    /// Periodic coordinates get codes `0/0`; others the defaults. The
    /// refinement of a stretched coordinate is carried along.
    pub fn boundary_condition(&self) -> BoundaryCondition {
        let base = if self.is_periodic {
            BoundaryCondition::periodic()
        } else {
            BoundaryCondition::default()
        };
        match self.refinement {
            Some(r) => base.with_refinement(r),
            None => base,
        }
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    /// Apply one field update, propagating to the dependent fields.
    pub fn update(&mut self, update: FieldUpdate) -> Result<()> {
        let next = self.transition(update)?;
        debug!("{} : {update} -> {next}", self.kind());
        *self = next;
        Ok(())
    }

    /// Apply several updates as one transaction.
    ///
    /// Periodicity updates are applied first since they select the
    /// admissible-size table that `grid_size` is validated against; the
    /// remaining updates follow in the given order.
    ///
    /// ```
    /// use compact_mesh::mesh::{Coordinate, FieldUpdate};
    ///
    /// let mut coord = Coordinate::new();
    /// // 16 is only admissible once the coordinate is periodic
    /// coord.set([FieldUpdate::GridSize(16), FieldUpdate::Periodic(true)]).unwrap();
    /// assert_eq!(coord.grid_size(), 16);
    /// ```
    pub fn set(&mut self, updates: impl IntoIterator<Item = FieldUpdate>) -> Result<()> {
        let (periodic, rest): (Vec<_>, Vec<_>) = updates
            .into_iter()
            .partition(|u| matches!(u, FieldUpdate::Periodic(_)));

        let mut next = *self;
        for update in periodic.into_iter().chain(rest) {
            next = next.transition(update)?;
        }

        if next != *self {
            debug!("{} : {} -> {next}", self.kind(), *self);
        }
        *self = next;
        Ok(())
    }

    /// Apply updates given by field name.
    ///
    /// All names and values are checked before anything is applied.
    ///
    /// ```
    /// use compact_mesh::mesh::{Coordinate, FieldValue};
    ///
    /// let mut coord = Coordinate::new();
    /// coord
    ///     .set_named([("length", FieldValue::Float(2.0)), ("grid_size", FieldValue::Int(33))])
    ///     .unwrap();
    /// assert_eq!(coord.delta(), 0.0625);
    ///
    /// assert!(coord.set_named([("nz", FieldValue::Int(33))]).is_err());
    /// ```
    pub fn set_named<'a>(
        &mut self,
        updates: impl IntoIterator<Item = (&'a str, FieldValue)>,
    ) -> Result<()> {
        let parsed = updates
            .into_iter()
            .map(|(name, value)| FieldUpdate::parse(name, value))
            .collect::<Result<Vec<_>>>()?;
        self.set(parsed)
    }

    /// Set the physical extent.
    pub fn set_length(&mut self, length: f64) -> Result<()> {
        self.update(FieldUpdate::Length(length))
    }

    /// Set the number of points.
    pub fn set_grid_size(&mut self, grid_size: usize) -> Result<()> {
        self.update(FieldUpdate::GridSize(grid_size))
    }

    /// Set the spacing.
    pub fn set_delta(&mut self, delta: f64) -> Result<()> {
        self.update(FieldUpdate::Delta(delta))
    }

    /// Set the periodicity.
    pub fn set_periodic(&mut self, is_periodic: bool) -> Result<()> {
        self.update(FieldUpdate::Periodic(is_periodic))
    }

    /// Set the stretching mode (stretched coordinates only).
    pub fn set_istret(&mut self, istret: StretchMode) -> Result<()> {
        self.update(FieldUpdate::Istret(istret))
    }

    /// Set the refinement parameter (stretched coordinates only).
    pub fn set_beta(&mut self, beta: f64) -> Result<()> {
        self.update(FieldUpdate::Beta(beta))
    }

    /// State after applying `update`, with every invariant re-established.
    fn transition(mut self, update: FieldUpdate) -> Result<Self> {
        match update {
            FieldUpdate::Periodic(periodic) => {
                if periodic == self.is_periodic {
                    return Ok(self);
                }
                if periodic && self.istret() == StretchMode::Bottom {
                    return Err(MeshError::incompatible_refinement("is_periodic", periodic));
                }
                // Point count <-> interval count convention
                let grid_size = if periodic {
                    self.grid_size.saturating_sub(1)
                } else {
                    self.grid_size.saturating_add(1)
                };
                self.is_periodic = periodic;
                self.assign_grid_size(grid_size)?;
            }
            FieldUpdate::GridSize(grid_size) => self.assign_grid_size(grid_size)?,
            FieldUpdate::Length(length) => {
                validate_length("length", length)?;
                self.length = length;
                self.delta = length / self.sub_grid_size as f64;
            }
            FieldUpdate::Delta(delta) => {
                if !(delta.is_finite() && delta >= 0.0) {
                    return Err(MeshError::out_of_range(
                        "delta",
                        delta,
                        "must be finite and non-negative",
                    ));
                }
                let length = delta * self.sub_grid_size as f64;
                validate_length("delta", length)?;
                self.delta = delta;
                self.length = length;
            }
            FieldUpdate::Istret(istret) => {
                let periodic = self.is_periodic;
                let refinement = self.refinement_mut("istret")?;
                if istret == StretchMode::Bottom && periodic {
                    return Err(MeshError::incompatible_refinement("istret", istret));
                }
                refinement.istret = istret;
            }
            FieldUpdate::Beta(beta) => {
                validate_beta(beta)?;
                self.refinement_mut("beta")?.beta = beta;
            }
        }
        Ok(self)
    }

    fn assign_grid_size(&mut self, grid_size: usize) -> Result<()> {
        let sub_grid_size = interval_count(grid_size, self.is_periodic)
            .filter(|_| {
                possible_grid_sizes(self.is_periodic)
                    .binary_search(&grid_size)
                    .is_ok()
            })
            .ok_or_else(|| MeshError::InvalidGridSize {
                field: "grid_size".to_string(),
                value: grid_size,
                periodic: self.is_periodic,
            })?;
        self.grid_size = grid_size;
        self.sub_grid_size = sub_grid_size;
        self.delta = self.length / sub_grid_size as f64;
        Ok(())
    }

    fn refinement_mut(&mut self, field: &str) -> Result<&mut Refinement> {
        self.refinement
            .as_mut()
            .ok_or_else(|| MeshError::unknown_field(field, "parameter for Coordinate"))
    }

    fn kind(&self) -> &'static str {
        if self.refinement.is_some() {
            "StretchedCoordinate"
        } else {
            "Coordinate"
        }
    }
}

fn validate_length(field: &str, length: f64) -> Result<()> {
    if (0.0..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(MeshError::out_of_range(
            field,
            length,
            "length must lie in [0, 1e10]",
        ))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(length = {:?}, grid_size = {}, is_periodic = {}",
            self.kind(),
            self.length,
            self.grid_size,
            self.is_periodic
        )?;
        if let Some(r) = self.refinement.filter(|r| r.istret.is_stretched()) {
            write!(f, ", istret = {}, beta = {:?}", r.istret, r.beta)?;
        }
        f.write_str(")")
    }
}
