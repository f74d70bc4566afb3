//! Boundary-condition description for the derivative stencils.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stretching::{Refinement, StretchMode, StretchedGrid, stretch};

/// Per-axis boundary information consumed by derivative operators.
///
/// `ncl1` and `ncln` are the codes at the first and last point
/// ([`BoundaryCondition::PERIODIC`], [`BoundaryCondition::FREE_SLIP`],
/// [`BoundaryCondition::DIRICHLET`]); `npaire` selects even (1) or odd (0)
/// symmetry of the field at free-slip boundaries. Absent fields take the
/// defaults `ncl1 = ncln = 2`, `npaire = 1`, `istret = 0`, `beta = 1.0`.
///
/// # Example
///
/// ```
/// use compact_mesh::boundary::BoundaryCondition;
///
/// let bc: BoundaryCondition = serde_json::from_str(r#"{"ncl1": 1}"#).unwrap();
/// assert_eq!(bc.ncl1, 1);
/// assert_eq!(bc.ncln, 2);
/// assert_eq!(bc.interval_count(17), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryCondition {
    /// Code at the first point
    pub ncl1: u8,
    /// Code at the last point
    pub ncln: u8,
    /// Field parity (1 even, 0 odd)
    pub npaire: u8,
    /// Stretching mode of the axis
    pub istret: StretchMode,
    /// Refinement parameter of the axis
    pub beta: f64,
}

impl Default for BoundaryCondition {
    fn default() -> Self {
        Self {
            ncl1: Self::DIRICHLET,
            ncln: Self::DIRICHLET,
            npaire: 1,
            istret: StretchMode::None,
            beta: 1.0,
        }
    }
}

impl BoundaryCondition {
    /// Periodic boundary.
    pub const PERIODIC: u8 = 0;
    /// Free-slip (symmetry) boundary.
    pub const FREE_SLIP: u8 = 1;
    /// Dirichlet boundary.
    pub const DIRICHLET: u8 = 2;

    /// Create a description with explicit codes and no stretching.
    pub fn new(ncl1: u8, ncln: u8, npaire: u8) -> Self {
        Self {
            ncl1,
            ncln,
            npaire,
            ..Self::default()
        }
    }

    /// Periodic at both ends.
    pub fn periodic() -> Self {
        Self::new(Self::PERIODIC, Self::PERIODIC, 1)
    }

    /// Same codes with the given refinement.
    pub fn with_refinement(self, refinement: Refinement) -> Self {
        Self {
            istret: refinement.istret,
            beta: refinement.beta,
            ..self
        }
    }

    /// Whether both ends are periodic.
    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.ncl1 == Self::PERIODIC && self.ncln == Self::PERIODIC
    }

    /// Whether the axis is stretched.
    #[inline]
    pub fn is_stretched(&self) -> bool {
        self.istret.is_stretched()
    }

    /// Whether the field is even at free-slip boundaries.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.npaire != 0
    }

    /// Interval count for `n` points: `n` when periodic, `n - 1` otherwise.
    #[inline]
    pub fn interval_count(&self, n: usize) -> usize {
        if self.is_periodic() {
            n
        } else {
            n.saturating_sub(1)
        }
    }

    /// Uniform spacing of `n` points spanning `first..=last`.
    pub fn spacing(&self, first: f64, last: f64, n: usize) -> f64 {
        (last - first) / self.interval_count(n) as f64
    }

    /// Stretch transform for `n` points on an axis of extent `span`,
    /// `None` when the axis is not stretched.
    pub fn metric(&self, n: usize, span: f64) -> Result<Option<StretchedGrid>> {
        if !self.is_stretched() {
            return Ok(None);
        }
        stretch(self.istret, self.beta, span, self.interval_count(n), n).map(Some)
    }
}
