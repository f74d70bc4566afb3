//! Second-order central differences on a uniform axis.

use super::traits::{Derivative1D, check_len};
use crate::boundary::BoundaryCondition;
use crate::error::{MeshError, Result};
use crate::mesh::Coordinate;

/// Smallest axis the one-sided second-derivative stencil fits on.
const MIN_POINTS: usize = 4;

/// Treatment of one axis end.
#[derive(Clone, Copy, Debug, PartialEq)]
enum End {
    /// Neighbour taken from the opposite end.
    Wrap,
    /// Ghost point mirrored from the first interior point, times the parity.
    Mirror(f64),
    /// One-sided stencil.
    OneSided,
}

impl End {
    fn new(code: u8, bc: &BoundaryCondition) -> Self {
        if bc.is_periodic() {
            End::Wrap
        } else if code == BoundaryCondition::FREE_SLIP {
            End::Mirror(if bc.is_even() { 1.0 } else { -1.0 })
        } else {
            End::OneSided
        }
    }
}

/// Second-order central-difference operator.
///
/// Interior points use the three-point stencils. Ends are periodic when
/// both codes are 0, mirrored with the `npaire` parity at free-slip ends,
/// and one-sided second order otherwise.
///
/// # Example
///
/// ```
/// use compact_mesh::boundary::BoundaryCondition;
/// use compact_mesh::operators::{CentralDifference, Derivative1D};
///
/// let op = CentralDifference::new(9, 0.125, BoundaryCondition::default()).unwrap();
/// let x: Vec<f64> = (0..9).map(|i| i as f64 * 0.125).collect();
/// let f: Vec<f64> = x.iter().map(|x| x * x).collect();
///
/// let df = op.first_derivative(&f).unwrap();
/// assert!((df[4] - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CentralDifference {
    n: usize,
    delta: f64,
    bc: BoundaryCondition,
    left: End,
    right: End,
}

impl CentralDifference {
    /// Operator for `n` points spaced `delta` apart.
    pub fn new(n: usize, delta: f64, bc: BoundaryCondition) -> Result<Self> {
        if n < MIN_POINTS {
            return Err(MeshError::out_of_range("n", n, "at least 4 points are required"));
        }
        if !(delta.is_finite() && delta > 0.0) {
            return Err(MeshError::out_of_range(
                "delta",
                delta,
                "must be finite and positive",
            ));
        }
        Ok(Self {
            n,
            delta,
            bc,
            left: End::new(bc.ncl1, &bc),
            right: End::new(bc.ncln, &bc),
        })
    }

    /// Operator on the uniform counterpart of `coord`, with the boundary
    /// condition the coordinate implies.
    pub fn for_coordinate(coord: &Coordinate) -> Result<Self> {
        Self::new(coord.grid_size(), coord.delta(), coord.boundary_condition())
    }

    /// Grid spacing.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Boundary condition the operator was built with.
    #[inline]
    pub fn boundary_condition(&self) -> &BoundaryCondition {
        &self.bc
    }
}

impl Derivative1D for CentralDifference {
    fn len(&self) -> usize {
        self.n
    }

    fn first_derivative(&self, f: &[f64]) -> Result<Vec<f64>> {
        check_len(self.n, f)?;
        let n = self.n;
        let inv = 0.5 / self.delta;

        let mut out = vec![0.0; n];
        for (o, w) in out[1..n - 1].iter_mut().zip(f.windows(3)) {
            *o = (w[2] - w[0]) * inv;
        }

        out[0] = match self.left {
            End::Wrap => (f[1] - f[n - 1]) * inv,
            End::Mirror(parity) => (f[1] - parity * f[1]) * inv,
            End::OneSided => (-3.0 * f[0] + 4.0 * f[1] - f[2]) * inv,
        };
        out[n - 1] = match self.right {
            End::Wrap => (f[0] - f[n - 2]) * inv,
            End::Mirror(parity) => (parity * f[n - 2] - f[n - 2]) * inv,
            End::OneSided => (3.0 * f[n - 1] - 4.0 * f[n - 2] + f[n - 3]) * inv,
        };
        Ok(out)
    }

    fn second_derivative(&self, f: &[f64]) -> Result<Vec<f64>> {
        check_len(self.n, f)?;
        let n = self.n;
        let inv = 1.0 / (self.delta * self.delta);

        let mut out = vec![0.0; n];
        for (o, w) in out[1..n - 1].iter_mut().zip(f.windows(3)) {
            *o = (w[2] - 2.0 * w[1] + w[0]) * inv;
        }

        out[0] = match self.left {
            End::Wrap => (f[1] - 2.0 * f[0] + f[n - 1]) * inv,
            End::Mirror(parity) => (f[1] - 2.0 * f[0] + parity * f[1]) * inv,
            End::OneSided => (2.0 * f[0] - 5.0 * f[1] + 4.0 * f[2] - f[3]) * inv,
        };
        out[n - 1] = match self.right {
            End::Wrap => (f[0] - 2.0 * f[n - 1] + f[n - 2]) * inv,
            End::Mirror(parity) => (parity * f[n - 2] - 2.0 * f[n - 1] + f[n - 2]) * inv,
            End::OneSided => {
                (2.0 * f[n - 1] - 5.0 * f[n - 2] + 4.0 * f[n - 3] - f[n - 4]) * inv
            }
        };
        Ok(out)
    }
}
