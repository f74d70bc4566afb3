//! Derivatives on a stretched axis.
//!
//! The wrapped operator differentiates in the uniform computational
//! coordinate; the metric terms of the stretch transform map the results
//! onto the physical coordinate:
//!
//! ```text
//! f'  = ppy · D f
//! f'' = pp2y · D² f − pp4y · f'
//! ```

use super::central::CentralDifference;
use super::traits::Derivative1D;
use crate::boundary::BoundaryCondition;
use crate::error::{MeshError, Result};
use crate::mesh::Coordinate;
use crate::stretching::StretchedGrid;

#[derive(Clone, Debug, PartialEq)]
struct Metric {
    ppy: Vec<f64>,
    pp2y: Vec<f64>,
    pp4y: Vec<f64>,
}

/// A [`Derivative1D`] composed with the metric terms of a stretched axis.
///
/// On a uniform axis (`istret = 0`) it is the wrapped operator unchanged.
///
/// # Example
///
/// ```
/// use compact_mesh::mesh::{Coordinate, FieldUpdate};
/// use compact_mesh::operators::{Derivative1D, StretchedDerivative};
/// use compact_mesh::stretching::StretchMode;
///
/// let coord = Coordinate::stretched_with([
///     FieldUpdate::GridSize(65),
///     FieldUpdate::Istret(StretchMode::Center),
/// ])
/// .unwrap();
/// let op = StretchedDerivative::for_coordinate(&coord).unwrap();
///
/// // dy/dy = 1 on the stretched points
/// let dy = op.first_derivative(&coord.vector()).unwrap();
/// assert!(dy.iter().all(|v| (v - 1.0).abs() < 1e-2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StretchedDerivative<D> {
    inner: D,
    metric: Option<Metric>,
}

impl<D: Derivative1D> StretchedDerivative<D> {
    /// Wrap `inner` for an axis of extent `span` described by `bc`.
    ///
    /// The metric terms are computed for `inner.len()` points with the
    /// interval count implied by `bc`.
    pub fn new(inner: D, bc: &BoundaryCondition, span: f64) -> Result<Self> {
        let grid = bc.metric(inner.len(), span)?;
        match grid {
            Some(grid) => Self::from_grid(inner, grid),
            None => Ok(Self::uniform(inner)),
        }
    }

    /// Wrap `inner` with the metric terms of an existing stretch transform.
    pub fn from_grid(inner: D, grid: StretchedGrid) -> Result<Self> {
        if grid.len() != inner.len() {
            return Err(MeshError::out_of_range(
                "ny",
                grid.len(),
                "stretched grid size must match the operator size",
            ));
        }
        Ok(Self {
            inner,
            metric: Some(Metric {
                ppy: grid.ppy,
                pp2y: grid.pp2y,
                pp4y: grid.pp4y,
            }),
        })
    }

    /// Wrap `inner` without stretching.
    pub fn uniform(inner: D) -> Self {
        Self {
            inner,
            metric: None,
        }
    }

    /// Whether the metric terms are applied.
    #[inline]
    pub fn is_stretched(&self) -> bool {
        self.metric.is_some()
    }

    /// The wrapped operator.
    #[inline]
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Unwrap the operator.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl StretchedDerivative<CentralDifference> {
    /// Central differences on `coord`, stretched when the coordinate is.
    pub fn for_coordinate(coord: &Coordinate) -> Result<Self> {
        let inner = CentralDifference::for_coordinate(coord)?;
        match coord.stretched_grid()? {
            Some(grid) => Self::from_grid(inner, grid),
            None => Ok(Self::uniform(inner)),
        }
    }
}

impl<D: Derivative1D> Derivative1D for StretchedDerivative<D> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn first_derivative(&self, f: &[f64]) -> Result<Vec<f64>> {
        let mut df = self.inner.first_derivative(f)?;
        if let Some(metric) = &self.metric {
            for (d, ppy) in df.iter_mut().zip(&metric.ppy) {
                *d *= ppy;
            }
        }
        Ok(df)
    }

    fn second_derivative(&self, f: &[f64]) -> Result<Vec<f64>> {
        let mut d2f = self.inner.second_derivative(f)?;
        if let Some(metric) = &self.metric {
            let df = self.first_derivative(f)?;
            for (((d2, d1), pp2y), pp4y) in d2f
                .iter_mut()
                .zip(&df)
                .zip(&metric.pp2y)
                .zip(&metric.pp4y)
            {
                *d2 = pp2y * *d2 - pp4y * d1;
            }
        }
        Ok(d2f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::FieldUpdate;
    use crate::stretching::{Refinement, StretchMode};

    fn stretched(mode: StretchMode, beta: f64, length: f64, n: usize) -> Coordinate {
        Coordinate::stretched_with([
            FieldUpdate::Istret(mode),
            FieldUpdate::Beta(beta),
            FieldUpdate::Length(length),
            FieldUpdate::GridSize(n),
        ])
        .unwrap()
    }

    #[test]
    fn test_linear_field_on_stretched_axis() {
        for (mode, length, n, tol) in [
            (StretchMode::Center, 1.0, 65, 1e-3),
            (StretchMode::BothSides, 2.0, 129, 1e-3),
            (StretchMode::Bottom, 1.0, 129, 1e-3),
        ] {
            let coord = stretched(mode, 1.0, length, n);
            let op = StretchedDerivative::for_coordinate(&coord).unwrap();
            assert!(op.is_stretched());

            let y = coord.vector();
            let dy = op.first_derivative(&y).unwrap();
            for (j, v) in dy.iter().enumerate() {
                assert!((v - 1.0).abs() < tol, "mode {mode}: dy/dy at {j} = {v}");
            }
        }
    }

    #[test]
    fn test_quadratic_field_on_stretched_axis() {
        let coord = stretched(StretchMode::Center, 1.0, 1.0, 65);
        let op = StretchedDerivative::for_coordinate(&coord).unwrap();
        let f: Vec<f64> = coord.vector().iter().map(|y| y * y).collect();

        let d2f = op.second_derivative(&f).unwrap();
        for (j, v) in d2f.iter().enumerate() {
            assert!((v - 2.0).abs() < 5e-2, "d2(y^2) at {j} = {v}");
        }
    }

    #[test]
    fn test_uniform_axis_is_plain_operator() {
        let coord = Coordinate::stretched();
        let op = StretchedDerivative::for_coordinate(&coord).unwrap();
        assert!(!op.is_stretched());

        let f: Vec<f64> = coord.vector().iter().map(|y| y.sin()).collect();
        assert_eq!(
            op.first_derivative(&f).unwrap(),
            op.inner().first_derivative(&f).unwrap()
        );
        assert_eq!(
            op.second_derivative(&f).unwrap(),
            op.inner().second_derivative(&f).unwrap()
        );
    }

    #[test]
    fn test_new_from_boundary_condition() {
        let bc = BoundaryCondition::default().with_refinement(Refinement {
            istret: StretchMode::Center,
            beta: 1.0,
        });
        let inner = CentralDifference::new(17, 1.0 / 16.0, bc).unwrap();
        let op = StretchedDerivative::new(inner, &bc, 1.0).unwrap();

        let coord = stretched(StretchMode::Center, 1.0, 1.0, 17);
        let reference = StretchedDerivative::for_coordinate(&coord).unwrap();
        assert_eq!(op, reference);
    }

    #[test]
    fn test_grid_size_mismatch() {
        let coord = stretched(StretchMode::Center, 1.0, 1.0, 17);
        let grid = coord.stretched_grid().unwrap().unwrap();
        let inner = CentralDifference::new(33, 1.0 / 32.0, BoundaryCondition::default()).unwrap();
        assert!(StretchedDerivative::from_grid(inner, grid).is_err());
    }
}
