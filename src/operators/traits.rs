//! Seam between the mesh metrics and the derivative stencils.

use crate::error::{MeshError, Result};

/// A derivative operator along one axis of `len()` points.
///
/// Implementations differentiate with respect to the uniform
/// (computational) coordinate; [`StretchedDerivative`](super::StretchedDerivative)
/// maps the results onto a stretched axis.
pub trait Derivative1D {
    /// Number of points the operator acts on.
    fn len(&self) -> usize;

    /// Whether the operator acts on no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First derivative of `f`.
    fn first_derivative(&self, f: &[f64]) -> Result<Vec<f64>>;

    /// Second derivative of `f`.
    fn second_derivative(&self, f: &[f64]) -> Result<Vec<f64>>;
}

impl<D: Derivative1D + ?Sized> Derivative1D for &D {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn first_derivative(&self, f: &[f64]) -> Result<Vec<f64>> {
        (**self).first_derivative(f)
    }

    fn second_derivative(&self, f: &[f64]) -> Result<Vec<f64>> {
        (**self).second_derivative(f)
    }
}

/// Reject input whose length differs from the operator size.
pub(crate) fn check_len(expected: usize, f: &[f64]) -> Result<()> {
    if f.len() == expected {
        Ok(())
    } else {
        Err(MeshError::out_of_range(
            "f",
            f.len(),
            "input length must match the operator size",
        ))
    }
}
