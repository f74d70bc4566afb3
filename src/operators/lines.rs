//! Batch evaluation over many independent lines.
//!
//! A field is passed as a flat slice of contiguous lines, each as long as
//! the operator, i.e. the differentiated axis varies fastest. Lines are
//! independent so the `parallel` variants split them across rayon workers
//! and return the same values as the serial ones.

use super::traits::Derivative1D;
use crate::error::{MeshError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn check_layout(n: usize, data: &[f64]) -> Result<()> {
    if n == 0 || data.len() % n != 0 {
        return Err(MeshError::out_of_range(
            "data",
            data.len(),
            "length must be a multiple of the operator size",
        ));
    }
    Ok(())
}

fn apply_lines<F>(n: usize, data: &[f64], derivative: F) -> Result<Vec<f64>>
where
    F: Fn(&[f64]) -> Result<Vec<f64>>,
{
    check_layout(n, data)?;
    let mut out = Vec::with_capacity(data.len());
    for line in data.chunks_exact(n) {
        out.extend(derivative(line)?);
    }
    Ok(out)
}

/// First derivative of every line in `data`.
pub fn apply_first_derivative_lines<D: Derivative1D>(op: &D, data: &[f64]) -> Result<Vec<f64>> {
    apply_lines(op.len(), data, |line| op.first_derivative(line))
}

/// Second derivative of every line in `data`.
pub fn apply_second_derivative_lines<D: Derivative1D>(op: &D, data: &[f64]) -> Result<Vec<f64>> {
    apply_lines(op.len(), data, |line| op.second_derivative(line))
}

#[cfg(feature = "parallel")]
fn apply_lines_parallel<F>(n: usize, data: &[f64], derivative: F) -> Result<Vec<f64>>
where
    F: Fn(&[f64]) -> Result<Vec<f64>> + Sync,
{
    check_layout(n, data)?;
    let lines = data
        .par_chunks_exact(n)
        .map(|line| derivative(line))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.concat())
}

/// First derivative of every line in `data`, lines processed in parallel.
///
/// Enable with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn apply_first_derivative_lines_parallel<D: Derivative1D + Sync>(
    op: &D,
    data: &[f64],
) -> Result<Vec<f64>> {
    apply_lines_parallel(op.len(), data, |line| op.first_derivative(line))
}

/// Second derivative of every line in `data`, lines processed in parallel.
///
/// Enable with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn apply_second_derivative_lines_parallel<D: Derivative1D + Sync>(
    op: &D,
    data: &[f64],
) -> Result<Vec<f64>> {
    apply_lines_parallel(op.len(), data, |line| op.second_derivative(line))
}
