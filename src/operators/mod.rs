//! Derivative operators along one axis of the mesh.
//!
//! The compact finite-difference stencils of the flow solver sit behind the
//! [`Derivative1D`] trait. This crate supplies the metric composition for
//! stretched axes ([`StretchedDerivative`]), a second-order reference
//! operator ([`CentralDifference`]) and batch evaluation over many lines.

mod central;
mod lines;
mod stretched;
mod traits;

pub use central::CentralDifference;
pub use lines::{apply_first_derivative_lines, apply_second_derivative_lines};
pub use stretched::StretchedDerivative;
pub use traits::Derivative1D;

#[cfg(feature = "parallel")]
pub use lines::{apply_first_derivative_lines_parallel, apply_second_derivative_lines_parallel};
