//! # compact-mesh
//!
//! Coordinate and mesh abstractions for structured-mesh, high-order finite
//! difference flow solvers.
//!
//! This crate provides the mesh-side building blocks:
//! - Admissible grid sizes for FFT-based Poisson solvers
//! - Self-consistent coordinates (`length`, `grid_size`, `delta`,
//!   `is_periodic` always agree)
//! - Stretched wall-normal coordinates and their metric terms
//! - A three-axis mesh aggregate
//! - Boundary-condition descriptors and derivatives on stretched axes
//! - Serde parameter structures for input files
//!
//! # Example
//!
//! ```
//! use compact_mesh::{FieldUpdate, Mesh3D, StretchMode};
//! use compact_mesh::types::Axis;
//!
//! let mut mesh = Mesh3D::new();
//! mesh.set([
//!     (Axis::X, vec![FieldUpdate::Length(4.0), FieldUpdate::GridSize(65)]),
//!     (Axis::Y, vec![FieldUpdate::Istret(StretchMode::BothSides), FieldUpdate::Beta(0.26)]),
//!     (Axis::Z, vec![FieldUpdate::GridSize(16), FieldUpdate::Periodic(true)]),
//! ])
//! .unwrap();
//!
//! let yz = mesh.drop(&["x"]).unwrap();
//! assert_eq!(yz[&Axis::Z].len(), 16);
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod mesh;
pub mod operators;
pub mod stretching;
pub mod types;

// Re-export main types for convenience
pub use boundary::BoundaryCondition;
pub use config::{CoordinateParams, MeshParams};
pub use error::{MeshError, Result};
pub use mesh::{
    Coordinate, FieldUpdate, FieldValue, Mesh3D, is_admissible, possible_grid_sizes,
};
pub use operators::{CentralDifference, Derivative1D, StretchedDerivative};
pub use stretching::{Refinement, StretchMode, StretchedGrid, stretch};
pub use types::{Axes, Axis};
