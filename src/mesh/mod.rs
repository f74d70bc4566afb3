//! Structured Cartesian mesh.
//!
//! Provides the mesh data structures of the flow solver:
//! - Admissible grid sizes for FFT-based Poisson solvers
//! - Self-consistent coordinates (uniform and stretched)
//! - Tagged field updates, typed and name-based
//! - The three-axis mesh aggregate

mod coordinate;
mod field;
mod grid_size;
mod mesh3d;

pub use coordinate::{Coordinate, MAX_LENGTH};
pub use field::{FIELD_NAMES, FieldUpdate, FieldValue};
pub use grid_size::{admissible_in_range, interval_count, is_admissible, possible_grid_sizes};
pub use mesh3d::{CoordinateVectors, Mesh3D};
