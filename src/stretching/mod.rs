//! Non-uniform (stretched) mesh generation.
//!
//! The wall-normal direction of a channel or boundary-layer domain is
//! usually refined towards the walls, the center, or the bottom only.
//! The refinement is a closed-form inverse-tangent mapping of a uniform
//! computational coordinate, which keeps the FFT-based Poisson solver
//! applicable on the stretched direction.
//!
//! - [`StretchMode`]: `istret` code (none, center, both sides, bottom)
//! - [`Refinement`]: `istret` plus the refinement parameter `beta`
//! - [`stretch`]: physical coordinates and the metric terms
//!   `ppy`, `pp2y`, `pp4y`, at the mesh points and at the staggered
//!   half-step positions
//!
//! # Example
//!
//! ```
//! use compact_mesh::stretching::{StretchMode, stretch};
//!
//! // 17 points refined near both walls of a channel of height 2
//! let grid = stretch(StretchMode::BothSides, 1.0, 2.0, 16, 17).unwrap();
//!
//! let first_cell = grid.yp[1] - grid.yp[0];
//! let center_cell = grid.yp[9] - grid.yp[8];
//! assert!(first_cell < center_cell);
//! ```

mod mode;
mod transform;

pub use mode::{Refinement, StretchMode};
pub(crate) use mode::validate_beta;
pub use transform::{DEGENERATE_SENTINEL, StretchedGrid, mapping_alpha, stretch};
