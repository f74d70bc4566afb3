//! Strongly-typed domain types shared by the mesh modules.
//!
//! - [`Axis`]: the three directions of a structured domain, parsed from
//!   their lowercase names
//! - [`Axes`]: named per-axis container (x, y, z)

mod axes;

pub use axes::{Axes, Axis};
