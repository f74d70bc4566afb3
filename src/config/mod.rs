//! Parameter structures for building coordinates and meshes from input
//! data.
//!
//! Every field is optional and unknown fields are rejected, so a typo in an
//! input file fails at deserialisation instead of being ignored. Values
//! are validated when the parameters are applied.

mod params;

pub use params::{CoordinateParams, MeshParams};
