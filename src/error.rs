//! Error types for coordinate and mesh operations.
//!
//! Every error is raised synchronously at the point of violation and
//! represents invalid input, never a transient condition. A failing update
//! leaves the coordinate or mesh exactly as it was before the call.

use thiserror::Error;

/// Errors raised by coordinates, meshes and the stretch transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Grid size whose interval count is not FFT-admissible.
    #[error(
        "{value} is an invalid value for grid size of {field} (periodic = {periodic}); \
         the interval count must be 2^(1+a) * 3^b * 5^c and at least 8"
    )]
    InvalidGridSize {
        /// Field or axis the value was assigned to.
        field: String,
        /// Rejected grid size.
        value: usize,
        /// Periodicity the value was validated against.
        periodic: bool,
    },

    /// Bottom refinement (`istret = 3`) requested on a periodic coordinate.
    #[error(
        "mesh refinement at the bottom (istret = 3) is not possible when periodic: \
         cannot set {field} = {value}"
    )]
    IncompatibleRefinement {
        /// Field whose assignment caused the conflict.
        field: String,
        /// Offending value, formatted.
        value: String,
    },

    /// Unrecognised attribute or axis name.
    #[error("{name} is not a valid {context}")]
    UnknownField {
        /// Name that was looked up.
        name: String,
        /// What kind of name was expected (e.g. "parameter for Coordinate").
        context: String,
    },

    /// Stretch transform invoked with a mode outside `{1, 2, 3}`.
    #[error("unsupported stretching mode istret = {0}, expected 1, 2 or 3")]
    UnsupportedMode(u8),

    /// Scalar outside its admissible range.
    #[error("{value} is out of range for {field}: {reason}")]
    OutOfRange {
        /// Field the value was assigned to.
        field: String,
        /// Rejected value, formatted.
        value: String,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// Dynamically named update carrying the wrong kind of value.
    #[error("{field} expects a value of type {expected}")]
    TypeMismatch {
        /// Field the value was assigned to.
        field: String,
        /// Expected value kind.
        expected: &'static str,
    },
}

impl MeshError {
    /// Create an unknown-field error.
    pub fn unknown_field(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownField {
            name: name.into(),
            context: context.into(),
        }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(
        field: impl Into<String>,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value: value.to_string(),
            reason,
        }
    }

    /// Create an incompatible-refinement error.
    pub fn incompatible_refinement(field: impl Into<String>, value: impl ToString) -> Self {
        Self::IncompatibleRefinement {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshError>;
