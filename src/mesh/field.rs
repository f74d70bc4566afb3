//! Tagged field updates for coordinates.
//!
//! Every mutation of a [`Coordinate`](super::Coordinate) is expressed as a
//! [`FieldUpdate`]. Callers that only know field names at runtime (input
//! files, keyword-style front ends) go through [`FieldUpdate::parse`],
//! which rejects unknown names and values of the wrong kind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::stretching::StretchMode;

/// Names accepted by [`FieldUpdate::parse`].
pub const FIELD_NAMES: [&str; 6] = [
    "length",
    "grid_size",
    "delta",
    "is_periodic",
    "istret",
    "beta",
];

/// A single write to one coordinate field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldUpdate {
    /// Physical extent; `delta` follows.
    Length(f64),
    /// Number of points; validated, then `delta` follows.
    GridSize(usize),
    /// Spacing; `length` follows.
    Delta(f64),
    /// Periodicity; `grid_size` shifts by one, then `delta` follows.
    #[serde(rename = "is_periodic")]
    Periodic(bool),
    /// Stretching mode (stretched coordinates only).
    Istret(StretchMode),
    /// Refinement parameter (stretched coordinates only).
    Beta(f64),
}

impl FieldUpdate {
    /// Name of the field this update writes.
    pub fn name(&self) -> &'static str {
        match self {
            FieldUpdate::Length(_) => "length",
            FieldUpdate::GridSize(_) => "grid_size",
            FieldUpdate::Delta(_) => "delta",
            FieldUpdate::Periodic(_) => "is_periodic",
            FieldUpdate::Istret(_) => "istret",
            FieldUpdate::Beta(_) => "beta",
        }
    }

    /// Build an update from a field name and a dynamically typed value.
    ///
    /// # Errors
    ///
    /// - [`MeshError::UnknownField`] if `name` is not a coordinate field
    /// - [`MeshError::TypeMismatch`] if `value` has the wrong kind
    /// - [`MeshError::UnsupportedMode`] for an `istret` code above 3
    ///
    /// # Example
    ///
    /// ```
    /// use compact_mesh::mesh::{FieldUpdate, FieldValue};
    ///
    /// let update = FieldUpdate::parse("grid_size", FieldValue::Int(33)).unwrap();
    /// assert_eq!(update, FieldUpdate::GridSize(33));
    ///
    /// assert!(FieldUpdate::parse("nx", FieldValue::Int(33)).is_err());
    /// ```
    pub fn parse(name: &str, value: FieldValue) -> Result<Self, MeshError> {
        match name {
            "length" => Ok(FieldUpdate::Length(value.as_float(name)?)),
            "delta" => Ok(FieldUpdate::Delta(value.as_float(name)?)),
            "beta" => Ok(FieldUpdate::Beta(value.as_float(name)?)),
            "grid_size" => {
                let n = value.as_int(name)?;
                let n = usize::try_from(n)
                    .map_err(|_| MeshError::out_of_range(name, n, "must be non-negative"))?;
                Ok(FieldUpdate::GridSize(n))
            }
            "is_periodic" => Ok(FieldUpdate::Periodic(value.as_bool(name)?)),
            "istret" => {
                let code = value.as_int(name)?;
                let code = u8::try_from(code)
                    .map_err(|_| MeshError::out_of_range(name, code, "must be 0, 1, 2 or 3"))?;
                Ok(FieldUpdate::Istret(StretchMode::try_from(code)?))
            }
            other => Err(MeshError::unknown_field(other, "parameter for Coordinate")),
        }
    }
}

impl fmt::Display for FieldUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldUpdate::Length(v) | FieldUpdate::Delta(v) | FieldUpdate::Beta(v) => {
                write!(f, "{} = {v:?}", self.name())
            }
            FieldUpdate::GridSize(n) => write!(f, "grid_size = {n}"),
            FieldUpdate::Periodic(p) => write!(f, "is_periodic = {p}"),
            FieldUpdate::Istret(mode) => write!(f, "istret = {mode}"),
        }
    }
}

/// Dynamically typed value for name-based updates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl FieldValue {
    fn as_float(self, field: &str) -> Result<f64, MeshError> {
        match self {
            FieldValue::Float(v) => Ok(v),
            FieldValue::Int(v) => Ok(v as f64),
            FieldValue::Bool(_) => Err(type_mismatch(field, "float")),
        }
    }

    fn as_int(self, field: &str) -> Result<i64, MeshError> {
        match self {
            FieldValue::Int(v) => Ok(v),
            _ => Err(type_mismatch(field, "integer")),
        }
    }

    fn as_bool(self, field: &str) -> Result<bool, MeshError> {
        match self {
            FieldValue::Bool(v) => Ok(v),
            _ => Err(type_mismatch(field, "bool")),
        }
    }
}

fn type_mismatch(field: &str, expected: &'static str) -> MeshError {
    MeshError::TypeMismatch {
        field: field.to_string(),
        expected,
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<usize> for FieldValue {
    fn from(v: usize) -> Self {
        FieldValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}
