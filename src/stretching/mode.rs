//! Stretching modes (`istret`) and refinement parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Where along the axis the grid refinement concentrates.
///
/// The discriminants are the `istret` codes used in the solver input
/// files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum StretchMode {
    /// No refinement: uniform spacing
    #[default]
    None = 0,
    /// Refinement at the center of the domain
    Center = 1,
    /// Refinement near both walls
    BothSides = 2,
    /// Refinement near the bottom wall only (the transform is evaluated on
    /// a domain of doubled length and its lower half retained)
    Bottom = 3,
}

impl StretchMode {
    /// `istret` code of this mode.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the coordinate is non-uniform.
    #[inline]
    pub fn is_stretched(self) -> bool {
        self != StretchMode::None
    }
}

impl TryFrom<u8> for StretchMode {
    type Error = MeshError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(StretchMode::None),
            1 => Ok(StretchMode::Center),
            2 => Ok(StretchMode::BothSides),
            3 => Ok(StretchMode::Bottom),
            other => Err(MeshError::UnsupportedMode(other)),
        }
    }
}

impl From<StretchMode> for u8 {
    fn from(mode: StretchMode) -> Self {
        mode.code()
    }
}

impl fmt::Display for StretchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Refinement settings of a stretched coordinate.
///
/// `beta` controls how strongly points concentrate: smaller values give
/// stronger refinement. It must be strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Refinement {
    /// Stretching mode (`istret`)
    pub istret: StretchMode,
    /// Refinement parameter
    pub beta: f64,
}

impl Default for Refinement {
    fn default() -> Self {
        Self {
            istret: StretchMode::None,
            beta: 1.0,
        }
    }
}

impl Refinement {
    /// Create refinement settings, validating `beta`.
    pub fn new(istret: StretchMode, beta: f64) -> Result<Self, MeshError> {
        validate_beta(beta)?;
        Ok(Self { istret, beta })
    }
}

/// Check that `beta` is finite and strictly positive.
pub(crate) fn validate_beta(beta: f64) -> Result<(), MeshError> {
    if beta.is_finite() && beta > 0.0 {
        Ok(())
    } else {
        Err(MeshError::out_of_range(
            "beta",
            beta,
            "must be finite and greater than zero",
        ))
    }
}
