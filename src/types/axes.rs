//! Per-axis containers with named fields.
//!
//! A structured 3-D domain always has the same three directions, so
//! per-axis data is stored with named fields rather than in a map or an
//! index-ordered array.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// One of the three directions of a structured domain.
///
/// - `X`: streamwise
/// - `Y`: wall-normal (the direction that may be stretched)
/// - `Z`: spanwise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase axis name.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Position in canonical order (x = 0, y = 1, z = 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(MeshError::unknown_field(other, "coordinate for Mesh3D")),
        }
    }
}

/// Values attached to each of the three axes.
///
/// # Example
///
/// ```
/// use compact_mesh::types::{Axes, Axis};
///
/// let sizes = Axes::new(65, 17, 16);
/// assert_eq!(sizes[Axis::Y], 17);
/// assert_eq!(sizes.iter().product::<usize>(), 65 * 17 * 16);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Axes<T> {
    /// Streamwise value
    pub x: T,
    /// Wall-normal value
    pub y: T,
    /// Spanwise value
    pub z: T,
}

impl<T> Axes<T> {
    /// Create with explicit values per axis.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Create with the same value on all axes.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            x: value.clone(),
            y: value.clone(),
            z: value,
        }
    }

    /// Map a function over all axes.
    pub fn map<U, F>(self, mut f: F) -> Axes<U>
    where
        F: FnMut(T) -> U,
    {
        Axes {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Borrow the value of one axis.
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Mutably borrow the value of one axis.
    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Look up a value by axis name.
    pub fn by_name(&self, name: &str) -> Result<&T, MeshError> {
        Ok(self.get(name.parse()?))
    }

    /// Iterate over values in order x, y, z.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.x, &self.y, &self.z].into_iter()
    }

    /// Iterate over `(axis, value)` pairs in order x, y, z.
    pub fn iter_axes(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().zip(self.iter())
    }

    /// Convert to array `[x, y, z]`.
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T> std::ops::Index<Axis> for Axes<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        self.get(axis)
    }
}

impl<T> std::ops::IndexMut<Axis> for Axes<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        self.get_mut(axis)
    }
}

impl<T> From<[T; 3]> for Axes<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T: fmt::Display> fmt::Display for Axes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x:{} y:{} z:{}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_parse() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
    }

    #[test]
    fn test_axis_parse_unknown() {
        let err = "w".parse::<Axis>().unwrap_err();
        assert!(matches!(err, MeshError::UnknownField { ref name, .. } if name == "w"));
    }

    #[test]
    fn test_axis_name_roundtrip() {
        for axis in Axis::ALL {
            assert_eq!(axis.name().parse::<Axis>().unwrap(), axis);
            assert_eq!(axis.to_string(), axis.name());
        }
    }

    #[test]
    fn test_axes_indexing() {
        let mut axes = Axes::new(1, 2, 3);
        assert_eq!(axes[Axis::X], 1);
        assert_eq!(axes[Axis::Y], 2);
        assert_eq!(axes[Axis::Z], 3);

        axes[Axis::Y] = 20;
        assert_eq!(axes.y, 20);
    }

    #[test]
    fn test_axes_map_and_iter() {
        let axes = Axes::new(1, 2, 3).map(|v| v * 10);
        let collected: Vec<_> = axes.iter().copied().collect();
        assert_eq!(collected, vec![10, 20, 30]);

        let names: Vec<_> = axes.iter_axes().map(|(a, _)| a.name()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_axes_by_name() {
        let axes = Axes::uniform(7);
        assert_eq!(*axes.by_name("z").unwrap(), 7);
        assert!(axes.by_name("t").is_err());
    }

    #[test]
    fn test_axes_array_conversion() {
        let axes: Axes<i32> = [4, 5, 6].into();
        assert_eq!(axes.to_array(), [4, 5, 6]);
    }
}
