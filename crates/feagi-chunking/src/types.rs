// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Core types for chunked spatial indexing.

The same [`Coordinate`] type is used for world positions and for chunk-space
positions. Converting between the two always goes through [`crate::addressing`].
*/

use core::fmt;

use serde::{Deserialize, Serialize};

/// Integer lattice position (x, y, z)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Shift by a per-axis delta
    ///
    /// The result must fit in i32; use [`Coordinate::checked_offset`] near the
    /// lattice limits.
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Shift by a per-axis delta, failing instead of wrapping
    ///
    /// # Errors
    ///
    /// Returns `ChunkError::CoordinateOverflow` for the first axis whose
    /// shifted value leaves the i32 range.
    pub fn checked_offset(&self, dx: i32, dy: i32, dz: i32) -> ChunkResult<Self> {
        let mut out = [0i32; 3];
        for ((slot, axis), delta) in out.iter_mut().zip(Axis::ALL).zip([dx, dy, dz]) {
            let value = axis.component(self) as i64 + delta as i64;
            *slot = i32::try_from(value)
                .map_err(|_| ChunkError::CoordinateOverflow { axis, value })?;
        }
        Ok(Self::from(out))
    }

    /// Components in axis order (x, y, z)
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<(i32, i32, i32)> for Coordinate {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for Coordinate {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Coordinate> for (i32, i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y, c.z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Lattice axis, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn component(self, c: &Coordinate) -> i32 {
        match self {
            Axis::X => c.x,
            Axis::Y => c.y,
            Axis::Z => c.z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Result type for chunking operations
pub type ChunkResult<T> = Result<T, ChunkError>;

/// Errors that can occur during chunking operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChunkError {
    #[error("Collision: position {position} is already occupied")]
    Collision { position: Coordinate },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Chunk coordinate overflow on {axis} axis: {value} does not fit in i32")]
    CoordinateOverflow { axis: Axis, value: i64 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChunkError {
    fn from(err: serde_json::Error) -> Self {
        ChunkError::Serialization(err.to_string())
    }
}

impl From<feagi_config::ConfigError> for ChunkError {
    fn from(err: feagi_config::ConfigError) -> Self {
        ChunkError::InvalidConfiguration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_equality_is_componentwise() {
        assert_eq!(Coordinate::new(1, 2, 3), Coordinate::from((1, 2, 3)));
        assert_ne!(Coordinate::new(1, 2, 3), Coordinate::new(3, 2, 1));
    }

    #[test]
    fn test_offset_and_display() {
        let c = Coordinate::new(-1, 0, 5).offset(1, -1, 0);
        assert_eq!(c, Coordinate::new(0, -1, 5));
        assert_eq!(c.to_string(), "(0, -1, 5)");
    }

    #[test]
    fn test_checked_offset_at_lattice_limits() {
        let low = Coordinate::new(i32::MIN, 0, 0);
        assert_eq!(
            low.checked_offset(-1, 0, 0),
            Err(ChunkError::CoordinateOverflow {
                axis: Axis::X,
                value: i32::MIN as i64 - 1,
            })
        );
        assert_eq!(low.checked_offset(1, -1, 0), Ok(Coordinate::new(i32::MIN + 1, -1, 0)));

        let high = Coordinate::new(0, 0, i32::MAX);
        assert!(matches!(
            high.checked_offset(0, 0, 1),
            Err(ChunkError::CoordinateOverflow { axis: Axis::Z, .. })
        ));
        assert_eq!(high.checked_offset(0, 0, -1), Ok(Coordinate::new(0, 0, i32::MAX - 1)));
    }

    #[test]
    fn test_collision_message_names_position() {
        let err = ChunkError::Collision {
            position: Coordinate::new(4, 5, 6),
        };
        assert_eq!(err.to_string(), "Collision: position (4, 5, 6) is already occupied");
    }
}
