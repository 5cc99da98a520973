// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
World space to chunk space conversion.

Every axis is shifted by the same `world_offset` (the world is cubical) and then
floor-divided by `chunk_size`. Arithmetic runs in i64 so the shift itself never
overflows; only the final chunk coordinate has to fit in i32.
*/

use feagi_config::ChunkingConfig;

use crate::types::{Axis, ChunkError, ChunkResult, Coordinate};

/// Chunk size and world offset, validated once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkGeometry {
    chunk_size: i32,
    world_offset: i32,
}

impl ChunkGeometry {
    /// # Errors
    ///
    /// Returns `ChunkError::InvalidConfiguration` if `chunk_size <= 0`.
    pub fn new(chunk_size: i32, world_offset: i32) -> ChunkResult<Self> {
        if chunk_size <= 0 {
            return Err(ChunkError::InvalidConfiguration(format!(
                "chunk_size must be positive, got {}",
                chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            world_offset,
        })
    }

    pub fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    pub fn world_offset(&self) -> i32 {
        self.world_offset
    }

    #[inline]
    fn shifted(&self, value: i32) -> i64 {
        value as i64 + self.world_offset as i64
    }

    /// Chunk-space coordinate of the chunk containing `point`
    pub fn chunk_of(&self, point: &Coordinate) -> ChunkResult<Coordinate> {
        let size = self.chunk_size as i64;
        let mut out = [0i32; 3];
        for (slot, axis) in out.iter_mut().zip(Axis::ALL) {
            let chunk = self.shifted(axis.component(point)).div_euclid(size);
            *slot = i32::try_from(chunk)
                .map_err(|_| ChunkError::CoordinateOverflow { axis, value: chunk })?;
        }
        Ok(Coordinate::from(out))
    }

    /// Position of `point` inside its chunk cell, each axis in `0..chunk_size`
    pub fn local_position(&self, point: &Coordinate) -> Coordinate {
        let size = self.chunk_size as i64;
        let local = Axis::ALL.map(|axis| self.shifted(axis.component(point)).rem_euclid(size) as i32);
        Coordinate::from(local)
    }

    /// World position of the low corner of a chunk
    pub fn chunk_origin(&self, chunk: &Coordinate) -> ChunkResult<Coordinate> {
        let mut out = [0i32; 3];
        for (slot, axis) in out.iter_mut().zip(Axis::ALL) {
            let world =
                axis.component(chunk) as i64 * self.chunk_size as i64 - self.world_offset as i64;
            *slot = i32::try_from(world)
                .map_err(|_| ChunkError::CoordinateOverflow { axis, value: world })?;
        }
        Ok(Coordinate::from(out))
    }

    /// Fractional position of `point` within its cell, each axis in `[0, 1)`
    pub fn cell_fractions(&self, point: &Coordinate) -> [f64; 3] {
        let local = self.local_position(point);
        let size = self.chunk_size as f64;
        [local.x as f64 / size, local.y as f64 / size, local.z as f64 / size]
    }
}

impl TryFrom<&ChunkingConfig> for ChunkGeometry {
    type Error = ChunkError;

    fn try_from(config: &ChunkingConfig) -> ChunkResult<Self> {
        Self::new(config.chunk_size, config.world_offset)
    }
}

/// Chunk-space coordinate of the chunk containing `point`
///
/// Each axis maps to `floor((axis + world_offset) / chunk_size)`.
///
/// # Errors
///
/// Returns `ChunkError::InvalidConfiguration` if `chunk_size <= 0`.
pub fn chunk_coordinate_from_world_position(
    point: &Coordinate,
    chunk_size: i32,
    world_offset: i32,
) -> ChunkResult<Coordinate> {
    ChunkGeometry::new(chunk_size, world_offset)?.chunk_of(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_rounds_into_next_chunk() {
        let c9 = chunk_coordinate_from_world_position(&Coordinate::new(9, 0, 0), 10, 0).unwrap();
        let c10 = chunk_coordinate_from_world_position(&Coordinate::new(10, 0, 0), 10, 0).unwrap();
        assert_eq!(c9.x, 0);
        assert_eq!(c10.x, 1);
    }

    #[test]
    fn test_negative_positions_floor() {
        let c = chunk_coordinate_from_world_position(&Coordinate::new(-1, -10, -11), 10, 0).unwrap();
        assert_eq!(c, Coordinate::new(-1, -1, -2));
    }

    #[test]
    fn test_world_offset_shifts_all_axes() {
        let c = chunk_coordinate_from_world_position(&Coordinate::new(-100, -1, 0), 16, 128).unwrap();
        // 28/16, 127/16, 128/16
        assert_eq!(c, Coordinate::new(1, 7, 8));
    }

    #[test]
    fn test_invalid_chunk_size() {
        for size in [0, -1, i32::MIN] {
            let err = chunk_coordinate_from_world_position(&Coordinate::origin(), size, 0).unwrap_err();
            assert!(matches!(err, ChunkError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_offset_does_not_overflow_shift() {
        let geometry = ChunkGeometry::new(1 << 20, i32::MAX).unwrap();
        let c = geometry.chunk_of(&Coordinate::new(i32::MAX, 0, 0)).unwrap();
        assert_eq!(c.x as i64, (2 * i32::MAX as i64) / (1 << 20));
    }

    #[test]
    fn test_chunk_coordinate_overflow() {
        let geometry = ChunkGeometry::new(1, i32::MAX).unwrap();
        let err = geometry.chunk_of(&Coordinate::new(0, 0, 1)).unwrap_err();
        assert!(matches!(err, ChunkError::CoordinateOverflow { axis: Axis::Z, .. }));
    }

    #[test]
    fn test_local_position_and_origin() {
        let geometry = ChunkGeometry::new(16, 0).unwrap();
        let point = Coordinate::new(-1, 17, 32);

        assert_eq!(geometry.chunk_of(&point).unwrap(), Coordinate::new(-1, 1, 2));
        assert_eq!(geometry.local_position(&point), Coordinate::new(15, 1, 0));
        assert_eq!(
            geometry.chunk_origin(&Coordinate::new(-1, 1, 2)).unwrap(),
            Coordinate::new(-16, 16, 32)
        );
    }

    #[test]
    fn test_cell_fractions() {
        let geometry = ChunkGeometry::new(16, 0).unwrap();
        assert_eq!(geometry.cell_fractions(&Coordinate::new(15, 0, 8)), [0.9375, 0.0, 0.5]);
    }

    #[test]
    fn test_from_config() {
        let config = ChunkingConfig {
            chunk_size: 32,
            world_offset: 64,
            edge_threshold: 0.1,
        };
        let geometry = ChunkGeometry::try_from(&config).unwrap();
        assert_eq!(geometry.chunk_size(), 32);
        assert_eq!(geometry.world_offset(), 64);
    }
}
