// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Seam proximity: which neighboring chunks a query around a point may reach.

Each axis is classified on its own from the point's fractional position inside
the cell. An axis near its low wall contributes offset -1, near its high wall
+1, and an interior axis contributes only 0. The candidates are the cartesian
product of the per-axis offset sets with the all-zero combination removed, so
one flagged axis gives a face neighbor, two give two faces and an edge, and
three give three faces, three edges and a corner.
*/

use ahash::AHashSet;
use tracing::trace;

use super::geometry::ChunkGeometry;
use crate::types::{ChunkError, ChunkResult, Coordinate};

/// Where a point sits along one axis of its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisProximity {
    Interior,
    NearLow,
    NearHigh,
    /// Only reachable with thresholds of 0.5 or more
    NearBoth,
}

impl AxisProximity {
    /// Offsets this axis contributes to the candidate product, 0 first
    pub fn offsets(self) -> &'static [i32] {
        match self {
            AxisProximity::Interior => &[0],
            AxisProximity::NearLow => &[0, -1],
            AxisProximity::NearHigh => &[0, 1],
            AxisProximity::NearBoth => &[0, -1, 1],
        }
    }

    pub fn is_interior(self) -> bool {
        self == AxisProximity::Interior
    }
}

/// # Errors
///
/// Returns `ChunkError::InvalidConfiguration` unless `0 <= edge_threshold < 1`.
pub fn validate_edge_threshold(edge_threshold: f64) -> ChunkResult<()> {
    if (0.0..1.0).contains(&edge_threshold) {
        Ok(())
    } else {
        Err(ChunkError::InvalidConfiguration(format!(
            "edge_threshold must be in [0, 1), got {}",
            edge_threshold
        )))
    }
}

/// Classify one axis from its cell fraction in `[0, 1)`
pub fn classify_axis(fraction: f64, edge_threshold: f64) -> AxisProximity {
    let near_low = fraction < edge_threshold;
    let near_high = (1.0 - fraction) < edge_threshold;
    match (near_low, near_high) {
        (false, false) => AxisProximity::Interior,
        (true, false) => AxisProximity::NearLow,
        (false, true) => AxisProximity::NearHigh,
        (true, true) => AxisProximity::NearBoth,
    }
}

impl ChunkGeometry {
    /// Per-axis classification of `point` against its cell walls
    pub fn axis_proximities(
        &self,
        point: &Coordinate,
        edge_threshold: f64,
    ) -> ChunkResult<[AxisProximity; 3]> {
        validate_edge_threshold(edge_threshold)?;
        Ok(self
            .cell_fractions(point)
            .map(|fraction| classify_axis(fraction, edge_threshold)))
    }

    /// Neighbor chunks to consult for `point`, excluding its own chunk
    ///
    /// # Errors
    ///
    /// Returns `ChunkError::InvalidConfiguration` for a threshold outside `[0, 1)`,
    /// or `ChunkError::CoordinateOverflow` when a candidate chunk would lie
    /// past the i32 limits of chunk space.
    pub fn nearby_chunks(
        &self,
        point: &Coordinate,
        edge_threshold: f64,
    ) -> ChunkResult<AHashSet<Coordinate>> {
        let containing = self.chunk_of(point)?;
        let [px, py, pz] = self.axis_proximities(point, edge_threshold)?;
        trace!(
            target: "feagi-chunking",
            "Point {} in chunk {}: x={:?} y={:?} z={:?}",
            point, containing, px, py, pz
        );

        let mut nearby = AHashSet::new();
        if px.is_interior() && py.is_interior() && pz.is_interior() {
            return Ok(nearby);
        }

        for &dx in px.offsets() {
            for &dy in py.offsets() {
                for &dz in pz.offsets() {
                    if (dx, dy, dz) != (0, 0, 0) {
                        nearby.insert(containing.checked_offset(dx, dy, dz)?);
                    }
                }
            }
        }
        Ok(nearby)
    }
}

/// Neighbor chunks to consult because `point` lies near a chunk seam
///
/// The containing chunk itself is never part of the result, and a threshold of
/// 0 always yields an empty set.
///
/// # Errors
///
/// Returns `ChunkError::InvalidConfiguration` if `chunk_size <= 0` or
/// `edge_threshold` is outside `[0, 1)`, and `ChunkError::CoordinateOverflow`
/// if the point's chunk or a candidate neighbor leaves the i32 range.
pub fn nearby_chunks_for_point(
    point: &Coordinate,
    world_offset: i32,
    chunk_size: i32,
    edge_threshold: f64,
) -> ChunkResult<AHashSet<Coordinate>> {
    ChunkGeometry::new(chunk_size, world_offset)?.nearby_chunks(point, edge_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;

    fn set(coords: &[(i32, i32, i32)]) -> AHashSet<Coordinate> {
        coords.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_corner_point_yields_seven_chunks() {
        let nearby = nearby_chunks_for_point(&Coordinate::new(15, 15, 15), 0, 16, 0.2).unwrap();
        let expected = set(&[
            (1, 1, 1),
            (1, 0, 0),
            (0, 1, 0),
            (0, 0, 1),
            (1, 1, 0),
            (1, 0, 1),
            (0, 1, 1),
        ]);
        assert_eq!(nearby, expected);
    }

    #[test]
    fn test_zero_threshold_is_always_empty() {
        for p in [(0, 0, 0), (15, 15, 15), (-1, 7, 16), (8, 8, 8)] {
            let nearby = nearby_chunks_for_point(&Coordinate::from(p), 0, 16, 0.0).unwrap();
            assert!(nearby.is_empty(), "{:?} should have no nearby chunks", p);
        }
    }

    #[test]
    fn test_interior_point() {
        let nearby = nearby_chunks_for_point(&Coordinate::new(8, 8, 8), 0, 16, 0.2).unwrap();
        assert!(nearby.is_empty());
    }

    #[test]
    fn test_single_face() {
        // x = 0 sits on the low wall of chunk 0
        let nearby = nearby_chunks_for_point(&Coordinate::new(0, 8, 8), 0, 16, 0.2).unwrap();
        assert_eq!(nearby, set(&[(-1, 0, 0)]));
    }

    #[test]
    fn test_edge_with_mixed_directions() {
        let nearby = nearby_chunks_for_point(&Coordinate::new(1, 8, 15), 0, 16, 0.2).unwrap();
        assert_eq!(nearby, set(&[(-1, 0, 0), (0, 0, 1), (-1, 0, 1)]));
    }

    #[test]
    fn test_world_offset_and_negative_points() {
        // -17 + 0 lands in chunk -2 at local 15
        let nearby = nearby_chunks_for_point(&Coordinate::new(-17, 8, 8), 0, 16, 0.2).unwrap();
        assert_eq!(nearby, set(&[(-1, 0, 0)]));

        // shifting by 16 moves the same point one chunk up
        let shifted = nearby_chunks_for_point(&Coordinate::new(-17, 8, 8), 16, 16, 0.2).unwrap();
        assert_eq!(shifted, set(&[(0, 1, 1)]));
    }

    #[test]
    fn test_wide_threshold_flags_both_walls() {
        let geometry = ChunkGeometry::new(4, 0).unwrap();
        let axes = geometry.axis_proximities(&Coordinate::new(2, 0, 0), 0.75).unwrap();
        assert_eq!(axes[0], AxisProximity::NearBoth);

        let nearby = geometry.nearby_chunks(&Coordinate::new(2, 2, 2), 0.75).unwrap();
        assert_eq!(nearby.len(), 26);
    }

    #[test]
    fn test_invalid_threshold() {
        for t in [-0.1, 1.0, 1.5, f64::NAN] {
            let err = nearby_chunks_for_point(&Coordinate::origin(), 0, 16, t).unwrap_err();
            assert!(matches!(err, ChunkError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_invalid_chunk_size() {
        let err = nearby_chunks_for_point(&Coordinate::origin(), 0, 0, 0.2).unwrap_err();
        assert!(matches!(err, ChunkError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_lattice_limits_report_overflow() {
        // chunk_size 1 puts i32::MIN on the low wall of chunk i32::MIN
        let err = nearby_chunks_for_point(&Coordinate::new(i32::MIN, 0, 0), 0, 1, 0.2).unwrap_err();
        assert!(matches!(err, ChunkError::CoordinateOverflow { axis: Axis::X, .. }));

        // (i32::MIN + i32::MIN) / 2 is chunk i32::MIN again, local 0
        let geometry = ChunkGeometry::new(2, i32::MIN).unwrap();
        let err = geometry
            .nearby_chunks(&Coordinate::new(0, i32::MIN, 0), 0.3)
            .unwrap_err();
        assert!(matches!(err, ChunkError::CoordinateOverflow { axis: Axis::Y, .. }));
    }

    #[test]
    fn test_top_of_lattice_near_low_wall() {
        let geometry = ChunkGeometry::new(16, 0).unwrap();
        let point = Coordinate::new(i32::MAX - 15, 8, 8);
        let containing = geometry.chunk_of(&point).unwrap();

        let nearby = geometry.nearby_chunks(&point, 0.2).unwrap();
        assert_eq!(nearby, set(&[(containing.x - 1, 0, 0)]));
    }

    #[test]
    fn test_classify_axis() {
        assert_eq!(classify_axis(0.05, 0.1), AxisProximity::NearLow);
        assert_eq!(classify_axis(0.95, 0.1), AxisProximity::NearHigh);
        assert_eq!(classify_axis(0.5, 0.1), AxisProximity::Interior);
        assert_eq!(classify_axis(0.0, 0.0), AxisProximity::Interior);
    }
}
