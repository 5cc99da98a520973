// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The 26-chunk neighborhood: every offset in {-1, 0, 1}³ except the origin.

use crate::types::Coordinate;

/// Number of chunks around a chunk (8 corners, 12 edges, 6 faces)
pub const NEIGHBORHOOD_SIZE: usize = 26;

/// Face, edge or corner neighbor, by how many axes differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighborKind {
    /// One axis differs
    Face,
    /// Two axes differ
    Edge,
    /// All three axes differ
    Corner,
}

/// All 26 chunk-space offsets, generated as {-1, 0, 1}³ minus the origin
pub fn neighbor_offsets() -> impl Iterator<Item = (i32, i32, i32)> {
    (-1..=1)
        .flat_map(|dx| (-1..=1).flat_map(move |dy| (-1..=1).map(move |dz| (dx, dy, dz))))
        .filter(|&offset| offset != (0, 0, 0))
}

/// Kind of neighbor an offset points at, or `None` if it is the origin or
/// leaves the 3x3x3 block
pub fn neighbor_kind(offset: (i32, i32, i32)) -> Option<NeighborKind> {
    let (dx, dy, dz) = offset;
    if [dx, dy, dz].iter().any(|d| d.abs() > 1) {
        return None;
    }
    match [dx, dy, dz].iter().filter(|&&d| d != 0).count() {
        1 => Some(NeighborKind::Face),
        2 => Some(NeighborKind::Edge),
        3 => Some(NeighborKind::Corner),
        _ => None,
    }
}

/// Chunk-space coordinates of the 26 chunks around `chunk`
///
/// Existence is not checked; the caller must look each one up. A chunk on the
/// i32 limit of chunk space has no neighbors past it, so those are left out
/// and fewer than 26 coordinates come back.
pub fn neighbor_chunk_coordinates(chunk: &Coordinate) -> Vec<Coordinate> {
    let mut neighbors = Vec::with_capacity(NEIGHBORHOOD_SIZE);
    neighbors.extend(
        neighbor_offsets().filter_map(|(dx, dy, dz)| chunk.checked_offset(dx, dy, dz).ok()),
    );
    neighbors
}
