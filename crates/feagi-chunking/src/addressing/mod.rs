// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Chunk addressing: pure geometry over the chunked lattice.

- World position -> chunk-space coordinate
- The 26-chunk neighborhood of a chunk
- Seam proximity for points close to a chunk boundary

Nothing here holds state or checks whether a chunk exists.
*/

pub mod geometry;
pub mod neighbors;
pub mod proximity;

pub use geometry::{chunk_coordinate_from_world_position, ChunkGeometry};
pub use neighbors::{
    neighbor_chunk_coordinates, neighbor_kind, neighbor_offsets, NeighborKind, NEIGHBORHOOD_SIZE,
};
pub use proximity::{
    classify_axis, nearby_chunks_for_point, validate_edge_threshold, AxisProximity,
};
