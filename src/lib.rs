// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # FEAGI Spatial
//!
//! Chunked spatial indexing for neuron lattices. The lattice is partitioned into
//! fixed-size cubic chunks so that neurons can be inserted, looked up and
//! iterated by position without scanning the whole lattice.
//!
//! ## Quick Start
//!
//! ```rust
//! use feagi_spatial::prelude::*;
//!
//! let geometry = ChunkGeometry::new(16, 0)?;
//! let position = Coordinate::new(15, 15, 15);
//!
//! // Locate the chunk, then store the neuron in it
//! let mut chunk = Chunk::new(geometry.chunk_of(&position)?);
//! chunk.add_unit(Neuron::without_payload(NeuronId(1), position))?;
//!
//! // A range query around the point must also consult these chunks
//! let nearby = geometry.nearby_chunks(&position, 0.2)?;
//! assert_eq!(nearby.len(), 7);
//! # Ok::<(), feagi_spatial::ChunkError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: feagi-config                               │
//! │  (chunk geometry + logging settings, TOML + overrides)  │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Infrastructure: feagi-observability                    │
//! │  (tracing subscriber, per-crate debug flags)            │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Spatial: feagi-chunking                                │
//! │  (Chunk storage, addressing, seam proximity)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Mapping chunk coordinates to chunk instances (lazy creation, caching,
//! persistence) is left to the caller.

pub use feagi_chunking as chunking;
pub use feagi_config as config;
pub use feagi_observability as observability;

pub use feagi_chunking::{
    chunk_coordinate_from_world_position, nearby_chunks_for_point, neighbor_chunk_coordinates,
    AxisProximity, Chunk, ChunkError, ChunkGeometry, ChunkResult, ChunkUnit, Coordinate,
    NeighborKind, Neuron, NeuronId, NeuronPayload, SharedChunk,
};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate a loaded configuration and build the chunk geometry it describes
///
/// # Errors
///
/// Returns `ChunkError::InvalidConfiguration` if the configuration fails
/// validation (non-positive chunk size, threshold outside `[0, 1)`, ...).
pub fn geometry_from_config(spatial_config: &config::SpatialConfig) -> ChunkResult<ChunkGeometry> {
    config::validate_config(spatial_config)?;
    let geometry = ChunkGeometry::try_from(&spatial_config.chunking)?;
    tracing::debug!(
        target: "feagi-spatial",
        "Chunk geometry: size={}, offset={}, edge_threshold={}",
        geometry.chunk_size(),
        geometry.world_offset(),
        spatial_config.chunking.edge_threshold
    );
    Ok(geometry)
}

/// Commonly used types
pub mod prelude {
    pub use crate::geometry_from_config;
    pub use feagi_chunking::{
        chunk_coordinate_from_world_position, nearby_chunks_for_point,
        neighbor_chunk_coordinates, Chunk, ChunkError, ChunkGeometry, ChunkResult, ChunkUnit,
        Coordinate, Neuron, NeuronId, NeuronPayload, SharedChunk,
    };
    pub use feagi_config::{ChunkingConfig, SpatialConfig};
}
