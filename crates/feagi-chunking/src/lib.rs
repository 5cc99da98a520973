// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# FEAGI Chunking

In-memory spatial index that partitions the neuron lattice into fixed-size
cubic chunks:
- Per-chunk neuron storage with collision detection
- World position to chunk coordinate mapping
- 26-chunk neighborhood enumeration
- Seam proximity for queries near chunk boundaries

Mapping chunk coordinates to chunk instances (creation, caching, persistence)
belongs to the caller.

## Example

```rust
use feagi_chunking::{Chunk, ChunkGeometry, Coordinate, Neuron, NeuronId};

let geometry = ChunkGeometry::new(16, 0)?;
let position = Coordinate::new(15, 15, 15);

let mut chunk = Chunk::new(geometry.chunk_of(&position)?);
chunk.add_unit(Neuron::without_payload(NeuronId(1), position))?;

assert!(chunk.get_unit(&position).is_some());
assert_eq!(geometry.nearby_chunks(&position, 0.2)?.len(), 7);
# Ok::<(), feagi_chunking::ChunkError>(())
```

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

pub mod addressing;
pub mod chunk;
pub mod types;
pub mod unit;

pub use addressing::{
    chunk_coordinate_from_world_position, nearby_chunks_for_point, neighbor_chunk_coordinates,
    AxisProximity, ChunkGeometry, NeighborKind,
};
pub use chunk::{Chunk, SharedChunk};
pub use types::{Axis, ChunkError, ChunkResult, Coordinate};
pub use unit::{ChunkUnit, Neuron, NeuronId, NeuronPayload};
