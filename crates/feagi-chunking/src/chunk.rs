// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Chunk storage.

A chunk owns the units whose world positions fall inside one cubic cell of the
lattice. Units are kept in insertion order and indexed by position so that
lookups and collision checks are a single hash lookup.
*/

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::types::{ChunkError, ChunkResult, Coordinate};
use crate::unit::ChunkUnit;

/// Units stored at unique positions within one chunk cell
///
/// Invariant: `index` and `units` describe the same set of units, and every
/// position appears at most once.
#[derive(Debug, Clone)]
pub struct Chunk<U> {
    /// Chunk-space coordinate, supplied by the owner and never recomputed
    coordinate: Coordinate,

    /// Position -> slot in `units`
    index: AHashMap<Coordinate, usize>,

    /// Units in insertion order
    units: Vec<U>,
}

impl<U: ChunkUnit> Chunk<U> {
    /// Create an empty chunk at a chunk-space coordinate
    pub fn new(coordinate: Coordinate) -> Self {
        Self::with_capacity(coordinate, 0)
    }

    pub fn with_capacity(coordinate: Coordinate, capacity: usize) -> Self {
        debug!(target: "feagi-chunking", "Creating chunk {} (capacity {})", coordinate, capacity);
        Self {
            coordinate,
            index: AHashMap::with_capacity(capacity),
            units: Vec::with_capacity(capacity),
        }
    }

    /// Rebuild a chunk from a serialized unit list and its known coordinate
    ///
    /// # Errors
    ///
    /// Returns `ChunkError::Collision` for the first unit whose position is
    /// already taken by an earlier unit in the list.
    pub fn from_serialized<I>(coordinate: Coordinate, units: I) -> ChunkResult<Self>
    where
        I: IntoIterator<Item = U>,
    {
        let units = units.into_iter();
        let mut chunk = Self::with_capacity(coordinate, units.size_hint().0);
        for unit in units {
            chunk.add_unit(unit)?;
        }
        debug!(target: "feagi-chunking", "Rebuilt chunk {} with {} units", coordinate, chunk.len());
        Ok(chunk)
    }

    /// Insert a unit at its own world position
    ///
    /// # Errors
    ///
    /// Returns `ChunkError::Collision` if a unit already occupies that position.
    /// The chunk is left unchanged and the existing unit is kept.
    pub fn add_unit(&mut self, unit: U) -> ChunkResult<()> {
        let position = unit.world_position();
        if self.index.contains_key(&position) {
            warn!(target: "feagi-chunking", "Chunk {}: position {} already occupied", self.coordinate, position);
            return Err(ChunkError::Collision { position });
        }

        self.index.insert(position, self.units.len());
        self.units.push(unit);
        Ok(())
    }

    /// Unit at `position`, if any
    pub fn get_unit(&self, position: &Coordinate) -> Option<&U> {
        self.index.get(position).map(|&slot| &self.units[slot])
    }

    pub fn contains_position(&self, position: &Coordinate) -> bool {
        self.index.contains_key(position)
    }

    /// True if any stored unit has an empty payload
    pub fn has_empty_units(&self) -> bool {
        self.units.iter().any(|unit| unit.has_empty_payload())
    }
}

impl<U> Chunk<U> {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, U> {
        self.units.iter()
    }

    /// Occupied positions in insertion order
    pub fn positions(&self) -> impl Iterator<Item = Coordinate> + '_
    where
        U: ChunkUnit,
    {
        self.units.iter().map(|unit| unit.world_position())
    }

    /// Same chunk-space coordinate. Contents are not compared.
    pub fn equals<V>(&self, other: &Chunk<V>) -> bool {
        self.coordinate == other.coordinate
    }

    /// Serialized form: the contained units only, in insertion order
    ///
    /// The coordinate is left out; whoever stores this must key it by the
    /// chunk coordinate and pass that back to [`Chunk::from_serialized`].
    #[doc(alias = "serialize")]
    pub fn units(&self) -> &[U] {
        &self.units
    }

    /// Consume the chunk, returning its units in insertion order
    pub fn into_units(self) -> Vec<U> {
        self.units
    }
}

impl<U: Serialize> Chunk<U> {
    pub fn to_json(&self) -> ChunkResult<String> {
        Ok(serde_json::to_string(&self.units)?)
    }
}

impl<U: ChunkUnit + DeserializeOwned> Chunk<U> {
    pub fn from_json(coordinate: Coordinate, json: &str) -> ChunkResult<Self> {
        let units: Vec<U> = serde_json::from_str(json)?;
        Self::from_serialized(coordinate, units)
    }
}

impl<U: Serialize> Serialize for Chunk<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.units.serialize(serializer)
    }
}

impl<U, V> PartialEq<Chunk<V>> for Chunk<U> {
    fn eq(&self, other: &Chunk<V>) -> bool {
        self.equals(other)
    }
}

impl<U> Eq for Chunk<U> {}

impl<'a, U> IntoIterator for &'a Chunk<U> {
    type Item = &'a U;
    type IntoIter = std::slice::Iter<'a, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// Chunk handle shared between threads
///
/// Insertion touches the index and the unit list as two steps, so it runs
/// under the write lock. Lookups share the read lock.
#[derive(Debug)]
pub struct SharedChunk<U> {
    inner: Arc<RwLock<Chunk<U>>>,
}

impl<U> Clone for SharedChunk<U> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<U: ChunkUnit> SharedChunk<U> {
    pub fn new(coordinate: Coordinate) -> Self {
        Self::from(Chunk::new(coordinate))
    }

    pub fn add_unit(&self, unit: U) -> ChunkResult<()> {
        self.inner.write().add_unit(unit)
    }

    /// Clone of the unit at `position`, if any
    pub fn get_unit(&self, position: &Coordinate) -> Option<U>
    where
        U: Clone,
    {
        self.inner.read().get_unit(position).cloned()
    }

    pub fn has_empty_units(&self) -> bool {
        self.inner.read().has_empty_units()
    }

    pub fn coordinate(&self) -> Coordinate {
        self.inner.read().coordinate()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Chunk<U>> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Chunk<U>> {
        self.inner.write()
    }
}

impl<U> From<Chunk<U>> for SharedChunk<U> {
    fn from(chunk: Chunk<U>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(chunk)),
        }
    }
}
