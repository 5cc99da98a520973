// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Units stored in chunks
//!
//! A chunk only needs two things from a unit: where it sits in world space and
//! whether its payload is empty. [`ChunkUnit`] captures that contract; [`Neuron`]
//! is the unit FEAGI stores.

use core::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// Contract a value must satisfy to be stored in a [`crate::Chunk`]
pub trait ChunkUnit {
    /// World-space position. Fixed for the lifetime of the unit.
    fn world_position(&self) -> Coordinate;

    /// True if the unit carries no payload data
    fn has_empty_payload(&self) -> bool;
}

impl<T: ChunkUnit + ?Sized> ChunkUnit for &T {
    fn world_position(&self) -> Coordinate {
        (**self).world_position()
    }

    fn has_empty_payload(&self) -> bool {
        (**self).has_empty_payload()
    }
}

impl<T: ChunkUnit + ?Sized> ChunkUnit for Box<T> {
    fn world_position(&self) -> Coordinate {
        (**self).world_position()
    }

    fn has_empty_payload(&self) -> bool {
        (**self).has_empty_payload()
    }
}

impl<T: ChunkUnit + ?Sized> ChunkUnit for Arc<T> {
    fn world_position(&self) -> Coordinate {
        (**self).world_position()
    }

    fn has_empty_payload(&self) -> bool {
        (**self).has_empty_payload()
    }
}

/// Neuron ID (globally unique across the lattice)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NeuronId(pub u64);

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neuron({})", self.0)
    }
}

/// Activation samples carried by a neuron
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeuronPayload(Vec<f32>);

impl NeuronPayload {
    pub fn new(samples: Vec<f32>) -> Self {
        Self(samples)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn samples(&self) -> &[f32] {
        &self.0
    }

    pub fn push(&mut self, sample: f32) {
        self.0.push(sample);
    }
}

impl From<Vec<f32>> for NeuronPayload {
    fn from(samples: Vec<f32>) -> Self {
        Self(samples)
    }
}

/// A neuron placed in the lattice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    id: NeuronId,
    position: Coordinate,
    payload: NeuronPayload,
}

impl Neuron {
    pub fn new(id: NeuronId, position: Coordinate, payload: NeuronPayload) -> Self {
        Self {
            id,
            position,
            payload,
        }
    }

    /// Neuron with no activation samples
    pub fn without_payload(id: NeuronId, position: Coordinate) -> Self {
        Self::new(id, position, NeuronPayload::empty())
    }

    pub fn id(&self) -> NeuronId {
        self.id
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn payload(&self) -> &NeuronPayload {
        &self.payload
    }

    /// Payload is mutable; position is not.
    pub fn payload_mut(&mut self) -> &mut NeuronPayload {
        &mut self.payload
    }
}

impl ChunkUnit for Neuron {
    fn world_position(&self) -> Coordinate {
        self.position
    }

    fn has_empty_payload(&self) -> bool {
        self.payload.is_empty()
    }
}
