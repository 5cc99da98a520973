// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `feagi_spatial.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpatialConfig {
    pub chunking: ChunkingConfig,
    pub logging: LoggingConfig,
}

/// Chunk geometry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Edge length of a chunk in lattice units (> 0)
    pub chunk_size: i32,
    /// Shift applied to every axis before chunking, so chunk coordinates stay non-negative
    pub world_offset: i32,
    /// Fraction of a chunk edge treated as "near" a seam, in [0, 1)
    pub edge_threshold: f64,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 16,
            world_offset: 0,
            edge_threshold: 0.2,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
