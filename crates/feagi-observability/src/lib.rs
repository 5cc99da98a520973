// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # feagi-observability
//!
//! Logging setup shared by the spatial indexing crates, with per-crate debug
//! flag support (`--debug-feagi-chunking`, `FEAGI_DEBUG=all`, ...).

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Crate names usable as debug flags and tracing targets
pub const KNOWN_CRATES: &[&str] = &["feagi-chunking", "feagi-config", "feagi-spatial"];
