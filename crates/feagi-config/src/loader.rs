// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{validate_config, ConfigError, ConfigResult, SpatialConfig, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "FEAGI_SPATIAL_CONFIG_PATH";

/// Find the spatial configuration file
///
/// Search order:
/// 1. `FEAGI_SPATIAL_CONFIG_PATH` environment variable
/// 2. Current working directory: `./feagi_spatial.toml`
/// 3. Parent directories (up to 5 levels)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by {} not found: {}",
                CONFIG_PATH_ENV,
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.as_path();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent;
                }
                None => break,
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet {} to specify a custom location.",
        CONFIG_FILE_NAME, search_list, CONFIG_PATH_ENV
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Returns
///
/// Complete `SpatialConfig` with all overrides applied and validated
///
/// # Errors
///
/// Returns error if config file is not found, contains invalid TOML, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<SpatialConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: SpatialConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config)?;
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }

    validate_config(&config)?;
    Ok(config)
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue(format!("{} = {:?}", key, value)))
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `FEAGI_CHUNK_SIZE` -> `chunking.chunk_size`
/// - `FEAGI_WORLD_OFFSET` -> `chunking.world_offset`
/// - `FEAGI_EDGE_THRESHOLD` -> `chunking.edge_threshold`
/// - `FEAGI_LOG_LEVEL` -> `logging.level`
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a set variable does not parse
pub fn apply_environment_overrides(config: &mut SpatialConfig) -> ConfigResult<()> {
    if let Ok(value) = env::var("FEAGI_CHUNK_SIZE") {
        config.chunking.chunk_size = parse_value("FEAGI_CHUNK_SIZE", &value)?;
    }
    if let Ok(value) = env::var("FEAGI_WORLD_OFFSET") {
        config.chunking.world_offset = parse_value("FEAGI_WORLD_OFFSET", &value)?;
    }
    if let Ok(value) = env::var("FEAGI_EDGE_THRESHOLD") {
        config.chunking.edge_threshold = parse_value("FEAGI_EDGE_THRESHOLD", &value)?;
    }
    if let Ok(value) = env::var("FEAGI_LOG_LEVEL") {
        config.logging.level = value;
    }
    Ok(())
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"chunk_size": "32", "edge_threshold": "0.1"}`)
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a known key does not parse
pub fn apply_cli_overrides(
    config: &mut SpatialConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    if let Some(value) = cli_args.get("chunk_size") {
        config.chunking.chunk_size = parse_value("chunk_size", value)?;
    }
    if let Some(value) = cli_args.get("world_offset") {
        config.chunking.world_offset = parse_value("world_offset", value)?;
    }
    if let Some(value) = cli_args.get("edge_threshold") {
        config.chunking.edge_threshold = parse_value("edge_threshold", value)?;
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_json") {
        config.logging.json = value.to_lowercase() == "true" || value == "1";
    }
    Ok(())
}
