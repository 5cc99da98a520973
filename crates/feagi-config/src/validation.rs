// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Chunk geometry mistakes are programming errors, so they are reported in full
//! instead of being clamped.

use crate::{ConfigError, ConfigResult, SpatialConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Positive chunk size
/// - Edge threshold in [0, 1)
/// - Known log level
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &SpatialConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_chunking(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_chunking(config: &SpatialConfig, errors: &mut Vec<ConfigValidationError>) {
    let chunking = &config.chunking;

    if chunking.chunk_size <= 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "chunking.chunk_size".to_string(),
            reason: format!("must be > 0, got {}", chunking.chunk_size),
        });
    }

    if !(0.0..1.0).contains(&chunking.edge_threshold) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "chunking.edge_threshold".to_string(),
            reason: format!("must be in [0, 1), got {}", chunking.edge_threshold),
        });
    }
}

fn validate_logging(config: &SpatialConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.trim();
    if level.is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "logging.level".to_string(),
        });
    } else if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("expected one of {:?}, got {:?}", LOG_LEVELS, level),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = SpatialConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_non_positive_chunk_size() {
        let mut config = SpatialConfig::default();
        config.chunking.chunk_size = -4;

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("chunking.chunk_size"));
    }

    #[test]
    fn test_threshold_bounds() {
        let mut config = SpatialConfig::default();

        config.chunking.edge_threshold = 0.0;
        assert!(validate_config(&config).is_ok());

        config.chunking.edge_threshold = 0.75;
        assert!(validate_config(&config).is_ok());

        for bad in [1.0, -0.01, f64::NAN] {
            config.chunking.edge_threshold = bad;
            assert!(validate_config(&config).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_log_level() {
        let mut config = SpatialConfig::default();
        config.logging.level = "WARN".to_string();
        assert!(validate_config(&config).is_ok());

        config.logging.level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        config.logging.level = String::new();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Missing required configuration: logging.level"));
    }
}
