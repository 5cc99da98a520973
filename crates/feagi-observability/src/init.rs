// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output only: human-readable by default, JSON lines when
//! `logging.json` is set.

use anyhow::{anyhow, Context, Result};
use feagi_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;

/// Build the filter from the configured level and the debug flags
///
/// A `RUST_LOG` value, when present, replaces both.
pub fn build_env_filter(debug_flags: &CrateDebugFlags, config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(directives) = std::env::var(EnvFilter::DEFAULT_ENV) {
        return EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid {} value: {}", EnvFilter::DEFAULT_ENV, directives));
    }

    let filter = debug_flags.to_filter_string(&config.level);
    EnvFilter::try_new(&filter).with_context(|| format!("Invalid log filter: {}", filter))
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_logging(debug_flags: &CrateDebugFlags, config: &LoggingConfig) -> Result<()> {
    let env_filter = build_env_filter(debug_flags, config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(
        target: "feagi-spatial",
        "Logging initialized (level={}, json={}, debug={:?})",
        config.level,
        config.json,
        debug_flags.enabled_crates().collect::<Vec<_>>()
    );
    Ok(())
}

/// Initialize logging with default settings
pub fn init_logging_default(debug_flags: &CrateDebugFlags) -> Result<()> {
    init_logging(debug_flags, &LoggingConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_flags() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            return;
        }
        let flags = CrateDebugFlags::from_args(vec!["--debug-feagi-chunking".to_string()]);
        let filter = build_env_filter(&flags, &LoggingConfig::default()).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("feagi-chunking=debug"));
    }

    #[test]
    fn test_init_twice_fails() {
        let flags = CrateDebugFlags::default();
        let _ = init_logging_default(&flags);
        assert!(init_logging_default(&flags).is_err());
    }
}
