// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Chunk Probe Tool

Prints the containing chunk, local position and seam-adjacent chunks for
world positions, using the chunk geometry from `feagi_spatial.toml`.

Usage:
  cargo run --bin chunk_probe -- [--config <path>] [--set key=value]... [--debug-<crate>] <x,y,z>...

Example:
  cargo run --bin chunk_probe -- --set chunk_size=16 --set edge_threshold=0.2 15,15,15 -1,8,8

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use feagi_spatial::config::{self, ConfigError, SpatialConfig};
use feagi_spatial::observability::{debug_flags_help, init_logging, parse_debug_flags};
use feagi_spatial::{geometry_from_config, Coordinate};

struct ProbeArgs {
    config_path: Option<PathBuf>,
    overrides: HashMap<String, String>,
    points: Vec<Coordinate>,
}

fn parse_point(text: &str) -> Result<Coordinate> {
    let parts = text
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid point '{}', expected x,y,z", text))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Coordinate::new(*x, *y, *z)),
        _ => bail!("Invalid point '{}', expected exactly three components", text),
    }
}

fn parse_args(args: &[String]) -> Result<ProbeArgs> {
    let mut probe = ProbeArgs {
        config_path: None,
        overrides: HashMap::new(),
        points: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or_else(|| anyhow!("--config needs a path"))?;
                probe.config_path = Some(PathBuf::from(path));
            }
            "--set" => {
                let pair = iter.next().ok_or_else(|| anyhow!("--set needs key=value"))?;
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| anyhow!("Invalid override '{}', expected key=value", pair))?;
                probe.overrides.insert(key.to_string(), value.to_string());
            }
            flag if flag.starts_with("--debug-") => {}
            point => probe.points.push(parse_point(point)?),
        }
    }
    Ok(probe)
}

/// Config file when one exists, otherwise defaults with the same overrides applied
fn resolve_config(probe: &ProbeArgs) -> Result<SpatialConfig> {
    match config::load_config(probe.config_path.as_deref(), Some(&probe.overrides)) {
        Ok(cfg) => Ok(cfg),
        Err(ConfigError::FileNotFound(_)) if probe.config_path.is_none() => {
            let mut cfg = SpatialConfig::default();
            config::apply_environment_overrides(&mut cfg)?;
            config::apply_cli_overrides(&mut cfg, &probe.overrides)?;
            config::validate_config(&cfg)?;
            Ok(cfg)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let probe = parse_args(&args)?;

    if probe.points.is_empty() {
        eprintln!("Usage: chunk_probe [--config <path>] [--set key=value]... <x,y,z>...");
        eprintln!("\n{}", debug_flags_help());
        std::process::exit(1);
    }

    let cfg = resolve_config(&probe)?;
    init_logging(&parse_debug_flags(), &cfg.logging)?;
    let geometry = geometry_from_config(&cfg)?;

    println!(
        "Chunk size {} | world offset {} | edge threshold {}",
        geometry.chunk_size(),
        geometry.world_offset(),
        cfg.chunking.edge_threshold
    );

    for point in &probe.points {
        let chunk = geometry.chunk_of(point)?;
        let local = geometry.local_position(point);
        let mut nearby: Vec<Coordinate> = geometry
            .nearby_chunks(point, cfg.chunking.edge_threshold)?
            .into_iter()
            .collect();
        nearby.sort();

        println!();
        println!("Point {}", point);
        println!("  chunk:  {}", chunk);
        println!("  local:  {}", local);
        if nearby.is_empty() {
            println!("  nearby: none");
        } else {
            let listed: Vec<String> = nearby.iter().map(ToString::to_string).collect();
            println!("  nearby: {}", listed.join(" "));
        }
    }

    Ok(())
}
