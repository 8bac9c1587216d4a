//! Sensor allowlist inspector.
//!
//! Resolves the allowlist exactly as the relay does at startup (config file,
//! then `BYD_HASS_SENSOR_IDS`) and prints the polled and published IDs.

use anyhow::{Context, Result};
use clap::Parser;
use relay_common::{LoggingConfig, SensorId};
use relay_sensors::{ROUTING_REQUIRED_SENSOR_IDS, RelayConfig, check_required};
use std::path::PathBuf;
use tracing::info;

/// Print the sensor allowlist the relay would use.
#[derive(Parser, Debug)]
#[command(name = "relay-sensors")]
#[command(about = "Resolves and prints the relay's sensor allowlist")]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON5 format); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Also check the IDs needed by the route-planner adapter.
    #[arg(long)]
    routing: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RelayConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => RelayConfig::default(),
    };

    let log_config = LoggingConfig {
        level: args
            .log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.clone()),
        format: config.logging.format,
    };
    relay_common::init_tracing(&log_config)
        .map_err(|e| anyhow::anyhow!("Failed to init tracing: {}", e))?;

    if let Some(path) = &args.config {
        info!("Loaded configuration from {:?}", path);
    }

    let allowlist = config.allowlist();
    let missing = if args.routing {
        check_required(&allowlist, ROUTING_REQUIRED_SENSOR_IDS)
    } else {
        Vec::new()
    };

    let poll = allowlist.poll_sensor_ids();
    let published = allowlist.published_sensor_ids();

    if args.json {
        let report = serde_json::json!({
            "default_table": allowlist.is_default(),
            "poll": poll,
            "published": published,
            "missing_routing": missing,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let source = if allowlist.is_default() {
            "default table"
        } else {
            "override"
        };
        println!("source:    {}", source);
        println!("poll:      {}", join_ids(&poll));
        println!("published: {}", join_ids(&published));
        if args.routing {
            println!("missing:   {}", join_ids(&missing));
        }
    }

    Ok(())
}

fn join_ids(ids: &[SensorId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
