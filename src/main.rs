use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use veml7700_config::{build, LocalRegistry, RawConfig};

/// Validates a VEML7700 sensor configuration and prints the device parameters.
#[derive(Parser, Debug)]
#[command(name = "veml7700-config", version)]
struct Cli {
    /// Sensor configuration file (.json, .yaml or .yml)
    config: PathBuf,

    /// Log every resolved field
    #[arg(short, long, env = "VEML7700_VERBOSE")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let raw = RawConfig::load(&cli.config)?;
    let mut registry = LocalRegistry::<2>::new();
    let resolved = build(&raw, &mut registry)
        .with_context(|| format!("invalid VEML7700 configuration in {}", cli.config.display()))?;

    let params = &resolved.params;
    info!("VEML7700:");
    params.log_config();
    for sensor in registry.iter() {
        let name = sensor.config.name.as_deref().unwrap_or("<unnamed>");
        info!(
            "  {} '{name}': unit {}, accuracy {}",
            sensor.channel, sensor.traits.unit_of_measurement, sensor.traits.accuracy_decimals
        );
    }

    let json = serde_json::to_string_pretty(params).context("failed to encode parameters")?;
    println!("{json}");
    Ok(())
}
