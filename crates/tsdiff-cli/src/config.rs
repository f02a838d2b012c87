//! Run configuration: defaults, optional config file, then flags.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tsdiff_csv::SnapshotConfig;

use crate::cli::Cli;

/// Name of the configuration file picked up from the working directory
/// when `--config` is not given.
pub const CONFIG_FILE: &str = "tsdiff.toml";

/// Resolves the effective configuration for one run.
///
/// Precedence, lowest to highest: built-in defaults, the configuration
/// file (`--config`, or `tsdiff.toml` in the working directory when
/// present), then individual command-line flags.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<SnapshotConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None if Path::new(CONFIG_FILE).exists() => load_config_file(Path::new(CONFIG_FILE))?,
        None => SnapshotConfig::default(),
    };

    if let Some(current) = &cli.current {
        config.current_path = current.clone();
    }
    if let Some(previous) = &cli.previous {
        config.previous_path = previous.clone();
    }
    if let Some(output) = &cli.output {
        config.report_path = output.clone();
    }
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }
    Ok(config)
}

fn load_config_file(path: &Path) -> anyhow::Result<SnapshotConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}
