//! Snapshot pair loading and first-run bootstrap.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tsdiff_types::Table;

use crate::error::CsvResult;
use crate::read::load_table;

/// Where the snapshot pair lives and how it is delimited.
///
/// The defaults mirror the conventional working-directory layout, so a
/// run with no configuration at all compares `timesheet_updated.csv`
/// against `timesheet_previous.csv` and writes `changes.csv`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Path of the current snapshot. Must exist.
    pub current_path: PathBuf,
    /// Path of the previous snapshot. Bootstrapped from the current
    /// snapshot when absent.
    pub previous_path: PathBuf,
    /// Path the change report is written to.
    pub report_path: PathBuf,
    /// Field delimiter shared by all three files.
    pub delimiter: char,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            current_path: PathBuf::from("timesheet_updated.csv"),
            previous_path: PathBuf::from("timesheet_previous.csv"),
            report_path: PathBuf::from("changes.csv"),
            delimiter: ',',
        }
    }
}

/// The loaded snapshot pair.
#[derive(Clone, Debug)]
pub struct SnapshotPair {
    /// The current snapshot.
    pub current: Table,
    /// The previous snapshot.
    pub previous: Table,
    /// `true` when the previous file was created on this run.
    pub bootstrapped: bool,
}

/// Loads both snapshots described by `config`.
///
/// The current snapshot must exist. If the previous snapshot is absent
/// it is bootstrapped: the current file is copied byte for byte so the
/// next run has a baseline, and the in-memory previous table is a clone
/// of the current one, which makes the first diff empty.
pub fn load_snapshots(config: &SnapshotConfig) -> CsvResult<SnapshotPair> {
    let current = load_table(&config.current_path, config.delimiter)?;

    if !config.previous_path.exists() {
        warn!(
            previous = %config.previous_path.display(),
            current = %config.current_path.display(),
            "previous snapshot not found, creating it from the current snapshot"
        );
        fs::copy(&config.current_path, &config.previous_path)?;
        return Ok(SnapshotPair {
            previous: current.clone(),
            current,
            bootstrapped: true,
        });
    }

    let previous = load_table(&config.previous_path, config.delimiter)?;
    debug!(
        current_rows = current.len(),
        previous_rows = previous.len(),
        "loaded snapshot pair"
    );
    Ok(SnapshotPair {
        current,
        previous,
        bootstrapped: false,
    })
}
