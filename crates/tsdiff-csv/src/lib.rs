//! Delimited snapshot I/O for the timesheet differ.
//!
//! Handles everything between the filesystem and the in-memory [`Table`]:
//! the record codec, header and key-column resolution, and loading the
//! current/previous snapshot pair, including the first-run bootstrap that
//! seeds the previous snapshot from the current file.
//!
//! # Key Types
//!
//! - [`SnapshotConfig`] — Paths and delimiter for one comparison run
//! - [`SnapshotPair`] — The two loaded tables plus the bootstrap flag
//! - [`load_snapshots`] — The loader entry point
//! - [`CsvError`] — Everything that can go wrong on the way in
//!
//! [`Table`]: tsdiff_types::Table

pub mod error;
pub mod read;
pub mod record;
pub mod snapshot;

pub use error::{CsvError, CsvResult};
pub use read::{load_table, parse_table};
pub use record::{format_record, parse_record};
pub use snapshot::{load_snapshots, SnapshotConfig, SnapshotPair};
