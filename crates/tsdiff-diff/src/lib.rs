//! Diff engine for timesheet snapshots.
//!
//! Computes the change set between two keyed snapshot tables: rows that
//! were added, rows that were removed, and field-level updates on rows
//! present in both. The comparison is driven by an explicit key partition
//! and an explicit column alignment, each computed once and reused.
//!
//! # Key Types
//!
//! - [`TableDiff`] — The complete change set between two snapshots
//! - [`FieldChange`] — One (key, field, old, new) update record
//! - [`KeyPartition`] — The disjoint added/removed/common key categories
//! - [`diff_tables`] — The comparison entry point

pub mod partition;
pub mod table_diff;

pub use partition::{partition_keys, KeyPartition};
pub use table_diff::{aligned_columns, diff_tables, FieldChange, TableDiff};
