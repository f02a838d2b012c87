//! Change report output for the timesheet differ.
//!
//! Turns a [`TableDiff`] into the three-section delimited report and
//! writes it to disk.
//!
//! # Key Types
//!
//! - [`render_report`] — The diff as delimited text
//! - [`write_report`] — The same, written to a file
//! - [`ReportError`] — Everything that can go wrong on the way out
//!
//! [`TableDiff`]: tsdiff_diff::TableDiff

pub mod error;
pub mod report;

pub use error::{ReportError, ReportResult};
pub use report::{render_report, write_report, ADDED_TITLE, REMOVED_TITLE, UPDATED_TITLE};
