//! Foundation types for the timesheet differ (tsdiff).
//!
//! This crate provides the data model shared by every other tsdiff crate:
//! the composite row key, the cell value representation with its equality
//! rule, and the keyed snapshot table.
//!
//! # Key Types
//!
//! - [`RowKey`] — Composite key (Division, Course + Section) identifying a row across snapshots
//! - [`CellValue`] — Missing / Number / Text cell representation with the field-equality rule
//! - [`Table`] / [`Row`] — One snapshot: source-ordered rows with a key index
//! - [`TableError`] — Validation failures (missing key column, duplicate column, duplicate key)

pub mod error;
pub mod key;
pub mod table;
pub mod value;

pub use error::{TableError, TableResult};
pub use key::{RowKey, COURSE_SECTION_COLUMN, DIVISION_COLUMN, KEY_COLUMNS};
pub use table::{Row, Table};
pub use value::CellValue;
