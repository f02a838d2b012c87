//! Composite row keys.
//!
//! A timesheet row is identified by the pair (Division, Course + Section).
//! Both components together must be unique within a snapshot; the key is
//! immutable and defines row identity across snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the division key column.
pub const DIVISION_COLUMN: &str = "Division";

/// Name of the course/section key column.
pub const COURSE_SECTION_COLUMN: &str = "Course + Section";

/// The two key columns, in the order they lead every report header.
pub const KEY_COLUMNS: [&str; 2] = [DIVISION_COLUMN, COURSE_SECTION_COLUMN];

/// The composite key identifying one timesheet row across snapshots.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowKey {
    /// The division offering the course.
    pub division: String,
    /// The combined course and section identifier, e.g. `"MATH-101-01"`.
    pub course_section: String,
}

impl RowKey {
    /// Create a key from its two components.
    pub fn new(division: impl Into<String>, course_section: impl Into<String>) -> Self {
        Self {
            division: division.into(),
            course_section: course_section.into(),
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.division, self.course_section)
    }
}
