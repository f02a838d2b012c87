//! Error types for table construction and validation.

use thiserror::Error;

use crate::key::RowKey;

/// Errors raised while building or validating a snapshot table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A required key column is absent from the input header.
    #[error("missing key column: {0:?}")]
    MissingKeyColumn(String),

    /// Two value columns share the same name.
    #[error("duplicate column name: {0:?}")]
    DuplicateColumn(String),

    /// Two rows share the same composite key.
    #[error("duplicate composite key: {0}")]
    DuplicateKey(RowKey),

    /// A row's value count does not match the table's column count.
    #[error("row {key} has {actual} values, expected {expected}")]
    WidthMismatch {
        key: RowKey,
        expected: usize,
        actual: usize,
    },
}

/// Convenience alias for table results.
pub type TableResult<T> = Result<T, TableError>;
