//! Error types for snapshot I/O.

use std::path::PathBuf;

use thiserror::Error;
use tsdiff_types::TableError;

/// Errors raised while reading, parsing, or bootstrapping snapshot files.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The snapshot file does not exist. Fatal for the current snapshot;
    /// the previous snapshot is bootstrapped instead.
    #[error("source file not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A quoted field was still open when its record ended.
    #[error("unclosed quote on line {line}")]
    UnclosedQuote { line: usize },

    /// A data record carried more fields than the header.
    #[error("line {line} has {actual} fields, expected at most {expected}")]
    TooManyFields {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// The parsed rows failed table validation.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Convenience alias for snapshot I/O results.
pub type CsvResult<T> = Result<T, CsvError>;
