//! Error types for report output.

use thiserror::Error;

/// Errors raised while writing the change report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;
