//! Error types for the bookshelf CLI.

use std::io;
use thiserror::Error;

/// Result type for report rendering.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// I/O error on the output stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
