//! Error types for report input and export

use thiserror::Error;

/// Errors raised while reading matrices or writing reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV reading or writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing or serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Matrix input is structurally unusable
    #[error("Invalid matrix input: {0}")]
    InvalidInput(String),

    /// Exported results table could not be read back
    #[error("Invalid results table: {0}")]
    InvalidTable(String),
}

impl<W> From<csv::IntoInnerError<W>> for ReportError {
    fn from(e: csv::IntoInnerError<W>) -> Self {
        ReportError::Io(e.into_error())
    }
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
