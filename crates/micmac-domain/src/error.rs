//! Error types for the MICMAC engine

use thiserror::Error;

/// Errors that reject an analysis request before any computation runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MicmacError {
    /// Two variables share a name
    #[error("Duplicate variable name: '{0}'")]
    DuplicateVariable(String),

    /// Variable count outside the configured bounds
    #[error("Variable count {count} out of range (min: {min}, max: {max})")]
    VariableCount {
        /// Number of variables supplied
        count: usize,
        /// Configured lower bound
        min: usize,
        /// Configured upper bound
        max: usize,
    },

    /// The matrix does not have one row per variable
    #[error("Matrix has {rows} rows, expected {expected}")]
    MatrixRows {
        /// Rows supplied
        rows: usize,
        /// Number of variables
        expected: usize,
    },

    /// A matrix row does not have one cell per variable
    #[error("Matrix row {row} has {len} cells, expected {expected}")]
    MatrixRow {
        /// Zero-based row index
        row: usize,
        /// Cells supplied in that row
        len: usize,
        /// Number of variables
        expected: usize,
    },

    /// Engine configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}
