//! Dataset error types
//!
//! Defines all errors that can occur while generating, writing or loading
//! the application dataset.

use thiserror::Error;

/// Errors that can occur in the dataset layer
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A date cell could not be coerced to a calendar date
    #[error("Line {line}: could not parse application date: {value}")]
    InvalidDate { line: u64, value: String },

    /// Generator settings are unusable
    #[error("Invalid generator settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
