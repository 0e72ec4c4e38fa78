//! Custom error types for pocket-ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The budget engine itself never returns
//! these; they only appear at the store, configuration and CLI boundaries.

use thiserror::Error;

/// The main error type for pocket-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user submissions
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transaction store errors (period table unreadable or unwritable)
    #[error("Store error: {0}")]
    Store(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the failure is transient and the same command may simply be rerun
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Io(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for pocket-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
