//! Custom error types for sales-report
//!
//! Every error is fatal for a run: nothing is recovered locally and no report
//! is written once one of these has been raised.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for sales-report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// A file could not be opened, created, flushed or renamed
    #[error("I/O error on '{}': {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Malformed tabular syntax
    #[error("Format error in '{}': {message}", path.display())]
    Format { path: PathBuf, message: String },

    /// A data row with fewer fields than the configured columns need
    #[error("Format error: row {row} has {found} fields, expected at least {expected}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A money or quantity field is not an integer once the decimal point is removed
    #[error("Cannot parse {column} of item '{item}' (row {row}): '{value}'")]
    Parse {
        row: usize,
        column: &'static str,
        item: String,
        value: String,
    },

    /// A row total or running sum does not fit in 64 bits of cents
    #[error("Amount overflow at row {row} (item '{item}')")]
    Overflow { row: usize, item: String },

    /// Settings file unreadable or unparseable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings that cannot produce a meaningful report
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ReportError {
    /// Create an I/O error for a path
    pub fn io(path: impl AsRef<Path>, err: impl ToString) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Create a format error for a path
    pub fn format(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Map a csv error to `Io` or `Format` depending on its cause
    pub fn from_csv(path: impl AsRef<Path>, err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::io(path, err)
        } else {
            Self::format(path, err.to_string())
        }
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type alias for sales-report operations
pub type ReportResult<T> = Result<T, ReportError>;
