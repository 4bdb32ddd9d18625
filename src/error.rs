//! Error types for loading tabular input.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for table loading.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while reading a table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to open the input file.
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input has no header row.
    #[error("input is empty: no header row")]
    Empty,

    /// A record has a different number of fields than the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow { line: u64, expected: u64, found: u64 },

    /// A cell is neither a number nor a missing-value marker.
    #[error("line {line}, column '{column}': '{value}' is not a number")]
    NonNumeric {
        column: String,
        line: u64,
        value: String,
    },

    /// Columns passed to a table differ in length.
    #[error("column '{column}' has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// A table needs at least the independent column.
    #[error("table has no columns")]
    NoColumns,

    /// Malformed delimited content.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    /// Create an Open error.
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Sort a csv error into the ragged-row case or the generic one.
    pub fn from_csv(err: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = err.kind()
        {
            return Self::RaggedRow {
                line: pos.as_ref().map_or(0, |p| p.line()),
                expected: *expected_len,
                found: *len,
            };
        }
        Self::Csv(err)
    }
}
