//! Error kinds raised by the analysis pipeline.
//!
//! Each pipeline stage has its own error type so the driver can tell
//! input problems apart from output problems.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading or parsing the input CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read input file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file {path} is empty (expected a header line)")]
    MissingHeader { path: PathBuf },

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid value {value:?} for field '{field}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Averages were requested over a dataset with no rows.
#[derive(Debug, Error)]
#[error("Cannot compute averages: dataset contains no readings")]
pub struct EmptyDatasetError;

/// Failure while persisting the report.
#[derive(Debug, Error)]
#[error("Failed to write report to {path}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
