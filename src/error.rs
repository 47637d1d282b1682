//! Crate error type.
//!
//! Every failure happens at the loading boundary or while writing output.
//! The simulation itself is total once handed a validated process set.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by loading, validation, configuration, and reporting.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened.
    #[error("cannot open scheduling file {}: {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row has the wrong number of fields or a non-integer field.
    #[error("malformed process record on line {line}: {message}")]
    InputFormat { line: u64, message: String },

    /// The CSV reader itself failed (I/O or encoding).
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The process set failed semantic checks.
    #[error("invalid process set: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing a report failed.
    #[error("writing report: {0}")]
    Report(#[from] io::Error),

    /// Serializing a report failed.
    #[error("encoding report: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
