//! Errors of the driving-age sample.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the people source or writing to the sink.
#[derive(Debug, Error)]
pub enum DriversError {
    /// The people file could not be read.
    #[error("failed to read people from {path}")]
    ReadPeople {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The people file is not a JSON array of `{ "name", "age" }` records.
    #[error("failed to parse people from {path}")]
    ParsePeople {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing a line to the sink failed.
    #[error("failed to write to sink")]
    Sink(#[from] std::io::Error),
}
