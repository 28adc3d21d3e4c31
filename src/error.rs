//! Error handling for flight analysis operations.
//!
//! Field-level parse failures are never errors (they surface as `None`);
//! everything here is fatal for the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("CSV error in file: {path} - {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Required column '{column}' missing from file: {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed to render {artifact}: {reason}")]
    Chart { artifact: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AnalysisError {
    /// Wrap a CSV reader error with the file it came from
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Create a chart rendering error for the named artifact
    pub fn chart(artifact: impl Into<String>, reason: impl ToString) -> Self {
        Self::Chart {
            artifact: artifact.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
