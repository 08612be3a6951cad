//! Error types for running-times

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for running-times operations
#[derive(Debug, Error)]
pub enum BenchError {
    /// Writing a data file or plotting script failed
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the progress table or analysis to the console failed
    #[error("failed to write console output: {0}")]
    Output(#[source] io::Error),

    /// Invalid input handed to an algorithm or experiment
    #[error("Invalid input: {0}")]
    Invalid(String),
}

impl BenchError {
    /// Wraps an I/O error with the path that was being written.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for running-times operations
pub type Result<T> = std::result::Result<T, BenchError>;
