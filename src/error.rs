//! Error types for the gcode-check tools.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code from
//! [`crate::exit_codes`].

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gcode-check operations.
#[derive(Error, Debug)]
pub enum GcodeError {
    /// An input file could not be opened or read.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written to its destination.
    #[error("failed to write to '{target}': {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file or an override was invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The JSON report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl GcodeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GcodeError::Read { .. } => exit_codes::IO_FAILURE,
            GcodeError::Write { .. } => exit_codes::IO_FAILURE,
            GcodeError::Config(_) => exit_codes::USER_ERROR,
            GcodeError::Report(_) => exit_codes::IO_FAILURE,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GcodeError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(target: impl Into<String>, source: std::io::Error) -> Self {
        GcodeError::Write {
            target: target.into(),
            source,
        }
    }
}

/// Result type alias for gcode-check operations.
pub type Result<T> = std::result::Result<T, GcodeError>;
