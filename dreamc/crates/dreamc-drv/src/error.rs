//! Error handling for the dreamc driver.

use std::path::PathBuf;

use dreamc_lex::{LexicalError, SerializeError};
use thiserror::Error;

/// Errors that end a driver run.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A configuration file is missing, unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration value is out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The source file could not be read.
    #[error("Cannot open file: {}", .path.display())]
    Open {
        /// The file that was requested.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// No source file was given on the command line.
    #[error("No source file specified")]
    NoSource,

    /// The source is not lexically valid.
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    /// Exporting the token stream failed.
    #[error("Export error: {0}")]
    Serialize(#[from] SerializeError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization/deserialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
