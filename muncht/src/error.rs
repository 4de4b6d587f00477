//! Error handling module for the muncht CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the muncht CLI application.
#[derive(Error, Debug)]
pub enum MunchtError {
    /// Error when configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when the scanner stops on unrecognized input.
    #[error("{path}: {source}")]
    Scan {
        /// Input the error was found in.
        path: String,
        /// Underlying scanner error.
        #[source]
        source: munch_lex::ScanError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MunchtError.
pub type Result<T> = std::result::Result<T, MunchtError>;
