//! Defines application-specific error types.
//!
//! Only a handful of conditions are ever surfaced to callers: the two root
//! preconditions of a walk, an invalid tracker capacity, configuration
//! problems, output failures and user cancellation. Per-entry I/O failures
//! inside a walk are swallowed by the walker and never appear here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the `storage_tools` library.
#[derive(Error, Debug)]
pub enum Error {
    /// The root path of a walk does not exist.
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The root path of a walk exists but is not a directory.
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// An argument was out of its valid domain (e.g. a tracker capacity of zero).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The root path exists but its metadata could not be read.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration supplied on the command line or via the builder API.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the rendered report failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Errors produced while turning raw user input into a `Config`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid size format: {0}")]
    InvalidSizeFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown unit: {unit}. Use one of B, KB, MB, GB, TB, PB")]
    UnknownUnit { unit: String },

    #[error("Invalid date format: '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid {kind} pattern '{pattern}': {reason}")]
    InvalidPattern {
        kind: &'static str,
        pattern: String,
        reason: String,
    },

    #[error("Invalid value for {option}: {reason}")]
    InvalidValue { option: String, reason: String },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
