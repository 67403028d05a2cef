// Rust guideline compliant 2026-02-06

//! Error types for the Consolidate core library.

use thiserror::Error;

/// Result type alias for Consolidate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Consolidate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input directory is missing or not a directory.
    #[error("Invalid input directory: {0}")]
    InvalidDirectory(String),

    /// A file with an unsupported extension was found among the inputs.
    #[error("Unsupported input file: {0}")]
    UnsupportedFile(String),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
