//! Error types for the outer boundary
//!
//! Normalization itself never fails. These errors cover the surrounding
//! plumbing only: loading options, reading input files, serializing reports.

use thiserror::Error;

/// Boundary error types
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input or options file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Options file or flag could not be interpreted
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, Error>;
