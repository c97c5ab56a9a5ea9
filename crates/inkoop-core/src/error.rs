//! Error types for the inkoop-core library.
//!
//! The extraction pipeline itself is total and never returns an error; these
//! types cover the I/O edges around it (configuration files, serialization,
//! persistence sinks).

use thiserror::Error;

/// Main error type for the inkoop library.
#[derive(Error, Debug)]
pub enum InkoopError {
    /// I/O error (reading input text or configuration files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Persistence sink error.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for the inkoop library.
pub type Result<T> = std::result::Result<T, InkoopError>;
