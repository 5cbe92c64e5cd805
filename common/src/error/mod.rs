//! Error types for the papertrade workspace
//!
//! This module provides a unified error handling system shared by the mock
//! trading service and the trading client.

use thiserror::Error;

/// Papertrade error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error when a request body cannot be parsed
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local storage i/o error
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Convert string messages into an error
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Internal(message)
    }
}

/// Convert static string references into an error
impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Internal(message.to_string())
    }
}
