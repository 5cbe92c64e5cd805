//! Client error types

use thiserror::Error;

/// Trading client error type
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure talking to the service
    #[error("Network error occurred: {0}")]
    Http(#[from] reqwest::Error),

    /// Error body returned by the service
    #[error("{message}")]
    Api { message: String },

    /// Shared error (storage, serialization, configuration)
    #[error(transparent)]
    Common(#[from] common::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
