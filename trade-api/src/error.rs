//! Error handling for the trading API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned to clients
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Error code (string identifier for the error type)
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Always false on the error path
    pub success: bool,
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("API error: {:?}", &self);

        // The contract defines a single 500-class failure path
        let (status, code) = match &self {
            ApiError::MalformedRequest(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "malformed_request")
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorBody {
            error: code.to_string(),
            message: self.to_string(),
            success: false,
        };

        (status, Json(body)).into_response()
    }
}

impl From<common::Error> for ApiError {
    fn from(err: common::Error) -> Self {
        match err {
            common::Error::MalformedRequest(msg) => ApiError::MalformedRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
