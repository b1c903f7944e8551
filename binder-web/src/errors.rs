//! Web-specific error types and conversions
//!
//! Every error renders as `{"error": {"code": ..., "message": ...}}` with the
//! matching HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Web-specific error type for HTTP API operations
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },

    #[error("Not implemented: {message}")]
    NotImplemented { message: String },

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },
}

impl WebError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            WebError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            WebError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            WebError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            WebError::BadRequest { .. } => "BAD_REQUEST",
            WebError::Unauthorized { .. } => "UNAUTHORIZED",
            WebError::NotFound { .. } => "NOT_FOUND",
            WebError::Internal { .. } => "INTERNAL_ERROR",
            WebError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            WebError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details go to the log, not the client
        let message = match &self {
            WebError::Internal { message } => {
                error!("Internal error: {}", message);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": message
            }
        });

        (status, Json(body)).into_response()
    }
}

// Common error constructors
impl WebError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        WebError::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        WebError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        WebError::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        WebError::Internal {
            message: message.into(),
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        WebError::NotImplemented {
            message: message.into(),
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        WebError::ServiceUnavailable {
            message: message.into(),
        }
    }
}
