//! Application error types.
//!
//! Errors are converted to HTTP responses at the handler boundary. The
//! response body carries a stable error code and a message safe to show to
//! clients; driver-level detail is logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Result alias used throughout the services.
pub type AppResult<T> = Result<T, AppError>;

/// Application error kinds.
#[derive(Debug, Error)]
pub enum AppError {
    /// A persistence read or write failed.
    #[error("database operation failed: {0}")]
    Database(String),

    /// A view file was not found in the views directory.
    #[error("view not found: {0}")]
    ViewNotFound(String),

    /// A view file exists but could not be read.
    #[error("view could not be read: {0}")]
    ViewRead(String),
}

impl AppError {
    /// Stable error code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::ViewNotFound(_) | AppError::ViewRead(_) => "VIEW_ERROR",
        }
    }

    /// HTTP status this error maps to.
    ///
    /// Every current variant is a server-side failure; a missing view is an
    /// operator error, not a client error.
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Message safe to return to clients.
    fn public_message(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database operation failed",
            AppError::ViewNotFound(_) | AppError::ViewRead(_) => "page could not be rendered",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full detail goes to the log only.
        tracing::error!(code = self.code(), error = %self, "request failed");

        let body = ErrorBody {
            code: self.code().to_string(),
            message: self.public_message().to_string(),
            details: None,
        };
        (self.status(), Json(body)).into_response()
    }
}

/// JSON body returned on error responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Error code for client handling (e.g., "DATABASE_ERROR").
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Additional error details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_500() {
        let err = AppError::Database("connection refused".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_public_message_hides_driver_detail() {
        let err = AppError::Database("mongodb://secret@host failed".into());
        assert!(!err.public_message().contains("secret"));
    }

    #[test]
    fn test_view_errors_share_code() {
        assert_eq!(AppError::ViewNotFound("a.html".into()).code(), "VIEW_ERROR");
        assert_eq!(AppError::ViewRead("a.html".into()).code(), "VIEW_ERROR");
    }
}
