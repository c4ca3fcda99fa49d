//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::RepositoryError;
use crate::orbit::{OrbitError, PropagationError, VisibilityError};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(RepositoryError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg))
            }
            AppError::Repository(RepositoryError::ValidationError(msg)) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Repository(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("REPOSITORY_ERROR", err.to_string()),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

// Malformed orbital elements are a client problem: they arrive in request
// bodies or name a satellite whose stored elements cannot be propagated.
impl From<OrbitError> for AppError {
    fn from(err: OrbitError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<PropagationError> for AppError {
    fn from(err: PropagationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<VisibilityError> for AppError {
    fn from(err: VisibilityError) -> Self {
        match err {
            VisibilityError::InvalidParameters(msg) => AppError::BadRequest(msg),
            VisibilityError::Propagation(err) => err.into(),
        }
    }
}

impl From<crate::clients::CatalogError> for AppError {
    fn from(err: crate::clients::CatalogError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
