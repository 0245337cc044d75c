//! REST API error types
//!
//! Every failure renders as the same JSON envelope with a status chosen by
//! the failure's severity.

use ident_core::Severity;
use ident_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "INVALID_TOKEN")
    pub code: String,
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credential missing, malformed or rejected (401)
    #[error("Unauthorized [{code}]: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error [{code}]: {message} {location}")]
    Internal {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::debug!("{}", self),
        }

        let (status, code, message) = match self {
            ApiError::Unauthorized { code, message, .. } => {
                (StatusCode::UNAUTHORIZED, code, message)
            }
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
            ApiError::Internal { code, message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, code, message)
            }
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: code.into(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert service errors to API errors by severity
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let code = e.error_code();
        let message = e.message().to_string();

        match e.severity() {
            Severity::Unauthorized => ApiError::Unauthorized {
                code,
                message,
                location,
            },
            Severity::NotFound => ApiError::NotFound { message, location },
            Severity::Internal => ApiError::Internal {
                code,
                message,
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
