use ident_auth::AuthError;
use ident_core::Severity;
use ident_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use log::error;
use thiserror::Error;

/// Every failure an identity operation can report. Exactly one is produced per
/// failed call; nothing is recovered internally.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Missing credentials: {message} {location}")]
    MissingCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed credentials: {message} {location}")]
    MalformedCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {message}: {source} {location}")]
    Storage {
        message: String,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingCredentials { .. }
            | Self::MalformedCredentials { .. }
            | Self::InvalidToken { .. }
            | Self::InvalidCredentials { .. } => Severity::Unauthorized,
            Self::NotFound { .. } => Severity::NotFound,
            Self::Storage { .. } | Self::Internal { .. } => Severity::Internal,
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredentials { .. } => "MISSING_CREDENTIALS",
            Self::MalformedCredentials { .. } => "MALFORMED_CREDENTIALS",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Storage { .. } => "STORAGE_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Human-readable message, safe to show to clients
    pub fn message(&self) -> &str {
        match self {
            Self::MissingCredentials { message, .. }
            | Self::MalformedCredentials { message, .. }
            | Self::InvalidToken { message, .. }
            | Self::InvalidCredentials { message, .. }
            | Self::NotFound { message, .. }
            | Self::Storage { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::MissingCredentials { .. } => Self::MissingCredentials {
                message: "No token provided".to_string(),
                location,
            },
            AuthError::MalformedCredentials { message, .. } => {
                Self::MalformedCredentials { message, location }
            }
            AuthError::InvalidToken { message, .. } => Self::InvalidToken { message, location },
            other => {
                error!("Auth machinery failure [{}]: {other}", other.error_code());
                Self::Internal {
                    message: "Authentication backend failure".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        // Don't expose internal database details to clients
        error!("Database error: {source}");

        let message = if source.is_unique_violation() {
            "User name already taken"
        } else {
            "Database operation failed"
        };

        Self::Storage {
            message: message.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
