use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No token provided {location}")]
    MissingCredentials { location: ErrorLocation },

    #[error("Malformed authorization header: {message} {location}")]
    MalformedCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    Hashing {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Blocking task failed: {message} {location}")]
    BlockingTask {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredentials { .. } => "MISSING_CREDENTIALS",
            Self::MalformedCredentials { .. } => "MALFORMED_CREDENTIALS",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::Hashing { .. } => "HASHING_FAILED",
            Self::BlockingTask { .. } => "BLOCKING_TASK_FAILED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
