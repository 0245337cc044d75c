//! Success payloads returned by the identity service.

use crate::PublicUserView;

use serde::Serialize;

/// `{message, user}` envelope for register, update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    pub message: String,
    pub user: PublicUserView,
}

impl UserMessage {
    pub fn new(message: impl Into<String>, user: PublicUserView) -> Self {
        Self {
            message: message.into(),
            user,
        }
    }
}

/// Result of a successful session validation, carrying the refreshed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginMessage {
    pub message: String,
    pub token: String,
    pub user: PublicUserView,
}
