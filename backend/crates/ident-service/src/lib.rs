//! Identity service - orchestrates hashing, token checks and persistence for
//! the user-facing operations.

pub mod error;
pub mod identity_service;

pub use error::{Result, ServiceError};
pub use identity_service::{
    ALIVE_MESSAGE, IdentityService, LOGIN_SUCCESSFUL, TOKEN_VALID, USER_CREATED, USER_DELETED,
    USER_UPDATED,
};

#[cfg(test)]
mod tests;
