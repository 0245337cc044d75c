pub mod authentication_guard;
pub mod claims;
pub mod credential_hasher;
pub mod error;
pub mod session_token;
pub mod token_service;

pub use authentication_guard::{AuthenticationGuard, bearer_token};
pub use claims::Claims;
pub use credential_hasher::{CredentialHasher, DEFAULT_HASH_COST};
pub use error::{AuthError, Result};
pub use session_token::SessionToken;
pub use token_service::TokenService;

#[cfg(test)]
mod tests;
