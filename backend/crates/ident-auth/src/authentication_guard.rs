//! Gate for operations that require proof of identity.

use crate::{AuthError, Result as AuthErrorResult, TokenService};

use ident_core::IdentityClaim;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, warn};

#[derive(Clone)]
pub struct AuthenticationGuard {
    tokens: Arc<TokenService>,
}

impl AuthenticationGuard {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Resolve the identity behind a raw `Authorization` header value.
    ///
    /// Does not consult the repository; callers that need the record to still
    /// exist must look it up themselves.
    #[track_caller]
    pub fn authenticate(&self, authorization: Option<&str>) -> AuthErrorResult<IdentityClaim> {
        let header = authorization.ok_or_else(|| {
            warn!("Missing Authorization header");
            AuthError::MissingCredentials {
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let token = bearer_token(header)?;

        let claim = self.tokens.verify(token).inspect_err(|e| {
            warn!("Token verification failed: {e}");
        })?;

        debug!("Authenticated user {}", claim.id);
        Ok(claim)
    }
}

/// Second segment of a `"<scheme> <token>"` header, split on a single space.
///
/// The scheme word is not inspected. A header without a non-empty second segment
/// is rejected here rather than forwarded to the verifier.
#[track_caller]
pub fn bearer_token(header: &str) -> AuthErrorResult<&str> {
    header
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            warn!("Authorization header has no token segment");
            AuthError::MalformedCredentials {
                message: "expected '<scheme> <token>'".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
}
