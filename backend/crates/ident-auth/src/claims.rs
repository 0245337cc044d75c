use crate::{AuthError, Result as AuthErrorResult};

use ident_core::{IdentityClaim, UserId};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims structure - the identity claim plus issuance metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub user_name: String,
    pub email: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    pub fn new(claim: &IdentityClaim, iat: i64, exp: i64) -> Self {
        Self {
            sub: claim.id.to_string(),
            user_name: claim.user_name.clone(),
            email: claim.email.clone(),
            iat,
            exp,
        }
    }

    /// Validate claims after JWT signature verification and recover the identity
    #[track_caller]
    pub fn into_identity(self) -> AuthErrorResult<IdentityClaim> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidToken {
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id = UserId::parse(&self.sub).map_err(|_| AuthError::InvalidToken {
            message: format!("sub '{}' is not a valid user id", self.sub),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(IdentityClaim {
            user_name: self.user_name,
            email: self.email,
            id,
        })
    }
}
