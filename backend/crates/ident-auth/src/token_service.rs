use crate::{AuthError, Claims, Result as AuthErrorResult, SessionToken};

use ident_core::IdentityClaim;

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues and verifies HS256 session tokens.
///
/// The signing secret is injected once at construction and is read-only afterwards,
/// so a single instance is shared across all requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Sign a token for the given identity
    #[track_caller]
    pub fn issue(&self, claim: &IdentityClaim) -> AuthErrorResult<SessionToken> {
        let iat = Utc::now().timestamp();
        let exp = iat.saturating_add(i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX));
        let claims = Claims::new(claim, iat, exp);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(SessionToken::from(token))
    }

    /// Verify a token and return the identity it carries
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<IdentityClaim> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let message = match e.kind() {
                    ErrorKind::ExpiredSignature => "token expired".to_string(),
                    ErrorKind::InvalidSignature => "signature mismatch".to_string(),
                    _ => e.to_string(),
                };
                AuthError::InvalidToken {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        token_data.claims.into_identity()
    }
}
