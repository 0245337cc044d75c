//! Axum extractors for REST API authentication

use std::convert::Infallible;
use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Raw `Authorization` header value, if the request carried one
///
/// Interpretation of the value is left to the identity service so that
/// a missing header and a malformed one are reported distinctly.
pub struct AuthorizationHeader(pub Option<String>);

impl AuthorizationHeader {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for AuthorizationHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let value = parts
                .headers
                .get(AUTHORIZATION)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

            if value.is_none() {
                log::debug!("Request without Authorization header");
            }

            Ok(AuthorizationHeader(value))
        }
    }
}
