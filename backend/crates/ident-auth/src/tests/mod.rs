
use crate::TokenService;

use ident_core::{IdentityClaim, UserId};

use std::time::Duration;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn test_token_service() -> TokenService {
    TokenService::with_hs256(TEST_SECRET, Duration::from_secs(3600))
}

pub(crate) fn test_claim() -> IdentityClaim {
    IdentityClaim {
        user_name: "ana".to_string(),
        email: "a@x.com".to_string(),
        id: UserId::new(),
    }
}
