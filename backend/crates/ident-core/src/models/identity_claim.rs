use crate::UserId;

use serde::{Deserialize, Serialize};

/// Minimal identity embedded in a session token.
///
/// Derived from a [`crate::UserRecord`] at issuance time; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    pub user_name: String,
    pub email: String,
    pub id: UserId,
}
