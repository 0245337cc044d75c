//! UserRecord entity - the stored form of an identity.

use crate::{IdentityClaim, PublicUserView, UserId};

use chrono::{DateTime, Utc};

/// A stored identity, owned by the repository.
///
/// Not `Serialize`: the hash only leaves the process through
/// a projection such as [`PublicUserView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    /// Set at creation, never mutated
    pub role: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Claim set embedded in a session token issued for this record
    pub fn identity_claim(&self) -> IdentityClaim {
        IdentityClaim {
            user_name: self.user_name.clone(),
            email: self.email.clone(),
            id: self.id,
        }
    }
}

impl From<UserRecord> for PublicUserView {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            user_name: record.user_name,
            email: record.email,
        }
    }
}
