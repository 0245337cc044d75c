use crate::UserId;

use serde::{Deserialize, Serialize};

/// Outward-facing read view of a user. Carries neither hash nor role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUserView {
    pub user_name: String,
    pub email: String,
    pub id: UserId,
}
