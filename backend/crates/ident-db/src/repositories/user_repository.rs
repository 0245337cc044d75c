use crate::Result as DbErrorResult;

use ident_core::{NewUser, UserChanges, UserId, UserRecord};

use async_trait::async_trait;

/// Persistence contract for user records.
///
/// Every method is a single atomic operation against the backend; callers get
/// `None` rather than an error when the addressed record does not exist.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records in creation order
    async fn find_all(&self) -> DbErrorResult<Vec<UserRecord>>;

    async fn find_by_id(&self, id: UserId) -> DbErrorResult<Option<UserRecord>>;

    async fn find_by_user_name(&self, user_name: &str) -> DbErrorResult<Option<UserRecord>>;

    /// Insert a record, assigning its id and audit timestamps
    async fn create(&self, user: NewUser) -> DbErrorResult<UserRecord>;

    /// Apply the present fields of `changes` and return the updated record
    async fn update_by_id(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> DbErrorResult<Option<UserRecord>>;

    /// Remove a record and return what was removed
    async fn delete_by_id(&self, id: UserId) -> DbErrorResult<Option<UserRecord>>;
}
