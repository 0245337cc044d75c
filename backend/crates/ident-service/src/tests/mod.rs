
use crate::IdentityService;

use ident_auth::{CredentialHasher, TokenService};
use ident_core::{NewUser, UserChanges, UserId, UserRecord};
use ident_db::{Result as DbErrorResult, SqliteUserRepository, UserRepository};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// SQLite-backed repository that counts every call made through it
pub(crate) struct CountingRepository {
    inner: SqliteUserRepository,
    calls: AtomicUsize,
}

impl CountingRepository {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for CountingRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<UserRecord>> {
        self.record();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: UserId) -> DbErrorResult<Option<UserRecord>> {
        self.record();
        self.inner.find_by_id(id).await
    }

    async fn find_by_user_name(&self, user_name: &str) -> DbErrorResult<Option<UserRecord>> {
        self.record();
        self.inner.find_by_user_name(user_name).await
    }

    async fn create(&self, user: NewUser) -> DbErrorResult<UserRecord> {
        self.record();
        self.inner.create(user).await
    }

    async fn update_by_id(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> DbErrorResult<Option<UserRecord>> {
        self.record();
        self.inner.update_by_id(id, changes).await
    }

    async fn delete_by_id(&self, id: UserId) -> DbErrorResult<Option<UserRecord>> {
        self.record();
        self.inner.delete_by_id(id).await
    }
}

pub(crate) struct TestContext {
    pub service: IdentityService,
    pub repository: Arc<CountingRepository>,
    pub tokens: Arc<TokenService>,
    pub hasher: CredentialHasher,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        // Low work factor keeps the suite fast
        Self::with_cost(4).await
    }

    pub(crate) async fn with_cost(cost: u32) -> Self {
        let pool = ident_db::create_in_memory_pool()
            .await
            .expect("Failed to create test pool");
        let repository = Arc::new(CountingRepository {
            inner: SqliteUserRepository::new(pool),
            calls: AtomicUsize::new(0),
        });
        let tokens = Arc::new(TokenService::with_hs256(
            TEST_SECRET,
            Duration::from_secs(3600),
        ));
        let hasher = CredentialHasher::with_cost(cost);

        let service = IdentityService::new(repository.clone(), tokens.clone(), hasher);

        Self {
            service,
            repository,
            tokens,
            hasher,
        }
    }

    /// `Authorization` header value carrying a fresh token for the given record
    pub(crate) fn bearer_for(&self, user: &UserRecord) -> String {
        let token = self.tokens.issue(&user.identity_claim()).unwrap();
        format!("Bearer {}", token.as_str())
    }

    pub(crate) async fn stored(&self, id: UserId) -> Option<UserRecord> {
        self.repository.inner.find_by_id(id).await.unwrap()
    }
}
