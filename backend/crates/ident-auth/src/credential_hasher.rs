//! One-way password hashing (bcrypt).

use crate::{AuthError, Result as AuthErrorResult};

use std::future::Future;
use std::panic::Location;

use error_location::ErrorLocation;
use tokio::task::spawn_blocking;

/// Work factor applied to every stored password
pub const DEFAULT_HASH_COST: u32 = 12;

#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self {
            cost: DEFAULT_HASH_COST,
        }
    }

    /// Hasher with a custom work factor (bcrypt accepts 4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Empty plaintext is not rejected. Blocks for the full bcrypt cost.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|source| AuthError::Hashing {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check a plaintext against a stored hash. A malformed hash never verifies.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }

    /// [`Self::hash`] on the blocking thread pool
    #[track_caller]
    pub fn hash_offloaded(
        &self,
        plaintext: String,
    ) -> impl Future<Output = AuthErrorResult<String>> + Send + use<> {
        let location = ErrorLocation::from(Location::caller());
        let hasher = *self;
        async move {
            run_blocking("password hashing", location, move || hasher.hash(&plaintext)).await?
        }
    }

    /// [`Self::verify`] on the blocking thread pool
    #[track_caller]
    pub fn verify_offloaded(
        &self,
        plaintext: String,
        hash: String,
    ) -> impl Future<Output = AuthErrorResult<bool>> + Send + use<> {
        let location = ErrorLocation::from(Location::caller());
        let hasher = *self;
        run_blocking("password verification", location, move || {
            hasher.verify(&plaintext, &hash)
        })
    }
}

/// Run `work` on the blocking pool. A panicked or cancelled task is reported
/// at `location`, the call site that requested the work.
pub(crate) async fn run_blocking<T, F>(
    task: &'static str,
    location: ErrorLocation,
    work: F,
) -> AuthErrorResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    spawn_blocking(work)
        .await
        .map_err(|e| AuthError::BlockingTask {
            message: format!("{task} task failed: {e}"),
            location,
        })
}
