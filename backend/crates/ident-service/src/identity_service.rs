use crate::{Result as ServiceResult, ServiceError};

use ident_auth::{AuthenticationGuard, CredentialHasher, TokenService};
use ident_core::{
    DEFAULT_ROLE, LoginMessage, LoginRequest, NewUser, PublicUserView, RegisterUser,
    SessionStatus, UserChanges, UserId, UserMessage, UserUpdate,
};
use ident_db::UserRepository;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::OnceCell;

pub const ALIVE_MESSAGE: &str = "I am alive";
pub const USER_CREATED: &str = "user created";
pub const USER_UPDATED: &str = "user updated";
pub const USER_DELETED: &str = "user deleted";
pub const TOKEN_VALID: &str = "Token is valid";
pub const LOGIN_SUCCESSFUL: &str = "Login successful";

const USER_NOT_FOUND: &str = "User not found";
const TOKEN_NOT_VALID: &str = "Token not valid";
const BAD_LOGIN: &str = "Incorrect username or password";
const TIMING_PASSWORD: &str = "unknown-user-timing-equalizer";

/// User-facing identity operations.
///
/// Operations that mutate a record only ever address the identity bound to the
/// presented token; none of them take a caller-supplied id.
#[derive(Clone)]
pub struct IdentityService {
    repository: Arc<dyn UserRepository>,
    hasher: CredentialHasher,
    tokens: Arc<TokenService>,
    guard: AuthenticationGuard,
    /// Hash verified against when the user name is unknown, so both failed
    /// login paths cost one bcrypt verify at the configured work factor
    timing_hash: Arc<OnceCell<String>>,
}

impl IdentityService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        tokens: Arc<TokenService>,
        hasher: CredentialHasher,
    ) -> Self {
        Self {
            repository,
            hasher,
            guard: AuthenticationGuard::new(tokens.clone()),
            tokens,
            timing_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Liveness probe
    pub fn check(&self) -> &'static str {
        ALIVE_MESSAGE
    }

    /// All users, projected, in repository order
    pub async fn list(&self) -> ServiceResult<Vec<PublicUserView>> {
        let users = self.repository.find_all().await?;
        debug!("Listing {} users", users.len());

        Ok(users.into_iter().map(PublicUserView::from).collect())
    }

    /// A single user by id. An id that cannot name any record is reported as not found.
    pub async fn get(&self, id: &str) -> ServiceResult<PublicUserView> {
        let Ok(user_id) = UserId::parse(id) else {
            debug!("Rejecting lookup of malformed user id {id:?}");
            return Err(ServiceError::not_found(USER_NOT_FOUND));
        };

        self.repository
            .find_by_id(user_id)
            .await?
            .map(PublicUserView::from)
            .ok_or_else(|| ServiceError::not_found(USER_NOT_FOUND))
    }

    pub async fn register(&self, input: RegisterUser) -> ServiceResult<UserMessage> {
        let password_hash = self.hasher.hash_offloaded(input.password).await?;

        let user = self
            .repository
            .create(NewUser {
                user_name: input.user_name,
                email: input.email,
                password_hash,
                role: DEFAULT_ROLE.to_string(),
            })
            .await?;

        info!("Registered user {}", user.id);
        Ok(UserMessage::new(USER_CREATED, user.into()))
    }

    /// Update the profile of the identity behind `authorization`
    pub async fn update_self(
        &self,
        authorization: Option<&str>,
        input: UserUpdate,
    ) -> ServiceResult<UserMessage> {
        let claim = self.guard.authenticate(authorization)?;

        let password_hash = match input.password {
            Some(password) => Some(self.hasher.hash_offloaded(password).await?),
            None => None,
        };

        let changes = UserChanges {
            user_name: input.user_name,
            email: input.email,
            password_hash,
        };

        let user = self
            .repository
            .update_by_id(claim.id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found(USER_NOT_FOUND))?;

        info!("Updated user {}", user.id);
        Ok(UserMessage::new(USER_UPDATED, user.into()))
    }

    /// Delete the identity behind `authorization`
    pub async fn delete_self(&self, authorization: Option<&str>) -> ServiceResult<UserMessage> {
        let claim = self.guard.authenticate(authorization)?;

        let user = self
            .repository
            .delete_by_id(claim.id)
            .await?
            .ok_or_else(|| ServiceError::not_found(USER_NOT_FOUND))?;

        info!("Deleted user {}", user.id);
        Ok(UserMessage::new(USER_DELETED, user.into()))
    }

    /// Confirm the token's identity still exists and hand back a fresh token
    /// built from the stored record rather than the presented claim
    pub async fn validate_session(
        &self,
        authorization: Option<&str>,
    ) -> ServiceResult<SessionStatus> {
        let claim = self.guard.authenticate(authorization)?;

        let user = self
            .repository
            .find_by_id(claim.id)
            .await?
            .ok_or_else(|| {
                warn!("Token presented for deleted user {}", claim.id);
                ServiceError::not_found(TOKEN_NOT_VALID)
            })?;

        let token = self.tokens.issue(&user.identity_claim())?;

        Ok(SessionStatus {
            message: TOKEN_VALID.to_string(),
            token: token.into_string(),
        })
    }

    /// Exchange a user name and password for a session token
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginMessage> {
        let Some(user) = self
            .repository
            .find_by_user_name(&request.user_name)
            .await?
        else {
            warn!("Login attempt for unknown user");
            let timing_hash = self.timing_hash().await?;
            self.hasher
                .verify_offloaded(request.password, timing_hash.to_string())
                .await?;
            return Err(Self::bad_login());
        };

        let valid = self
            .hasher
            .verify_offloaded(request.password, user.password_hash.clone())
            .await?;
        if !valid {
            warn!("Login attempt with wrong password for user {}", user.id);
            return Err(Self::bad_login());
        }

        let token = self.tokens.issue(&user.identity_claim())?;

        info!("User {} logged in", user.id);
        Ok(LoginMessage {
            message: LOGIN_SUCCESSFUL.to_string(),
            token: token.into_string(),
            user: user.into(),
        })
    }

    async fn timing_hash(&self) -> ServiceResult<&str> {
        let hash = self
            .timing_hash
            .get_or_try_init(|| self.hasher.hash_offloaded(TIMING_PASSWORD.to_string()))
            .await?;
        Ok(hash.as_str())
    }

    #[cfg(test)]
    pub(crate) fn timing_hash_cost(&self) -> Option<u32> {
        self.timing_hash
            .get()
            .and_then(|hash| hash.get(4..6))
            .and_then(|cost| cost.parse().ok())
    }

    #[track_caller]
    fn bad_login() -> ServiceError {
        ServiceError::InvalidCredentials {
            message: BAD_LOGIN.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
