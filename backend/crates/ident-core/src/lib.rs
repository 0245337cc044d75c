pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity_claim::IdentityClaim;
pub use models::login_request::LoginRequest;
pub use models::new_user::NewUser;
pub use models::public_user_view::PublicUserView;
pub use models::register_user::RegisterUser;
pub use models::responses::{LoginMessage, SessionStatus, UserMessage};
pub use models::severity::Severity;
pub use models::user_changes::UserChanges;
pub use models::user_id::UserId;
pub use models::user_record::UserRecord;
pub use models::user_update::UserUpdate;

pub use error_location::ErrorLocation;

/// Role assigned to every registered identity. Carried, never branched on.
pub const DEFAULT_ROLE: &str = "user";

#[cfg(test)]
mod tests;
