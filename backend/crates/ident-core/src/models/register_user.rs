use serde::Deserialize;

/// Registration input. The password is plaintext until the service hashes it.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
}
