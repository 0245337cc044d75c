use serde::Deserialize;

/// Partial self-service update. Absent fields are left untouched.
///
/// Has no id field: the target is always the identity behind the presented token.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserUpdate {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
