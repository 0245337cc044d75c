use ident_core::{DEFAULT_ROLE, NewUser};

/// Repository input with a placeholder hash; hashing is not this crate's concern
pub fn new_user(user_name: &str) -> NewUser {
    NewUser {
        user_name: user_name.to_string(),
        email: format!("{user_name}@example.com"),
        password_hash: format!("hash-of-{user_name}"),
        role: DEFAULT_ROLE.to_string(),
    }
}
