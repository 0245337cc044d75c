
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point IDENT_CONFIG_DIR at it and clear any
/// secret inherited from the surrounding environment
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("IDENT_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("JWT_SECRET"),
        EnvGuard::remove("IDENT_AUTH_JWT_SECRET"),
        EnvGuard::remove("IDENT_AUTH_TOKEN_TTL_SECS"),
    ];
    (temp, guards)
}

pub(crate) const VALID_SECRET: &str = "12345678901234567890123456789012";
