use std::fmt;

/// Status-like classification attached to every identity error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller must (re-)authenticate
    Unauthorized,
    NotFound,
    /// Backend or internal failure, may be retried at a higher layer
    Internal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
