use serde::{Deserialize, Serialize};
use std::fmt;

/// Role claim stored on the identity account and copied into the
/// profile record. Free-form by design: the portal UI offers
/// `"doctor"` and `"user"`, but authorization decisions happen
/// elsewhere and the service stores whatever string the caller sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRole(String);

impl UserRole {
    pub const DEFAULT: &'static str = "user";

    /// Resolve the caller-supplied role; absent or empty falls back to
    /// the default.
    pub fn resolve(role: Option<String>) -> Self {
        match role {
            Some(r) if !r.is_empty() => Self(r),
            _ => Self(Self::DEFAULT.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
