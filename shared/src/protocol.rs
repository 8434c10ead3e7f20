use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /register`.
///
/// Field names follow the wire contract of the original web client,
/// hence the camelCase rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Required on the wire, but defaulted so an absent field arrives
    /// as the empty string and is rejected by the presence check
    /// rather than by deserialization.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub password: String,
    /// Role claim to attach to the account; `"user"` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Uniform result shape of the registration endpoint: a message on
/// every outcome, a uid only on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Result of an interactive sign-in against the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub id_token: String,
}

/// Error codes the identity provider reports, normalized from its raw
/// message strings. Anything unrecognized collapses to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorCode {
    InvalidEmail,
    UserDisabled,
    EmailNotFound,
    InvalidPassword,
    EmailExists,
    WeakPassword,
    NetworkRequestFailed,
    TooManyAttempts,
    Unknown,
}

impl AuthErrorCode {
    /// Parse a provider error message. The provider sometimes appends a
    /// description after the code, e.g.
    /// `"WEAK_PASSWORD : Password should be at least 6 characters"`.
    pub fn from_provider(raw: &str) -> Self {
        let code = raw.split([' ', ':']).next().unwrap_or("");
        match code {
            "INVALID_EMAIL" => Self::InvalidEmail,
            "USER_DISABLED" => Self::UserDisabled,
            "EMAIL_NOT_FOUND" => Self::EmailNotFound,
            "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => Self::InvalidPassword,
            "EMAIL_EXISTS" => Self::EmailExists,
            "WEAK_PASSWORD" => Self::WeakPassword,
            "NETWORK_REQUEST_FAILED" => Self::NetworkRequestFailed,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyAttempts,
            _ => Self::Unknown,
        }
    }
}
