use shared::protocol::AuthErrorCode;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Rejected locally, before any network call.
    #[error("{0}")]
    Validation(String),

    /// The registration service refused the request; its message is
    /// shown verbatim.
    #[error("{0}")]
    Registration(String),

    /// The identity provider reported an error code.
    #[error("{}", auth_error_message(.0))]
    Auth(AuthErrorCode),

    /// A request is already outstanding; resubmission is disabled
    /// while loading.
    #[error("A request is already in progress")]
    Busy,
}

/// The fixed table of human-readable messages for identity-provider
/// error codes. Unmapped codes fall back to "Authentication failed".
pub fn auth_error_message(code: &AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::InvalidEmail => "Invalid email address format",
        AuthErrorCode::UserDisabled => "This account has been disabled",
        AuthErrorCode::EmailNotFound | AuthErrorCode::InvalidPassword => {
            "Invalid email or password"
        }
        AuthErrorCode::EmailExists => "Email is already in use",
        AuthErrorCode::WeakPassword => "Password is too weak",
        AuthErrorCode::NetworkRequestFailed => "Network error - please check your connection",
        AuthErrorCode::TooManyAttempts => "Too many requests - please try again later",
        AuthErrorCode::Unknown => "Authentication failed",
    }
}
