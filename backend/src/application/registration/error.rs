use thiserror::Error;

/// Everything the registration operation can fail with. The first
/// three are detected before any external call and map to HTTP 400;
/// the rest surface downstream failures as HTTP 500 with the message
/// passed through.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long")]
    WeakPassword,

    #[error("{0}")]
    IdentityProvider(String),

    #[error("{0}")]
    ProfileStore(String),
}

impl RegistrationError {
    /// True for failures the caller can fix by changing the request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingFields | Self::InvalidEmail | Self::WeakPassword
        )
    }
}
