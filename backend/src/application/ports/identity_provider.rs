// Driven port - identity provider (output port)

use async_trait::async_trait;
use shared::protocol::AuthErrorCode;
use thiserror::Error;

/// Failure reported by the identity provider. The message is passed
/// through to the caller verbatim; the normalized code is what the
/// rest of the system switches on.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: AuthErrorCode,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: AuthErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and return the provider-assigned uid.
    async fn create_account(&self, email: &str, password: &str) -> Result<String, ProviderError>;

    /// Attach a role claim to an existing account.
    async fn set_role_claim(&self, uid: &str, role: &str) -> Result<(), ProviderError>;

    /// Delete an account. Compensation path: used to take down an
    /// account whose registration could not be completed.
    async fn delete_account(&self, uid: &str) -> Result<(), ProviderError>;
}
