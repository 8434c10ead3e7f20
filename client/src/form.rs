use chrono::Utc;

use shared::protocol::RegisterRequest;

use crate::error::ClientError;

/// Collected sign-up fields. Validation here mirrors what the web form
/// checked before contacting the server; the service re-validates
/// everything on its side.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub display_name: String,
    pub role: Option<String>,
}

impl RegistrationForm {
    /// Local checks, run before any network call.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ClientError::Validation(
                "Please enter both email and password.".to_string(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(ClientError::Validation(
                "Passwords do not match.".to_string(),
            ));
        }
        if self.display_name.is_empty() {
            return Err(ClientError::Validation(
                "Please enter your name.".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize the form the way the web client did: timestamps
    /// stamped at submission time and the account marked active.
    pub fn to_request(&self) -> RegisterRequest {
        let now = Utc::now();
        RegisterRequest {
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            password: self.password.clone(),
            role: self.role.clone(),
            created_at: Some(now),
            updated_at: Some(now),
            is_active: Some(true),
        }
    }
}
