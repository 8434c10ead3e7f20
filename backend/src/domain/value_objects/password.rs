use std::fmt;

/// Write-only credential: passed to the identity provider at account
/// creation and never read back or persisted by this service.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 6;

    pub fn new(password: String) -> Result<Self, String> {
        if password.len() < Self::MIN_LENGTH {
            return Err("Password must be at least 6 characters long".to_string());
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
