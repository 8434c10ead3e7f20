use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application-level user record persisted in the document store,
/// distinct from the identity provider's own account record.
///
/// Invariant: a profile must never exist for a uid without a matching
/// identity account; the registration command enforces this by writing
/// the profile only after account creation and deleting the account
/// again if the write fails.
///
/// Serialized field names match the document shape the portal front-end
/// reads, hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}
