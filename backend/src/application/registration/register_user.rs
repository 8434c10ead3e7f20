use chrono::Utc;
use tracing::{info, warn};

use shared::protocol::RegisterRequest;

use crate::application::registration::RegistrationError;
use crate::domain::{DisplayName, Email, Password, ProfileRecord, UserRole};
use crate::infrastructure::AppState;

#[derive(Debug)]
pub struct RegisterAccepted {
    pub uid: String,
}

/// Register a new user: validate, create the identity account, attach
/// the role claim, write the profile document.
///
/// The two downstream writes are sequential because the profile is
/// keyed by the uid the provider assigns. If anything fails after the
/// account exists, the account is deleted again so no identity account
/// is left without a profile.
pub async fn execute(
    state: &AppState,
    request: RegisterRequest,
) -> Result<RegisterAccepted, RegistrationError> {
    // Validation order is part of the endpoint contract: presence,
    // then email syntax, then password strength. Short-circuits before
    // any external call.
    if request.display_name.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(RegistrationError::MissingFields);
    }
    let email =
        Email::new(request.email.clone()).map_err(|_| RegistrationError::InvalidEmail)?;
    let password =
        Password::new(request.password.clone()).map_err(|_| RegistrationError::WeakPassword)?;
    let display_name = DisplayName::new(request.display_name.clone())
        .map_err(|_| RegistrationError::MissingFields)?;
    let role = UserRole::resolve(request.role.clone());

    let uid = state
        .identity
        .create_account(email.as_str(), password.as_str())
        .await
        .map_err(|e| RegistrationError::IdentityProvider(e.message))?;

    info!(%uid, email = %email, "identity account created");

    // Caller-supplied timestamps are honored when present; the server
    // clock fills the gaps so a profile never persists without them.
    let now = Utc::now();
    let profile = ProfileRecord {
        uid: uid.clone(),
        name: display_name.as_str().to_string(),
        email: email.as_str().to_string(),
        role: role.as_str().to_string(),
        created_at: request.created_at.unwrap_or(now),
        updated_at: request.updated_at.unwrap_or(now),
        is_active: request.is_active.unwrap_or(true),
    };

    if let Err(err) = finish_registration(state, &uid, &role, &profile).await {
        // The account exists but the sequence did not complete; take
        // the account back down before reporting the failure.
        if let Err(cleanup) = state.identity.delete_account(&uid).await {
            warn!(%uid, error = %cleanup, "cleanup failed, identity account orphaned");
        }
        return Err(err);
    }

    info!(%uid, role = %role, "user registered");
    Ok(RegisterAccepted { uid })
}

async fn finish_registration(
    state: &AppState,
    uid: &str,
    role: &UserRole,
    profile: &ProfileRecord,
) -> Result<(), RegistrationError> {
    state
        .identity
        .set_role_claim(uid, role.as_str())
        .await
        .map_err(|e| RegistrationError::IdentityProvider(e.message))?;
    state
        .profiles
        .put(&state.users_collection, uid, profile)
        .await
        .map_err(|e| RegistrationError::ProfileStore(e.to_string()))?;
    Ok(())
}
