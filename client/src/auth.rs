use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::json;
use tracing::debug;

use shared::protocol::{AuthErrorCode, RegisterRequest, RegisterResponse, Session};

use crate::error::ClientError;
use crate::form::RegistrationForm;
use crate::notify::{Notification, Notifier};

/// Drives the two client-side flows: sign-up (register with the
/// service, then sign in) and plain sign-in (straight to the identity
/// provider, bypassing the service).
///
/// A single loading flag guards against resubmission while any network
/// operation is outstanding. There is no retry, debounce, or
/// cancellation; an in-flight registration cannot be aborted.
pub struct AuthClient {
    http: reqwest::Client,
    service_url: String,
    identity_url: String,
    api_key: String,
    is_loading: AtomicBool,
}

impl AuthClient {
    pub fn new(service_url: String, identity_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            service_url: service_url.trim_end_matches('/').to_string(),
            identity_url: identity_url.trim_end_matches('/').to_string(),
            api_key,
            is_loading: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    /// Submit the sign-up form. Registration and the first sign-in are
    /// two independent network operations: the account may exist even
    /// when the sign-in afterwards fails.
    pub async fn sign_up(
        &self,
        form: &RegistrationForm,
        notifier: &dyn Notifier,
    ) -> Result<Session, ClientError> {
        if self.is_loading.swap(true, Ordering::SeqCst) {
            return Err(ClientError::Busy);
        }
        let result = self.sign_up_flow(form, notifier).await;
        self.is_loading.store(false, Ordering::SeqCst);

        if let Err(err) = &result {
            notifier.notify(failure_notification(err));
        }
        result
    }

    /// Interactive sign-in with existing credentials.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        notifier: &dyn Notifier,
    ) -> Result<Session, ClientError> {
        if self.is_loading.swap(true, Ordering::SeqCst) {
            return Err(ClientError::Busy);
        }
        let result = self.password_sign_in(email, password).await;
        self.is_loading.store(false, Ordering::SeqCst);

        match &result {
            Ok(_) => notifier.notify(Notification::info(
                "Success",
                "You have successfully logged in.",
            )),
            Err(err) => notifier.notify(failure_notification(err)),
        }
        result
    }

    async fn sign_up_flow(
        &self,
        form: &RegistrationForm,
        notifier: &dyn Notifier,
    ) -> Result<Session, ClientError> {
        form.validate()?;
        let request = form.to_request();
        let uid = self.register(&request).await?;
        debug!(%uid, "registration accepted");
        notifier.notify(Notification::info(
            "Account created",
            "Your account has been created successfully.",
        ));

        let session = self.password_sign_in(&form.email, &form.password).await?;
        notifier.notify(Notification::info(
            "Success",
            "You have successfully logged in.",
        ));
        Ok(session)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/register", self.service_url))
            .json(request)
            .send()
            .await
            .map_err(|_| ClientError::Auth(AuthErrorCode::NetworkRequestFailed))?;

        let status = response.status();
        let body: RegisterResponse = response
            .json()
            .await
            .map_err(|_| ClientError::Auth(AuthErrorCode::Unknown))?;

        if !status.is_success() {
            return Err(ClientError::Registration(body.message));
        }
        body.uid.ok_or(ClientError::Auth(AuthErrorCode::Unknown))
    }

    async fn password_sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, ClientError> {
        if email.is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Please enter both email and password.".to_string(),
            ));
        }

        let url = format!(
            "{}/v1/accounts:signInWithPassword?key={}",
            self.identity_url, self.api_key
        );
        let response = self
            .http
            .post(url)
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await
            .map_err(|_| ClientError::Auth(AuthErrorCode::NetworkRequestFailed))?;

        let status = response.status();
        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ClientError::Auth(AuthErrorCode::Unknown))?;

        if !status.is_success() {
            let raw = payload["error"]["message"].as_str().unwrap_or("");
            return Err(ClientError::Auth(AuthErrorCode::from_provider(raw)));
        }

        Ok(Session {
            uid: payload["localId"].as_str().unwrap_or_default().to_string(),
            id_token: payload["idToken"].as_str().unwrap_or_default().to_string(),
        })
    }
}

/// Checks rejected before any network call are plain form errors;
/// only provider and service failures are authentication failures.
fn failure_notification(err: &ClientError) -> Notification {
    let title = match err {
        ClientError::Validation(_) => "Error",
        _ => "Authentication failed",
    };
    Notification::error(title, err.to_string())
}
