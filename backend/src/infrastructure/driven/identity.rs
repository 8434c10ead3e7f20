use async_trait::async_trait;
use serde_json::json;

use shared::protocol::AuthErrorCode;

use crate::application::ports::{IdentityProvider, ProviderError};

/// Identity-provider adapter speaking the Identity-Toolkit-style REST
/// dialect: `POST {base}/v1/accounts:{action}?key={api_key}` with JSON
/// bodies, errors reported as `{"error":{"message":"EMAIL_EXISTS"}}`.
pub struct RestIdentityProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestIdentityProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn call(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ProviderError> {
        let url = format!("{}/v1/accounts:{}?key={}", self.base_url, action, self.api_key);
        let response = self.http.post(url).json(&body).send().await.map_err(|e| {
            ProviderError::new(
                AuthErrorCode::NetworkRequestFailed,
                format!("Identity provider unreachable: {e}"),
            )
        })?;

        let status = response.status();
        let payload: serde_json::Value = response.json().await.map_err(|e| {
            ProviderError::new(
                AuthErrorCode::Unknown,
                format!("Identity provider returned malformed response: {e}"),
            )
        })?;

        if !status.is_success() {
            let raw = payload["error"]["message"].as_str().unwrap_or("UNKNOWN");
            return Err(ProviderError::new(
                AuthErrorCode::from_provider(raw),
                raw.to_string(),
            ));
        }
        Ok(payload)
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> Result<String, ProviderError> {
        let payload = self
            .call(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": false,
                }),
            )
            .await?;

        payload["localId"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| {
                ProviderError::new(
                    AuthErrorCode::Unknown,
                    "Identity provider response missing localId",
                )
            })
    }

    async fn set_role_claim(&self, uid: &str, role: &str) -> Result<(), ProviderError> {
        // Claims travel as a serialized JSON object in customAttributes.
        let attributes = json!({ "role": role }).to_string();
        self.call(
            "update",
            json!({
                "localId": uid,
                "customAttributes": attributes,
            }),
        )
        .await?;
        Ok(())
    }

    async fn delete_account(&self, uid: &str) -> Result<(), ProviderError> {
        self.call("delete", json!({ "localId": uid })).await?;
        Ok(())
    }
}
