use async_trait::async_trait;

use crate::application::ports::{ProfileStore, StoreError};
use crate::domain::ProfileRecord;

/// Document-store adapter: JSON documents addressed as
/// `PUT {base}/{collection}/{key}`.
pub struct RestProfileStore {
    http: reqwest::Client,
    base_url: String,
}

impl RestProfileStore {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    async fn put(
        &self,
        collection: &str,
        key: &str,
        profile: &ProfileRecord,
    ) -> Result<(), StoreError> {
        let url = format!("{}/{}/{}", self.base_url, collection, key);
        let response = self
            .http
            .put(url)
            .json(profile)
            .send()
            .await
            .map_err(|e| StoreError(format!("Document store unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError(format!(
                "Document store rejected write ({status}): {body}"
            )));
        }
        Ok(())
    }
}
