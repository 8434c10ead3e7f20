// Driven port - document store for profile records (output port)

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ProfileRecord;

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Write a profile document under `collection/key`, replacing any
    /// existing document at that key.
    async fn put(
        &self,
        collection: &str,
        key: &str,
        profile: &ProfileRecord,
    ) -> Result<(), StoreError>;
}
