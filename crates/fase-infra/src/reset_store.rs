//! In-process reset-token store.
//!
//! Tokens live for an hour and are consumed on first use, so process-local
//! storage is sufficient; a restart only invalidates outstanding links.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use fase_core::ports::errors::TokenStoreError;
use fase_core::ports::{ResetTokenRecord, ResetTokenStorePort};

#[derive(Default)]
pub struct InMemoryResetTokenStore {
    records: Mutex<HashMap<String, ResetTokenRecord>>,
}

impl InMemoryResetTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, ResetTokenRecord>>, TokenStoreError> {
        self.records
            .lock()
            .map_err(|_| TokenStoreError::Storage("token store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ResetTokenStorePort for InMemoryResetTokenStore {
    async fn put(&self, digest: &str, record: ResetTokenRecord) -> Result<(), TokenStoreError> {
        self.records()?.insert(digest.to_string(), record);
        Ok(())
    }

    async fn take(&self, digest: &str) -> Result<Option<ResetTokenRecord>, TokenStoreError> {
        Ok(self.records()?.remove(digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fase_core::ids::UserId;

    fn record() -> ResetTokenRecord {
        ResetTokenRecord {
            user: UserId::from("user-1"),
            email: "jane@example-mga.com".to_string(),
            expires_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_take_removes_the_record() {
        let store = InMemoryResetTokenStore::new();
        store.put("digest-1", record()).await.unwrap();

        assert!(store.take("digest-1").await.unwrap().is_some());
        assert!(store.take("digest-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_digest_is_none() {
        let store = InMemoryResetTokenStore::new();
        assert!(store.take("missing").await.unwrap().is_none());
    }
}
