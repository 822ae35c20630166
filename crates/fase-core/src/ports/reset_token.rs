use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::TokenStoreError;
use crate::ids::UserId;

/// Stored state for one outstanding password-reset token. Only the token's
/// digest is ever persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetTokenRecord {
    pub user: UserId,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Store for password-reset tokens, keyed by token digest.
#[async_trait]
pub trait ResetTokenStorePort: Send + Sync {
    async fn put(&self, digest: &str, record: ResetTokenRecord) -> Result<(), TokenStoreError>;

    /// Remove and return the record for `digest`; tokens are single-use.
    async fn take(&self, digest: &str) -> Result<Option<ResetTokenRecord>, TokenStoreError>;
}
