use async_trait::async_trait;
use serde_json::Value;

use super::errors::RepositoryError;
use crate::ids::{ApplicationId, UserId};

/// Hosted document database, treated as an opaque create-only append store.
/// There is no read-modify-write contract.
#[async_trait]
pub trait ApplicationRepositoryPort: Send + Sync {
    /// Persist a shaped application record for `owner` and return its id.
    /// Every call creates a new record; deduplication, if any, happens
    /// backend-side off the record's idempotency token.
    async fn create_application(
        &self,
        owner: &UserId,
        record: Value,
    ) -> Result<ApplicationId, RepositoryError>;

    /// Persist the initial member profile written right after account
    /// creation.
    async fn create_member_profile(
        &self,
        owner: &UserId,
        record: Value,
    ) -> Result<(), RepositoryError>;

    /// Whether an account is already registered for the given email domain.
    async fn account_exists(&self, domain: &str) -> Result<bool, RepositoryError>;
}
