use async_trait::async_trait;

use super::errors::AuthError;
use crate::ids::UserId;

/// Hosted authentication service.
#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn create_account(&self, email: &str, password: &str) -> Result<UserId, AuthError>;

    /// Best-effort rollback of a just-created account.
    async fn delete_account(&self, user: &UserId) -> Result<(), AuthError>;

    async fn update_password(&self, user: &UserId, new_password: &str) -> Result<(), AuthError>;
}
