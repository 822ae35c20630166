use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use fase_core::ports::{AuthPort, ResetTokenStorePort};
use fase_core::wizard::MIN_PASSWORD_LEN;

use super::token_digest;
use crate::error::ResetError;

/// Consume a reset token and set the new password.
pub struct ConfirmPasswordReset {
    tokens: Arc<dyn ResetTokenStorePort>,
    auth: Arc<dyn AuthPort>,
}

impl ConfirmPasswordReset {
    pub fn new(tokens: Arc<dyn ResetTokenStorePort>, auth: Arc<dyn AuthPort>) -> Self {
        Self { tokens, auth }
    }

    pub async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetError> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(ResetError::WeakPassword);
        }

        // Taking the record consumes the token either way; an expired link
        // cannot be replayed into a valid one later.
        let record = self
            .tokens
            .take(&token_digest(token))
            .await?
            .ok_or(ResetError::InvalidToken)?;
        if record.expires_at < Utc::now() {
            return Err(ResetError::Expired);
        }

        self.auth.update_password(&record.user, new_password).await?;
        debug!(user = %record.user, "password updated via reset token");
        Ok(())
    }
}
