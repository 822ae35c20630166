use std::sync::Arc;

use chrono::Utc;
use rand::RngCore;
use tracing::debug;

use fase_core::ids::UserId;
use fase_core::ports::{EmailPort, ResetTokenRecord, ResetTokenStorePort};

use super::{reset_token_ttl, token_digest};
use crate::error::ResetError;

/// Issue a password-reset link for an account.
pub struct RequestPasswordReset {
    tokens: Arc<dyn ResetTokenStorePort>,
    email: Arc<dyn EmailPort>,
    /// Page the emailed link points at; the token rides in its query string.
    reset_base_url: String,
}

impl RequestPasswordReset {
    pub fn new(
        tokens: Arc<dyn ResetTokenStorePort>,
        email: Arc<dyn EmailPort>,
        reset_base_url: String,
    ) -> Self {
        Self {
            tokens,
            email,
            reset_base_url,
        }
    }

    pub async fn execute(&self, user: &UserId, email_address: &str) -> Result<(), ResetError> {
        let token = generate_token();
        let record = ResetTokenRecord {
            user: user.clone(),
            email: email_address.to_string(),
            expires_at: Utc::now() + reset_token_ttl(),
        };
        self.tokens.put(&token_digest(&token), record).await?;
        debug!(%user, "password-reset token stored");

        let link = format!("{}?token={}", self.reset_base_url, token);
        self.email.send_password_reset(email_address, &link).await?;
        Ok(())
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
