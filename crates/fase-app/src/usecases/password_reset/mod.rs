//! Token-based password reset.
//!
//! The raw token only ever travels inside the emailed link; the store keeps
//! its SHA-256 digest, and tokens are single-use with a one-hour expiry.

mod confirm;
mod request;

pub use confirm::ConfirmPasswordReset;
pub use request::RequestPasswordReset;

use sha2::{Digest, Sha256};

/// Lifetime of a reset link.
pub fn reset_token_ttl() -> chrono::Duration {
    chrono::Duration::hours(1)
}

pub(crate) fn token_digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
