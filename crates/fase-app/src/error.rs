//! User-surfaced error taxonomy of the use-case layer.
//!
//! Every variant renders as inline text near the relevant control; none of
//! them crash the page, and the submit control is re-enabled afterwards so
//! the user can retry manually. There is no automatic retry anywhere.

use fase_core::ports::{AuthError, EmailError, PaymentError, RepositoryError, TokenStoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The draft lacks fields the wizard guarantees by the review step.
    #[error("the application is missing required details")]
    IncompleteDraft,

    #[error("could not save the application: {0}")]
    Persistence(#[from] RepositoryError),

    #[error("payment could not be started: {0}")]
    Payment(#[from] PaymentError),

    /// Distinct from a generic email failure so the UI can say so.
    #[error("submission timed out")]
    EmailTimeout,

    #[error("confirmation email could not be sent: {0}")]
    Email(EmailError),
}

impl From<EmailError> for SubmissionError {
    fn from(error: EmailError) -> Self {
        match error {
            EmailError::Timeout => SubmissionError::EmailTimeout,
            other => SubmissionError::Email(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The email's domain already has a registered account; detected before
    /// any account creation is attempted.
    #[error("an account for {0} is already registered")]
    DuplicateOrganization(String),

    #[error("email address is missing or invalid")]
    InvalidEmail,

    #[error("password is missing or too short")]
    WeakPassword,

    #[error("account could not be created: {0}")]
    Auth(#[from] AuthError),

    #[error("account profile could not be saved: {0}")]
    Persistence(#[from] RepositoryError),
}

#[derive(Debug, Error)]
pub enum ResetError {
    #[error("this reset link is invalid or has already been used")]
    InvalidToken,

    #[error("this reset link has expired")]
    Expired,

    #[error("password is too short")]
    WeakPassword,

    #[error("reset token could not be stored: {0}")]
    TokenStore(#[from] TokenStoreError),

    #[error("password could not be updated: {0}")]
    Auth(#[from] AuthError),

    #[error("reset email could not be sent: {0}")]
    Email(#[from] EmailError),
}
