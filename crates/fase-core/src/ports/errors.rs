//! Error types surfaced by the collaborator ports.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("an account already exists for this email")]
    EmailInUse,

    #[error("account not found")]
    AccountNotFound,

    #[error("auth provider rejected the request: {0}")]
    Rejected(String),

    #[error("auth provider unavailable: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum PaymentError {
    /// The provider response carried no approval URL; the redirect-based
    /// flow cannot continue.
    #[error("payment provider returned no approval URL")]
    MissingApprovalUrl,

    #[error("payment provider rejected the request: {0}")]
    Provider(String),

    #[error("payment provider unavailable: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum EmailError {
    /// The dispatch call exceeded the client-side timeout.
    #[error("email dispatch timed out")]
    Timeout,

    #[error("email dispatch rejected: {0}")]
    Dispatch(String),

    #[error("email dispatch unavailable: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token store error: {0}")]
    Storage(String),
}
