//! Port interfaces for the application layer.
//!
//! Ports define the contract between the use cases and the infrastructure
//! adapters, keeping the domain free of HTTP and vendor concerns. Full
//! specification of the collaborators behind them (document database, auth
//! provider, payment processor, email delivery) is out of scope here.

mod application_repository;
mod auth;
mod email;
pub mod errors;
mod payment;
mod reset_token;

pub use application_repository::ApplicationRepositoryPort;
pub use auth::AuthPort;
pub use email::{ApplicationSubmittedEmail, EmailPort, InvoiceEmail};
pub use errors::{AuthError, EmailError, PaymentError, RepositoryError, TokenStoreError};
pub use payment::{OrderRequest, PaymentOrder, PaymentPort, PaymentSubscription};
pub use reset_token::{ResetTokenRecord, ResetTokenStorePort};
