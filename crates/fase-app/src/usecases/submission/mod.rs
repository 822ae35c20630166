//! Terminal submission actions of the registration wizard.
//!
//! All three paths persist a shaped record first and only then touch the
//! next collaborator, so within one handler the persistence write always
//! completes (or fails) before the dependent call begins. Re-invoking any of
//! them creates a new record; deduplication is left to the backend via the
//! record's idempotency token.

mod begin_card_payment;
mod submit_application;
mod submit_for_invoice;
#[cfg(test)]
pub(crate) mod tests_support;

pub use begin_card_payment::{BeginCardPayment, PaymentRedirect, SubscriptionRedirect};
pub use submit_application::SubmitApplication;
pub use submit_for_invoice::SubmitForInvoice;

use std::future::Future;
use std::time::Duration;

use fase_core::ports::errors::EmailError;

use crate::error::SubmissionError;

/// Client-side ceiling on the email-dispatch call. Persistence and payment
/// calls rely on the transport's own defaults.
pub const EMAIL_DISPATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Await an email dispatch under the client-side timeout, mapping elapsed
/// time to the distinct timeout error.
pub(crate) async fn dispatch_with_timeout<F>(
    timeout: Duration,
    dispatch: F,
) -> Result<(), SubmissionError>
where
    F: Future<Output = Result<(), EmailError>>,
{
    match tokio::time::timeout(timeout, dispatch).await {
        Err(_) => Err(SubmissionError::EmailTimeout),
        Ok(result) => result.map_err(SubmissionError::from),
    }
}
