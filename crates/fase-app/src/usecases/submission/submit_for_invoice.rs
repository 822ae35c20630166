use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use fase_core::fees::membership_fee;
use fase_core::ids::{ApplicationId, IdempotencyToken, UserId};
use fase_core::ports::{ApplicationRepositoryPort, EmailPort, InvoiceEmail};
use fase_core::registration::{MembershipClass, RegistrationDraft};
use fase_core::shaping::{shape_application, ApplicationStatus};

use super::{dispatch_with_timeout, EMAIL_DISPATCH_TIMEOUT};
use crate::error::SubmissionError;

/// Submit the application with payment settled by invoice.
///
/// Only reachable after the consent step, so the shaped record forces all
/// consent flags true. Individual applicants get an organisation identity
/// synthesized from their personal fields during shaping.
pub struct SubmitForInvoice {
    repository: Arc<dyn ApplicationRepositoryPort>,
    email: Arc<dyn EmailPort>,
    email_timeout: Duration,
}

impl SubmitForInvoice {
    pub fn new(repository: Arc<dyn ApplicationRepositoryPort>, email: Arc<dyn EmailPort>) -> Self {
        Self {
            repository,
            email,
            email_timeout: EMAIL_DISPATCH_TIMEOUT,
        }
    }

    /// Shorter dispatch ceiling, for tests.
    pub fn with_email_timeout(mut self, timeout: Duration) -> Self {
        self.email_timeout = timeout;
        self
    }

    pub async fn execute(
        &self,
        draft: &RegistrationDraft,
        owner: &UserId,
    ) -> Result<ApplicationId, SubmissionError> {
        let to = draft
            .account
            .email
            .clone()
            .ok_or(SubmissionError::IncompleteDraft)?;
        let amount_eur = membership_fee(draft).ok_or(SubmissionError::IncompleteDraft)?;

        let record = shape_application(
            draft,
            ApplicationStatus::InvoiceSent,
            &IdempotencyToken::new(),
            Utc::now(),
        );
        let application_id = self.repository.create_application(owner, record).await?;
        debug!(%application_id, amount_eur, "application persisted for invoicing");

        let organisation_name = match draft.class {
            MembershipClass::Individual => draft.account.full_name(),
            MembershipClass::Corporate => draft.organisation.name.clone(),
        };
        let invoice = InvoiceEmail {
            application_id: application_id.clone(),
            to,
            organisation_name,
            amount_eur,
        };
        dispatch_with_timeout(self.email_timeout, self.email.send_invoice(&invoice)).await?;

        Ok(application_id)
    }
}
