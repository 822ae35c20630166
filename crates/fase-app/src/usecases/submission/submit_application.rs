use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use fase_core::ids::{ApplicationId, IdempotencyToken, UserId};
use fase_core::ports::{ApplicationRepositoryPort, ApplicationSubmittedEmail, EmailPort};
use fase_core::registration::RegistrationDraft;
use fase_core::shaping::{shape_application, ApplicationStatus};

use super::{dispatch_with_timeout, EMAIL_DISPATCH_TIMEOUT};
use crate::error::SubmissionError;

/// Submit the application without payment ("pay later" / review paths).
///
/// Persists the record with status `pending`, then dispatches the
/// confirmation email under the client-side timeout.
pub struct SubmitApplication {
    repository: Arc<dyn ApplicationRepositoryPort>,
    email: Arc<dyn EmailPort>,
    email_timeout: Duration,
}

impl SubmitApplication {
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
        let applicant_name = draft
            .account
            .full_name()
            .ok_or(SubmissionError::IncompleteDraft)?;

        let record = shape_application(
            draft,
            ApplicationStatus::Pending,
            &IdempotencyToken::new(),
            Utc::now(),
        );
        let application_id = self.repository.create_application(owner, record).await?;
        debug!(%application_id, "application persisted");

        let confirmation = ApplicationSubmittedEmail {
            application_id: application_id.clone(),
            to,
            applicant_name,
            organisation_name: draft.organisation.name.clone(),
        };
        dispatch_with_timeout(
            self.email_timeout,
            self.email.send_application_submitted(&confirmation),
        )
        .await?;

        Ok(application_id)
    }
}
