use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use fase_core::ids::{ApplicationId, IdempotencyToken, UserId};
use fase_core::ports::errors::PaymentError;
use fase_core::ports::{ApplicationRepositoryPort, OrderRequest, PaymentPort};
use fase_core::registration::{MembershipClass, RegistrationDraft};
use fase_core::shaping::{shape_application, ApplicationStatus};

use crate::error::SubmissionError;

/// Target the browser is redirected to after a one-off order is created.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRedirect {
    pub application_id: ApplicationId,
    pub order_id: String,
    pub approval_url: String,
    pub amount: u64,
}

/// Redirect target for a recurring subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionRedirect {
    pub application_id: ApplicationId,
    pub subscription_id: String,
    pub approval_url: String,
    pub plan_id: String,
}

/// Pay-by-card path. The record is persisted silently with status `pending`
/// before the payment order is created: the redirect to the provider is a
/// point of no return within this flow, so a persisted record must already
/// exist when the user leaves the page.
pub struct BeginCardPayment {
    repository: Arc<dyn ApplicationRepositoryPort>,
    payment: Arc<dyn PaymentPort>,
    test_payment: bool,
}

impl BeginCardPayment {
    pub fn new(
        repository: Arc<dyn ApplicationRepositoryPort>,
        payment: Arc<dyn PaymentPort>,
        test_payment: bool,
    ) -> Self {
        Self {
            repository,
            payment,
            test_payment,
        }
    }

    pub async fn execute(
        &self,
        draft: &RegistrationDraft,
        owner: &UserId,
    ) -> Result<PaymentRedirect, SubmissionError> {
        let application_id = self.persist_silently(draft, owner).await?;
        let request = self.order_request(draft, owner)?;

        let order = self.payment.create_order(&request).await?;
        if order.approval_url.trim().is_empty() {
            return Err(PaymentError::MissingApprovalUrl.into());
        }
        debug!(%application_id, order_id = %order.order_id, "payment order created");

        Ok(PaymentRedirect {
            application_id,
            order_id: order.order_id,
            approval_url: order.approval_url,
            amount: order.amount,
        })
    }

    /// Recurring-billing variant; product and plan setup happen backend-side.
    pub async fn execute_subscription(
        &self,
        draft: &RegistrationDraft,
        owner: &UserId,
    ) -> Result<SubscriptionRedirect, SubmissionError> {
        let application_id = self.persist_silently(draft, owner).await?;
        let request = self.order_request(draft, owner)?;

        let subscription = self.payment.create_subscription(&request).await?;
        if subscription.approval_url.trim().is_empty() {
            return Err(PaymentError::MissingApprovalUrl.into());
        }
        debug!(%application_id, subscription_id = %subscription.subscription_id, "subscription created");

        Ok(SubscriptionRedirect {
            application_id,
            subscription_id: subscription.subscription_id,
            approval_url: subscription.approval_url,
            plan_id: subscription.plan_id,
        })
    }

    async fn persist_silently(
        &self,
        draft: &RegistrationDraft,
        owner: &UserId,
    ) -> Result<ApplicationId, SubmissionError> {
        let record = shape_application(
            draft,
            ApplicationStatus::Pending,
            &IdempotencyToken::new(),
            Utc::now(),
        );
        Ok(self.repository.create_application(owner, record).await?)
    }

    fn order_request(
        &self,
        draft: &RegistrationDraft,
        owner: &UserId,
    ) -> Result<OrderRequest, SubmissionError> {
        let user_email = draft
            .account
            .email
            .clone()
            .ok_or(SubmissionError::IncompleteDraft)?;
        let organization_name = match draft.class {
            MembershipClass::Individual => draft.account.full_name(),
            MembershipClass::Corporate => draft.organisation.name.clone(),
        }
        .ok_or(SubmissionError::IncompleteDraft)?;

        Ok(OrderRequest {
            organization_name,
            organization_type: draft.organization_type,
            gross_written_premiums: draft.premium.total(),
            user_email,
            user_id: owner.clone(),
            test_payment: self.test_payment,
        })
    }
}
