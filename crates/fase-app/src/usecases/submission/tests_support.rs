//! Shared mock ports and draft fixtures for the submission tests.

use std::collections::BTreeSet;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use fase_core::ids::{ApplicationId, UserId};
use fase_core::ports::errors::{EmailError, PaymentError, RepositoryError};
use fase_core::ports::{
    ApplicationRepositoryPort, ApplicationSubmittedEmail, EmailPort, InvoiceEmail, OrderRequest,
    PaymentOrder, PaymentPort, PaymentSubscription,
};
use fase_core::registration::{
    MembershipClass, OrganizationType, RegistrationDraft, TeamMember,
};

pub(crate) fn corporate_draft() -> RegistrationDraft {
    let mut draft =
        RegistrationDraft::new(MembershipClass::Corporate, Some(OrganizationType::Mga));
    draft.account.first_name = Some("Jane".to_string());
    draft.account.surname = Some("Doe".to_string());
    draft.account.email = Some("jane@example-mga.com".to_string());
    draft.account.password = Some("long-enough-password".to_string());
    draft.organisation.name = Some("Example MGA Ltd".to_string());
    draft.premium.millions = Some(15);
    draft.team.add(TeamMember {
        name: "Jane Doe".to_string(),
        email: "jane@example-mga.com".to_string(),
        phone: None,
        job_title: "CEO".to_string(),
        primary_contact: true,
    });
    draft
}

pub(crate) fn individual_draft() -> RegistrationDraft {
    let mut draft = RegistrationDraft::new(MembershipClass::Individual, None);
    draft.account.first_name = Some("Marco".to_string());
    draft.account.surname = Some("Rossi".to_string());
    draft.account.email = Some("marco@rossi.example".to_string());
    draft.account.password = Some("long-enough-password".to_string());
    draft
}

#[derive(Default)]
pub(crate) struct MockRepository {
    pub applications: Mutex<Vec<(UserId, Value)>>,
    pub profiles: Mutex<Vec<(UserId, Value)>>,
    pub existing_domains: Mutex<BTreeSet<String>>,
    pub fail_profile_writes: bool,
}

impl MockRepository {
    pub fn with_existing_domain(self, domain: &str) -> Self {
        self.existing_domains
            .lock()
            .unwrap()
            .insert(domain.to_string());
        self
    }

    pub fn failing_profile_writes(mut self) -> Self {
        self.fail_profile_writes = true;
        self
    }
}

#[async_trait]
impl ApplicationRepositoryPort for MockRepository {
    async fn create_application(
        &self,
        owner: &UserId,
        record: Value,
    ) -> Result<ApplicationId, RepositoryError> {
        let id = ApplicationId::new();
        self.applications
            .lock()
            .unwrap()
            .push((owner.clone(), record));
        Ok(id)
    }

    async fn create_member_profile(
        &self,
        owner: &UserId,
        record: Value,
    ) -> Result<(), RepositoryError> {
        if self.fail_profile_writes {
            return Err(RepositoryError::Storage("write refused".to_string()));
        }
        self.profiles.lock().unwrap().push((owner.clone(), record));
        Ok(())
    }

    async fn account_exists(&self, domain: &str) -> Result<bool, RepositoryError> {
        Ok(self.existing_domains.lock().unwrap().contains(domain))
    }
}

type EmailFailure = Box<dyn Fn() -> EmailError + Send + Sync>;

#[derive(Default)]
pub(crate) struct MockEmailPort {
    pub submitted: Mutex<Vec<ApplicationSubmittedEmail>>,
    pub invoices: Mutex<Vec<InvoiceEmail>>,
    pub resets: Mutex<Vec<(String, String)>>,
    pub attempts: Mutex<usize>,
    delay: Option<Duration>,
    failure: Option<EmailFailure>,
}

impl MockEmailPort {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing_with<F>(mut self, failure: F) -> Self
    where
        F: Fn() -> EmailError + Send + Sync + 'static,
    {
        self.failure = Some(Box::new(failure));
        self
    }

    async fn dispatch(&self) -> Result<(), EmailError> {
        *self.attempts.lock().unwrap() += 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(failure) => Err(failure()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmailPort for MockEmailPort {
    async fn send_application_submitted(
        &self,
        email: &ApplicationSubmittedEmail,
    ) -> Result<(), EmailError> {
        self.dispatch().await?;
        self.submitted.lock().unwrap().push(email.clone());
        Ok(())
    }

    async fn send_invoice(&self, email: &InvoiceEmail) -> Result<(), EmailError> {
        self.dispatch().await?;
        self.invoices.lock().unwrap().push(email.clone());
        Ok(())
    }

    async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), EmailError> {
        self.dispatch().await?;
        self.resets
            .lock()
            .unwrap()
            .push((to.to_string(), reset_link.to_string()));
        Ok(())
    }
}

pub(crate) struct MockPaymentPort {
    pub orders: Mutex<Vec<OrderRequest>>,
    pub subscriptions: Mutex<Vec<OrderRequest>>,
    pub approval_url: String,
    pub fail: bool,
}

impl Default for MockPaymentPort {
    fn default() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            subscriptions: Mutex::new(Vec::new()),
            approval_url: "https://pay.example/approve/123".to_string(),
            fail: false,
        }
    }
}

impl MockPaymentPort {
    pub fn with_approval_url(mut self, url: &str) -> Self {
        self.approval_url = url.to_string();
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl PaymentPort for MockPaymentPort {
    async fn create_order(&self, request: &OrderRequest) -> Result<PaymentOrder, PaymentError> {
        if self.fail {
            return Err(PaymentError::Provider("declined".to_string()));
        }
        self.orders.lock().unwrap().push(request.clone());
        Ok(PaymentOrder {
            order_id: "ORDER-1".to_string(),
            approval_url: self.approval_url.clone(),
            amount: 1_500,
        })
    }

    async fn create_subscription(
        &self,
        request: &OrderRequest,
    ) -> Result<PaymentSubscription, PaymentError> {
        if self.fail {
            return Err(PaymentError::Provider("declined".to_string()));
        }
        self.subscriptions.lock().unwrap().push(request.clone());
        Ok(PaymentSubscription {
            subscription_id: "SUB-1".to_string(),
            approval_url: self.approval_url.clone(),
            plan_id: "PLAN-1".to_string(),
        })
    }
}
