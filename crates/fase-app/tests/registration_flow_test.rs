//! End-to-end walk of the MGA registration flow: wizard steps, account
//! registration, and the pay-by-card terminal action, over in-memory ports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use fase_app::usecases::{BeginCardPayment, RegisterAccount, SubmitApplication};
use fase_core::ids::{ApplicationId, UserId};
use fase_core::ports::errors::{AuthError, EmailError, PaymentError, RepositoryError};
use fase_core::ports::{
    ApplicationRepositoryPort, ApplicationSubmittedEmail, AuthPort, EmailPort, InvoiceEmail,
    OrderRequest, PaymentOrder, PaymentPort, PaymentSubscription,
};
use fase_core::registration::{Consents, LineOfBusiness, MembershipClass, TeamMember};
use fase_core::wizard::{AdvanceOutcome, StepId, Wizard, WizardContext};
use fase_core::OrganizationType;

#[derive(Default)]
struct InMemoryBackend {
    applications: Mutex<Vec<(UserId, Value)>>,
    profiles: Mutex<Vec<(UserId, Value)>>,
    auth_accounts: Mutex<Vec<(UserId, String)>>,
    emails: Mutex<Vec<String>>,
    orders: Mutex<Vec<OrderRequest>>,
}

#[async_trait]
impl ApplicationRepositoryPort for InMemoryBackend {
    async fn create_application(
        &self,
        owner: &UserId,
        record: Value,
    ) -> Result<ApplicationId, RepositoryError> {
        self.applications
            .lock()
            .unwrap()
            .push((owner.clone(), record));
        Ok(ApplicationId::new())
    }

    async fn create_member_profile(
        &self,
        owner: &UserId,
        record: Value,
    ) -> Result<(), RepositoryError> {
        self.profiles.lock().unwrap().push((owner.clone(), record));
        Ok(())
    }

    async fn account_exists(&self, domain: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .auth_accounts
            .lock()
            .unwrap()
            .iter()
            .any(|(_, email)| email.ends_with(&format!("@{domain}"))))
    }
}

#[async_trait]
impl AuthPort for InMemoryBackend {
    async fn create_account(&self, email: &str, _password: &str) -> Result<UserId, AuthError> {
        let user = UserId::new();
        self.auth_accounts
            .lock()
            .unwrap()
            .push((user.clone(), email.to_string()));
        Ok(user)
    }

    async fn delete_account(&self, user: &UserId) -> Result<(), AuthError> {
        self.auth_accounts.lock().unwrap().retain(|(u, _)| u != user);
        Ok(())
    }

    async fn update_password(&self, _user: &UserId, _new: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

#[async_trait]
impl EmailPort for InMemoryBackend {
    async fn send_application_submitted(
        &self,
        email: &ApplicationSubmittedEmail,
    ) -> Result<(), EmailError> {
        self.emails.lock().unwrap().push(email.to.clone());
        Ok(())
    }

    async fn send_invoice(&self, email: &InvoiceEmail) -> Result<(), EmailError> {
        self.emails.lock().unwrap().push(email.to.clone());
        Ok(())
    }

    async fn send_password_reset(&self, to: &str, _link: &str) -> Result<(), EmailError> {
        self.emails.lock().unwrap().push(to.to_string());
        Ok(())
    }
}

#[async_trait]
impl PaymentPort for InMemoryBackend {
    async fn create_order(&self, request: &OrderRequest) -> Result<PaymentOrder, PaymentError> {
        self.orders.lock().unwrap().push(request.clone());
        Ok(PaymentOrder {
            order_id: "ORDER-42".to_string(),
            approval_url: "https://pay.example/approve/42".to_string(),
            amount: 1_500,
        })
    }

    async fn create_subscription(
        &self,
        _request: &OrderRequest,
    ) -> Result<PaymentSubscription, PaymentError> {
        unreachable!("this flow pays with a one-off order")
    }
}

fn walk_mga_wizard_to_review(wizard: &mut Wizard) {
    {
        let draft = wizard.draft_mut();
        draft.account.first_name = Some("Jane".to_string());
        draft.account.surname = Some("Doe".to_string());
        draft.account.email = Some("jane@example-mga.com".to_string());
        draft.account.password = Some("long-enough-password".to_string());
        draft.organisation.name = Some("Example MGA Ltd".to_string());
        draft.organisation.regulator_reference = Some("FRN 123456".to_string());
        draft.registered_address.line1 = Some("1 Lime Street".to_string());
        draft.registered_address.city = Some("London".to_string());
        draft.registered_address.postcode = Some("EC3M 7HA".to_string());
        draft.registered_address.country = Some("United Kingdom".to_string());
        draft.invoicing_same_as_registered = true;
        draft.team.add(TeamMember {
            name: "Jane Doe".to_string(),
            email: "jane@example-mga.com".to_string(),
            phone: Some("+44 20 0000 0000".to_string()),
            job_title: "CEO".to_string(),
            primary_contact: true,
        });
        draft.premium.millions = Some(15);
        draft.portfolio.set_share(LineOfBusiness::Property, 60);
        draft.portfolio.set_share(LineOfBusiness::Cyber, 40);
        draft.consents = Consents::all_granted();
    }
    while wizard.current_step().id != StepId::Review {
        match wizard.advance() {
            AdvanceOutcome::Advanced { .. } => {}
            other => panic!("wizard stuck at {:?}: {:?}", wizard.current_step().id, other),
        }
    }
}

#[tokio::test]
async fn test_full_mga_registration_with_card_payment() {
    let backend = Arc::new(InMemoryBackend::default());

    let mut wizard = Wizard::new(WizardContext {
        class: MembershipClass::Corporate,
        preselected_organization: Some(OrganizationType::Mga),
        ..Default::default()
    });
    walk_mga_wizard_to_review(&mut wizard);

    // Account registration happens when the account step completes; here we
    // run it once the draft is final, which is equivalent for the ports.
    let register = RegisterAccount::new(backend.clone(), backend.clone());
    let user = register.execute(wizard.draft()).await.unwrap();
    assert_eq!(backend.profiles.lock().unwrap().len(), 1);

    let pay = BeginCardPayment::new(backend.clone(), backend.clone(), false);
    let redirect = pay.execute(wizard.draft(), &user).await.unwrap();
    assert_eq!(redirect.approval_url, "https://pay.example/approve/42");

    // The silent pre-payment record exists and is pending.
    let applications = backend.applications.lock().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].1["status"], "pending");
    assert_eq!(applications[0].1["membershipFeeEur"], 1_500);
    drop(applications);

    let orders = backend.orders.lock().unwrap();
    assert_eq!(orders[0].gross_written_premiums, 15_000_000);
}

#[tokio::test]
async fn test_duplicate_domain_blocks_second_registration() {
    let backend = Arc::new(InMemoryBackend::default());

    let mut wizard = Wizard::new(WizardContext {
        class: MembershipClass::Corporate,
        preselected_organization: Some(OrganizationType::Mga),
        ..Default::default()
    });
    walk_mga_wizard_to_review(&mut wizard);

    let register = RegisterAccount::new(backend.clone(), backend.clone());
    register.execute(wizard.draft()).await.unwrap();

    // A colleague from the same organization tries to register again.
    let mut second = Wizard::new(WizardContext {
        class: MembershipClass::Corporate,
        preselected_organization: Some(OrganizationType::Mga),
        ..Default::default()
    });
    walk_mga_wizard_to_review(&mut second);
    second.draft_mut().account.email = Some("bob@example-mga.com".to_string());

    let err = register.execute(second.draft()).await.unwrap_err();
    assert!(matches!(
        err,
        fase_app::RegistrationError::DuplicateOrganization(_)
    ));
    assert_eq!(backend.auth_accounts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_submit_without_payment_sends_confirmation() {
    let backend = Arc::new(InMemoryBackend::default());

    let mut wizard = Wizard::new(WizardContext {
        class: MembershipClass::Corporate,
        preselected_organization: Some(OrganizationType::Mga),
        ..Default::default()
    });
    walk_mga_wizard_to_review(&mut wizard);

    let submit = SubmitApplication::new(backend.clone(), backend.clone());
    submit
        .execute(wizard.draft(), &UserId::from("user-1"))
        .await
        .unwrap();

    assert_eq!(backend.applications.lock().unwrap().len(), 1);
    assert_eq!(
        backend.emails.lock().unwrap().as_slice(),
        ["jane@example-mga.com"]
    );
}
