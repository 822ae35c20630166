use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use fase_core::ids::UserId;
use fase_core::ports::{ApplicationRepositoryPort, AuthPort};
use fase_core::registration::{MembershipClass, RegistrationDraft};
use fase_core::shaping::clean_value;
use fase_core::wizard::{is_valid_email, MIN_PASSWORD_LEN};

use crate::error::RegistrationError;

/// Create the auth account and initial member profile when the user
/// completes the account step.
///
/// For corporate drafts the email's domain is checked first; a domain that
/// already has a registered account blocks registration before any account
/// creation is attempted. If the profile write fails after the auth account
/// was created, the account is deleted best-effort; a failed rollback is
/// only logged. There is no transactional guarantee across the two systems.
pub struct RegisterAccount {
    repository: Arc<dyn ApplicationRepositoryPort>,
    auth: Arc<dyn AuthPort>,
}

impl RegisterAccount {
    pub fn new(repository: Arc<dyn ApplicationRepositoryPort>, auth: Arc<dyn AuthPort>) -> Self {
        Self { repository, auth }
    }

    pub async fn execute(&self, draft: &RegistrationDraft) -> Result<UserId, RegistrationError> {
        let email = draft
            .account
            .email
            .as_deref()
            .filter(|e| is_valid_email(e))
            .ok_or(RegistrationError::InvalidEmail)?;
        let password = draft
            .account
            .password
            .as_deref()
            .filter(|p| p.len() >= MIN_PASSWORD_LEN)
            .ok_or(RegistrationError::WeakPassword)?;

        if draft.class == MembershipClass::Corporate {
            if let Some(domain) = draft.account.email_domain() {
                if self.repository.account_exists(&domain).await? {
                    return Err(RegistrationError::DuplicateOrganization(domain));
                }
            }
        }

        let user = self.auth.create_account(email, password).await?;
        debug!(%user, "auth account created");

        let profile = clean_value(json!({
            "email": email,
            "firstName": draft.account.first_name,
            "surname": draft.account.surname,
            "membershipClass": draft.class,
            "organizationType": draft.organization_type,
        }))
        .unwrap_or_else(|| json!({}));

        match self.repository.create_member_profile(&user, profile).await {
            Ok(()) => Ok(user),
            Err(persist_error) => {
                if let Err(rollback_error) = self.auth.delete_account(&user).await {
                    warn!(%user, error = %rollback_error, "rollback of auth account failed");
                }
                Err(persist_error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::usecases::submission::tests_support::{corporate_draft, MockRepository};
    use fase_core::ports::errors::AuthError;

    #[derive(Default)]
    struct MockAuthPort {
        created: Mutex<Vec<String>>,
        deleted: Mutex<Vec<UserId>>,
        fail_delete: bool,
    }

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn create_account(&self, email: &str, _password: &str) -> Result<UserId, AuthError> {
            self.created.lock().unwrap().push(email.to_string());
            Ok(UserId::from("new-user"))
        }

        async fn delete_account(&self, user: &UserId) -> Result<(), AuthError> {
            if self.fail_delete {
                return Err(AuthError::Transport("unreachable".to_string()));
            }
            self.deleted.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn update_password(
            &self,
            _user: &UserId,
            _new_password: &str,
        ) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_creates_account_and_profile() {
        let repository = Arc::new(MockRepository::default());
        let auth = Arc::new(MockAuthPort::default());
        let use_case = RegisterAccount::new(repository.clone(), auth.clone());

        let user = use_case.execute(&corporate_draft()).await.unwrap();
        assert_eq!(user.as_str(), "new-user");
        assert_eq!(auth.created.lock().unwrap().len(), 1);

        let profiles = repository.profiles.lock().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].1["email"], "jane@example-mga.com");
    }

    #[tokio::test]
    async fn test_duplicate_domain_blocks_before_account_creation() {
        let repository =
            Arc::new(MockRepository::default().with_existing_domain("example-mga.com"));
        let auth = Arc::new(MockAuthPort::default());
        let use_case = RegisterAccount::new(repository, auth.clone());

        let err = use_case.execute(&corporate_draft()).await.unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::DuplicateOrganization(domain) if domain == "example-mga.com"
        ));
        assert!(auth.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_profile_write_failure_rolls_back_auth_account() {
        let repository = Arc::new(MockRepository::default().failing_profile_writes());
        let auth = Arc::new(MockAuthPort::default());
        let use_case = RegisterAccount::new(repository, auth.clone());

        let err = use_case.execute(&corporate_draft()).await.unwrap_err();
        assert!(matches!(err, RegistrationError::Persistence(_)));
        assert_eq!(auth.deleted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_rollback_is_swallowed() {
        let repository = Arc::new(MockRepository::default().failing_profile_writes());
        let auth = Arc::new(MockAuthPort {
            fail_delete: true,
            ..Default::default()
        });
        let use_case = RegisterAccount::new(repository, auth);

        // Still the persistence error, not the rollback error.
        let err = use_case.execute(&corporate_draft()).await.unwrap_err();
        assert!(matches!(err, RegistrationError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_weak_password_rejected_locally() {
        let repository = Arc::new(MockRepository::default());
        let auth = Arc::new(MockAuthPort::default());
        let use_case = RegisterAccount::new(repository, auth.clone());

        let mut draft = corporate_draft();
        draft.account.password = Some("short".to_string());
        let err = use_case.execute(&draft).await.unwrap_err();
        assert!(matches!(err, RegistrationError::WeakPassword));
        assert!(auth.created.lock().unwrap().is_empty());
    }
}
