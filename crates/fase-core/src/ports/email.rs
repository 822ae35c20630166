use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::EmailError;
use crate::ids::ApplicationId;

/// Confirmation email sent after an application is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmittedEmail {
    pub application_id: ApplicationId,
    pub to: String,
    pub applicant_name: String,
    pub organisation_name: Option<String>,
}

/// Invoice email carrying the computed membership fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceEmail {
    pub application_id: ApplicationId,
    pub to: String,
    pub organisation_name: Option<String>,
    pub amount_eur: u64,
}

/// Outbound email dispatcher. Delivery itself is asynchronous backend-side;
/// these calls only enqueue.
#[async_trait]
pub trait EmailPort: Send + Sync {
    async fn send_application_submitted(
        &self,
        email: &ApplicationSubmittedEmail,
    ) -> Result<(), EmailError>;

    async fn send_invoice(&self, email: &InvoiceEmail) -> Result<(), EmailError>;

    async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), EmailError>;
}
