use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::PaymentError;
use crate::ids::UserId;
use crate::registration::OrganizationType;

/// Request body for a one-off payment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub organization_name: String,
    pub organization_type: Option<OrganizationType>,
    pub gross_written_premiums: u64,
    pub user_email: String,
    pub user_id: UserId,
    /// Routes the order through the provider's sandbox.
    pub test_payment: bool,
}

/// A created order; the browser is redirected to `approval_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    pub approval_url: String,
    /// Amount the provider will settle, in whole EUR.
    pub amount: u64,
}

/// A created recurring subscription. Product and plan creation are
/// preconditions handled by the payment backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSubscription {
    pub subscription_id: String,
    pub approval_url: String,
    pub plan_id: String,
}

/// Payment-provider backend (PayPal order/subscription endpoints).
#[async_trait]
pub trait PaymentPort: Send + Sync {
    async fn create_order(&self, request: &OrderRequest) -> Result<PaymentOrder, PaymentError>;

    async fn create_subscription(
        &self,
        request: &OrderRequest,
    ) -> Result<PaymentSubscription, PaymentError>;
}
