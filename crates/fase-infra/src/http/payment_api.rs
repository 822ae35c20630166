use async_trait::async_trait;
use tracing::debug;

use fase_core::ports::errors::PaymentError;
use fase_core::ports::{OrderRequest, PaymentOrder, PaymentPort, PaymentSubscription};

use super::error_body;

/// Client for the payment backend fronting the provider's order and
/// subscription APIs.
pub struct PaymentApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PaymentApiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PaymentPort for PaymentApiClient {
    async fn create_order(&self, request: &OrderRequest) -> Result<PaymentOrder, PaymentError> {
        let response = self
            .client
            .post(self.endpoint("/api/create-paypal-order"))
            .json(request)
            .send()
            .await
            .map_err(from_reqwest)?;
        if !response.status().is_success() {
            return Err(PaymentError::Provider(error_body(response).await));
        }

        let order: PaymentOrder = response.json().await.map_err(from_reqwest)?;
        if order.approval_url.trim().is_empty() {
            return Err(PaymentError::MissingApprovalUrl);
        }
        debug!(order_id = %order.order_id, "payment order created");
        Ok(order)
    }

    async fn create_subscription(
        &self,
        request: &OrderRequest,
    ) -> Result<PaymentSubscription, PaymentError> {
        let response = self
            .client
            .post(self.endpoint("/api/create-paypal-subscription"))
            .json(request)
            .send()
            .await
            .map_err(from_reqwest)?;
        if !response.status().is_success() {
            return Err(PaymentError::Provider(error_body(response).await));
        }

        let subscription: PaymentSubscription =
            response.json().await.map_err(from_reqwest)?;
        if subscription.approval_url.trim().is_empty() {
            return Err(PaymentError::MissingApprovalUrl);
        }
        debug!(subscription_id = %subscription.subscription_id, "subscription created");
        Ok(subscription)
    }
}

fn from_reqwest(error: reqwest::Error) -> PaymentError {
    PaymentError::Transport(error.to_string())
}
