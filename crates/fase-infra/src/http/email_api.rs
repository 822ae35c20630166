use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use fase_core::ports::errors::EmailError;
use fase_core::ports::{ApplicationSubmittedEmail, EmailPort, InvoiceEmail};

use super::error_body;

/// Client for the email-dispatch backend. The calls only enqueue; delivery
/// happens asynchronously behind the endpoint.
pub struct EmailApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl EmailApiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<(), EmailError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(from_reqwest)?;
        if !response.status().is_success() {
            return Err(EmailError::Dispatch(error_body(response).await));
        }
        debug!(path, "email enqueued");
        Ok(())
    }
}

#[async_trait]
impl EmailPort for EmailApiClient {
    async fn send_application_submitted(
        &self,
        email: &ApplicationSubmittedEmail,
    ) -> Result<(), EmailError> {
        let body = serde_json::to_value(email)
            .map_err(|e| EmailError::Dispatch(e.to_string()))?;
        self.post("/api/submit-application", &body).await
    }

    async fn send_invoice(&self, email: &InvoiceEmail) -> Result<(), EmailError> {
        let body = serde_json::to_value(email)
            .map_err(|e| EmailError::Dispatch(e.to_string()))?;
        self.post("/api/send-invoice", &body).await
    }

    async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), EmailError> {
        let body = json!({ "to": to, "resetLink": reset_link });
        self.post("/api/send-password-reset", &body).await
    }
}

fn from_reqwest(error: reqwest::Error) -> EmailError {
    if error.is_timeout() {
        EmailError::Timeout
    } else {
        EmailError::Transport(error.to_string())
    }
}
