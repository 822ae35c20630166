use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use fase_core::ids::UserId;
use fase_core::ports::errors::AuthError;
use fase_core::ports::AuthPort;

/// Client for the hosted auth service's identity REST API. The API key is a
/// query parameter on every call; error codes come back as a symbolic
/// `error.message` string in the body.
pub struct AuthApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct AccountResponse {
    #[serde(rename = "localId")]
    local_id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl AuthApiClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn post(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> Result<reqwest::Response, AuthError> {
        let response = self
            .client
            .post(format!("{}/v1/accounts:{}", self.base_url, action))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;
        if response.status().is_success() {
            return Ok(response);
        }
        Err(map_rejection(response).await)
    }
}

#[async_trait]
impl AuthPort for AuthApiClient {
    async fn create_account(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        let response = self
            .post(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": false,
                }),
            )
            .await?;
        let account: AccountResponse = response.json().await.map_err(from_reqwest)?;
        debug!(user = %account.local_id, "auth account created");
        Ok(UserId::from_string(account.local_id))
    }

    async fn delete_account(&self, user: &UserId) -> Result<(), AuthError> {
        self.post("delete", json!({ "localId": user })).await?;
        Ok(())
    }

    async fn update_password(&self, user: &UserId, new_password: &str) -> Result<(), AuthError> {
        self.post(
            "update",
            json!({ "localId": user, "password": new_password }),
        )
        .await?;
        Ok(())
    }
}

fn from_reqwest(error: reqwest::Error) -> AuthError {
    AuthError::Transport(error.to_string())
}

async fn map_rejection(response: reqwest::Response) -> AuthError {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => status.to_string(),
    };
    match message.as_str() {
        "EMAIL_EXISTS" => AuthError::EmailInUse,
        "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => AuthError::AccountNotFound,
        _ if status.is_server_error() => AuthError::Transport(message),
        _ => AuthError::Rejected(message),
    }
}
