use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use fase_core::ids::{ApplicationId, UserId};
use fase_core::ports::errors::RepositoryError;
use fase_core::ports::ApplicationRepositoryPort;

use super::error_body;

/// Client for the hosted document database's REST surface. Records are
/// create-only; there is no update path.
pub struct DocumentDbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct CreatedResponse {
    id: String,
}

#[derive(Deserialize)]
struct ExistsResponse {
    exists: bool,
}

impl DocumentDbClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }
        builder
    }
}

#[async_trait]
impl ApplicationRepositoryPort for DocumentDbClient {
    async fn create_application(
        &self,
        owner: &UserId,
        record: Value,
    ) -> Result<ApplicationId, RepositoryError> {
        let body = json!({ "ownerId": owner, "record": record });
        let response = self
            .request(reqwest::Method::POST, "/api/applications")
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;
        if !response.status().is_success() {
            return Err(map_status(response).await);
        }

        let created: CreatedResponse = response.json().await.map_err(from_reqwest)?;
        debug!(application_id = %created.id, "application record created");
        Ok(ApplicationId::from_string(created.id))
    }

    async fn create_member_profile(
        &self,
        owner: &UserId,
        record: Value,
    ) -> Result<(), RepositoryError> {
        let body = json!({ "ownerId": owner, "profile": record });
        let response = self
            .request(reqwest::Method::POST, "/api/member-profiles")
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;
        if !response.status().is_success() {
            return Err(map_status(response).await);
        }
        Ok(())
    }

    async fn account_exists(&self, domain: &str) -> Result<bool, RepositoryError> {
        let response = self
            .request(reqwest::Method::GET, "/api/accounts/exists")
            .query(&[("domain", domain)])
            .send()
            .await
            .map_err(from_reqwest)?;
        if !response.status().is_success() {
            return Err(map_status(response).await);
        }

        let exists: ExistsResponse = response.json().await.map_err(from_reqwest)?;
        Ok(exists.exists)
    }
}

fn from_reqwest(error: reqwest::Error) -> RepositoryError {
    RepositoryError::Storage(error.to_string())
}

async fn map_status(response: reqwest::Response) -> RepositoryError {
    if response.status() == StatusCode::NOT_FOUND {
        RepositoryError::NotFound
    } else {
        RepositoryError::Storage(error_body(response).await)
    }
}
