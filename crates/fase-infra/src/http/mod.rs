//! HTTP adapters behind the collaborator ports.

mod auth_api;
mod document_db;
mod email_api;
mod payment_api;

pub use auth_api::AuthApiClient;
pub use document_db::DocumentDbClient;
pub use email_api::EmailApiClient;
pub use payment_api::PaymentApiClient;

/// Body snippet carried into provider-rejection errors, capped so a large
/// HTML error page does not end up in the logs verbatim.
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let snippet: String = body.chars().take(200).collect();
    if snippet.is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, snippet)
    }
}
