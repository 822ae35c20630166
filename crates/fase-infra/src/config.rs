//! Configuration loading.
//!
//! Settings come from an optional TOML file plus `FASE_`-prefixed environment
//! variables; the environment wins. Loading is pure data mapping, defaults
//! live on the types and nothing here validates business rules.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// A hosted collaborator reachable over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSettings {
    pub base_url: String,
    /// Routes orders through the provider's sandbox.
    #[serde(default)]
    pub test_payment: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub document_db: EndpointSettings,
    pub auth: EndpointSettings,
    pub payment: PaymentSettings,
    pub email: EndpointSettings,
    /// Page the password-reset email links to; the token rides in its query
    /// string.
    pub reset_base_url: String,
}

/// Load settings from `path` (if given) overlaid with `FASE_*` environment
/// variables, e.g. `FASE_PAYMENT__TEST_PAYMENT=true`.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path));
    }
    let config = builder
        .add_source(Environment::with_prefix("FASE").separator("__"))
        .build()?;
    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_from_toml_file() {
        let dir = std::env::temp_dir().join("fase-settings-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            r#"
            reset_base_url = "https://fase.example/reset-password"

            [document_db]
            base_url = "https://db.example"
            api_key = "db-key"

            [auth]
            base_url = "https://auth.example"
            api_key = "auth-key"

            [payment]
            base_url = "https://pay.example"
            test_payment = true

            [email]
            base_url = "https://mail.example"
            "#,
        )
        .unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.document_db.base_url, "https://db.example");
        assert_eq!(settings.auth.api_key.as_deref(), Some("auth-key"));
        assert!(settings.payment.test_payment);
        assert_eq!(settings.email.api_key, None);
        assert_eq!(settings.reset_base_url, "https://fase.example/reset-password");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let dir = std::env::temp_dir().join("fase-settings-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("incomplete.toml");
        std::fs::write(
            &path,
            r#"
            reset_base_url = "https://fase.example/reset-password"
            "#,
        )
        .unwrap();

        assert!(load_settings(Some(&path)).is_err());
    }
}
