//! # fase-infra
//!
//! Infrastructure adapters for the FASE membership platform: reqwest clients
//! for the document database, the hosted auth service, the payment backend
//! and the email dispatcher, plus configuration loading.

pub mod config;
pub mod http;
pub mod reset_store;

pub use config::{load_settings, Settings, SettingsError};
pub use http::{AuthApiClient, DocumentDbClient, EmailApiClient, PaymentApiClient};
pub use reset_store::InMemoryResetTokenStore;
