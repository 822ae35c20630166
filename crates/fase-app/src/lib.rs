//! # fase-app
//!
//! Application use cases for the FASE membership platform: the terminal
//! submission paths of the registration wizard, account registration, and
//! password reset. Every external collaborator is reached through a
//! `fase-core` port, so each use case is testable with in-memory mocks.

pub mod error;
pub mod usecases;

pub use error::{RegistrationError, ResetError, SubmissionError};
