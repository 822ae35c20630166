//! # fase-core
//!
//! Core domain models and business logic for the FASE membership platform.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the registration draft, the fee calculator, the step wizard and its validators,
//! submission-record shaping, and the port traits external collaborators implement.

// Public module exports
pub mod fees;
pub mod ids;
pub mod ports;
pub mod registration;
pub mod search;
pub mod shaping;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use ids::{ApplicationId, IdempotencyToken, UserId};
pub use registration::{
    Address, Currency, GrossWrittenPremium, MembershipClass, MembershipType, OrganizationType,
    RegistrationDraft, TeamMember, TeamRoster,
};
pub use wizard::{Field, Step, StepId, Wizard, WizardContext};
