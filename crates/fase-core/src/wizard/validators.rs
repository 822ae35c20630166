//! Per-field and per-step validation predicates.
//!
//! Validity is re-derived from the draft on every call; nothing is cached.
//! The dataset is dozens of fields, so recomputing the predicates per
//! keystroke is acceptable.

use serde::{Deserialize, Serialize};

use super::step::StepId;
use crate::registration::{ProviderCategory, RegistrationDraft};

/// Fields the validators can flag. Presentation code keys touched-state and
/// error highlighting off these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    OrganisationType,
    FirstName,
    Surname,
    Email,
    Password,
    OrganisationName,
    RegulatorReference,
    RegisteredLine1,
    RegisteredCity,
    RegisteredPostcode,
    RegisteredCountry,
    InvoicingLine1,
    InvoicingCity,
    InvoicingPostcode,
    InvoicingCountry,
    TeamMembers,
    GrossWrittenPremium,
    Portfolio,
    CarrierRole,
    DelegationCountries,
    Fronting,
    ProviderCategories,
    ProviderOtherDescription,
    PrivacyConsent,
    DataProcessingConsent,
    CodeOfConductConsent,
}

/// Minimum password length accepted at the account step.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Syntactic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.len() < 3 || local.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// All required-but-invalid fields on `step`, given the current draft.
pub fn invalid_fields(step: StepId, draft: &RegistrationDraft) -> Vec<Field> {
    let mut invalid = Vec::new();
    match step {
        StepId::OrganisationType => {
            if draft.organization_type.is_none() {
                invalid.push(Field::OrganisationType);
            }
        }
        StepId::Account => {
            if !present(&draft.account.first_name) {
                invalid.push(Field::FirstName);
            }
            if !present(&draft.account.surname) {
                invalid.push(Field::Surname);
            }
            if !draft.account.email.as_deref().is_some_and(is_valid_email) {
                invalid.push(Field::Email);
            }
            let password_ok = draft
                .account
                .password
                .as_deref()
                .is_some_and(|p| p.len() >= MIN_PASSWORD_LEN);
            if !password_ok {
                invalid.push(Field::Password);
            }
        }
        StepId::OrganisationDetails => {
            if !present(&draft.organisation.name) {
                invalid.push(Field::OrganisationName);
            }
            if !present(&draft.organisation.regulator_reference) {
                invalid.push(Field::RegulatorReference);
            }
        }
        StepId::Addresses => {
            let registered = &draft.registered_address;
            if !present(&registered.line1) {
                invalid.push(Field::RegisteredLine1);
            }
            if !present(&registered.city) {
                invalid.push(Field::RegisteredCity);
            }
            if !present(&registered.postcode) {
                invalid.push(Field::RegisteredPostcode);
            }
            if !present(&registered.country) {
                invalid.push(Field::RegisteredCountry);
            }
            if !draft.invoicing_same_as_registered {
                let invoicing = &draft.invoicing_address;
                if !present(&invoicing.line1) {
                    invalid.push(Field::InvoicingLine1);
                }
                if !present(&invoicing.city) {
                    invalid.push(Field::InvoicingCity);
                }
                if !present(&invoicing.postcode) {
                    invalid.push(Field::InvoicingPostcode);
                }
                if !present(&invoicing.country) {
                    invalid.push(Field::InvoicingCountry);
                }
            }
        }
        StepId::TeamMembers => {
            let roster_ok = !draft.team.is_empty()
                && draft.team.has_single_primary()
                && draft.team.members().iter().all(|m| {
                    !m.name.trim().is_empty()
                        && !m.job_title.trim().is_empty()
                        && is_valid_email(&m.email)
                });
            if !roster_ok {
                invalid.push(Field::TeamMembers);
            }
        }
        StepId::Premiums => {
            if !draft.premium.is_entered() {
                invalid.push(Field::GrossWrittenPremium);
            }
        }
        StepId::Portfolio => {
            if !draft.portfolio.has_allocation() {
                invalid.push(Field::Portfolio);
            }
        }
        StepId::CarrierProfile => match draft.carrier.role {
            None => invalid.push(Field::CarrierRole),
            Some(role) if role.delegates_underwriting() => {
                if draft.carrier.delegation_countries.is_empty() {
                    invalid.push(Field::DelegationCountries);
                }
                if draft.carrier.fronting.is_none() {
                    invalid.push(Field::Fronting);
                }
            }
            Some(_) => {}
        },
        StepId::ProviderProfile => {
            if draft.provider.categories.is_empty() {
                invalid.push(Field::ProviderCategories);
            } else if draft.provider.categories.contains(&ProviderCategory::Other)
                && !present(&draft.provider.other_description)
            {
                invalid.push(Field::ProviderOtherDescription);
            }
        }
        StepId::Consents => {
            if !draft.consents.privacy {
                invalid.push(Field::PrivacyConsent);
            }
            if !draft.consents.data_processing {
                invalid.push(Field::DataProcessingConsent);
            }
        }
        StepId::Review => {
            if !draft.consents.code_of_conduct {
                invalid.push(Field::CodeOfConductConsent);
            }
        }
        // No required fields on these.
        StepId::Associations | StepId::Demographics | StepId::Referral => {}
    }
    invalid
}

/// Whether the wizard may advance past `step`.
pub fn is_step_valid(step: StepId, draft: &RegistrationDraft) -> bool {
    invalid_fields(step, draft).is_empty()
}
