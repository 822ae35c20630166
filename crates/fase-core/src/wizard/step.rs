//! Step definitions and the four static step lists.

use serde::{Deserialize, Serialize};

use crate::registration::{MembershipType, OrganizationType};

/// Symbolic step identifier. Flow rules (notably the demographics skip) are
/// keyed off these ids, never off list positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    /// Synthetic selection step, omitted when the organization type is
    /// preselected via the wizard context.
    OrganisationType,
    Account,
    OrganisationDetails,
    Addresses,
    TeamMembers,
    Premiums,
    Portfolio,
    CarrierProfile,
    ProviderProfile,
    Associations,
    Consents,
    Demographics,
    Referral,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub title: &'static str,
    pub required: bool,
}

const fn required(id: StepId, title: &'static str) -> Step {
    Step {
        id,
        title,
        required: true,
    }
}

const fn optional(id: StepId, title: &'static str) -> Step {
    Step {
        id,
        title,
        required: false,
    }
}

const ORGANISATION_TYPE: Step = required(StepId::OrganisationType, "Organisation type");
const ACCOUNT: Step = required(StepId::Account, "Your account");
const ORGANISATION_DETAILS: Step = required(StepId::OrganisationDetails, "Organisation details");
const ADDRESSES: Step = required(StepId::Addresses, "Addresses");
const TEAM_MEMBERS: Step = required(StepId::TeamMembers, "Your team");
const PREMIUMS: Step = required(StepId::Premiums, "Gross written premiums");
const PORTFOLIO: Step = required(StepId::Portfolio, "Portfolio");
const CARRIER_PROFILE: Step = required(StepId::CarrierProfile, "Carrier profile");
const PROVIDER_PROFILE: Step = required(StepId::ProviderProfile, "Services");
const ASSOCIATIONS: Step = optional(StepId::Associations, "Other memberships");
const CONSENTS: Step = required(StepId::Consents, "Privacy and data processing");
const DEMOGRAPHICS: Step = optional(StepId::Demographics, "About your organisation");
const REFERRAL: Step = optional(StepId::Referral, "How did you hear about us");
const REVIEW: Step = required(StepId::Review, "Review and submit");

/// Step list for a resolved membership type.
///
/// `organization_preselected` drops the synthetic selection step from the
/// corporate lists.
pub fn steps_for(membership: MembershipType, organization_preselected: bool) -> Vec<Step> {
    match membership {
        MembershipType::Individual => vec![
            ACCOUNT,
            ADDRESSES,
            CONSENTS,
            DEMOGRAPHICS,
            REFERRAL,
            REVIEW,
        ],
        MembershipType::Corporate(organization) => {
            let mut steps = Vec::with_capacity(12);
            if !organization_preselected {
                steps.push(ORGANISATION_TYPE);
            }
            steps.extend([ACCOUNT, ORGANISATION_DETAILS, ADDRESSES, TEAM_MEMBERS]);
            match organization {
                OrganizationType::Mga => steps.extend([PREMIUMS, PORTFOLIO]),
                OrganizationType::Carrier => steps.push(CARRIER_PROFILE),
                OrganizationType::ServiceProvider => steps.push(PROVIDER_PROFILE),
            }
            steps.extend([ASSOCIATIONS, CONSENTS, DEMOGRAPHICS, REFERRAL, REVIEW]);
            steps
        }
    }
}

/// Corporate prologue shown before an organization type has been selected.
/// Only the selection step is reachable; the tail is rebuilt once a type is
/// chosen.
pub fn unresolved_corporate_steps() -> Vec<Step> {
    vec![ORGANISATION_TYPE, ACCOUNT]
}
