//! The registration draft accumulated across wizard steps.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::organization::{
    CarrierProfile, MembershipClass, MembershipType, OrganizationType, PortfolioMix,
    ProviderProfile,
};
use super::premium::GrossWrittenPremium;
use super::team::TeamRoster;

/// Identity and credential fields collected at the account step.
///
/// Written once when the user completes that step; the password is only ever
/// handed to the auth collaborator and never enters the shaped record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl AccountDetails {
    /// "First Surname", as far as the parts exist.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.surname.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{} {}", first.trim(), last.trim())),
            (Some(first), None) => Some(first.trim().to_string()),
            (None, Some(last)) => Some(last.trim().to_string()),
            (None, None) => None,
        }
    }

    /// Domain part of the entered email, lowercased.
    pub fn email_domain(&self) -> Option<String> {
        self.email
            .as_deref()
            .and_then(|e| e.rsplit_once('@'))
            .map(|(_, domain)| domain.trim().to_lowercase())
            .filter(|d| !d.is_empty())
    }
}

/// A structured postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// Whether all fields the address step requires are populated.
    pub fn is_complete(&self) -> bool {
        [&self.line1, &self.city, &self.postcode, &self.country]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganisationDetails {
    pub name: Option<String>,
    pub trading_name: Option<String>,
    /// Reference with the home regulator (e.g. an FCA firm reference number).
    pub regulator_reference: Option<String>,
}

/// Consent flags, each gating a specific step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consents {
    pub privacy: bool,
    pub data_processing: bool,
    pub code_of_conduct: bool,
}

impl Consents {
    pub fn all_granted() -> Self {
        Self {
            privacy: true,
            data_processing: true,
            code_of_conduct: true,
        }
    }
}

/// Optional organization demographics collected on a non-required step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub employee_count: Option<u32>,
    pub founded_year: Option<u32>,
    pub countries_of_operation: Vec<String>,
}

/// The mutable, in-memory record accumulated across wizard steps.
///
/// Owned exclusively by one [`crate::wizard::Wizard`] for the duration of a
/// session; nothing is persisted until an explicit submission action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub class: MembershipClass,
    /// Selected on the synthetic first step, or preselected via the
    /// wizard context.
    pub organization_type: Option<OrganizationType>,

    pub account: AccountDetails,
    pub organisation: OrganisationDetails,

    pub registered_address: Address,
    pub invoicing_address: Address,
    /// When set, the invoicing address aliases the registered address.
    pub invoicing_same_as_registered: bool,

    pub team: TeamRoster,

    pub premium: GrossWrittenPremium,
    /// Member of another recognized regional association (fee discount).
    pub member_of_other_association: bool,
    pub other_associations: BTreeSet<String>,

    pub portfolio: PortfolioMix,
    pub carrier: CarrierProfile,
    pub provider: ProviderProfile,

    pub consents: Consents,
    pub demographics: Demographics,
    pub referral_source: Option<String>,
}

impl RegistrationDraft {
    pub fn new(class: MembershipClass, organization_type: Option<OrganizationType>) -> Self {
        Self {
            class,
            organization_type,
            account: AccountDetails::default(),
            organisation: OrganisationDetails::default(),
            registered_address: Address::default(),
            invoicing_address: Address::default(),
            invoicing_same_as_registered: false,
            team: TeamRoster::default(),
            premium: GrossWrittenPremium::default(),
            member_of_other_association: false,
            other_associations: BTreeSet::new(),
            portfolio: PortfolioMix::default(),
            carrier: CarrierProfile::default(),
            provider: ProviderProfile::default(),
            consents: Consents::default(),
            demographics: Demographics::default(),
            referral_source: None,
        }
    }

    /// Fully resolved membership discriminant, once the organization type is
    /// known (always `Some` for individual membership).
    pub fn membership(&self) -> Option<MembershipType> {
        match self.class {
            MembershipClass::Individual => Some(MembershipType::Individual),
            MembershipClass::Corporate => {
                self.organization_type.map(MembershipType::Corporate)
            }
        }
    }

    /// The address invoices should be sent to, honoring the alias flag.
    pub fn effective_invoicing_address(&self) -> &Address {
        if self.invoicing_same_as_registered {
            &self.registered_address
        } else {
            &self.invoicing_address
        }
    }
}
