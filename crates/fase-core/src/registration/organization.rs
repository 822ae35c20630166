//! Organization and membership variants.
//!
//! All branching on these is done with exhaustive matches; the draft never
//! stores membership or organization kinds as raw strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Organization type recognized by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    /// Managing General Agent, subject to premium-based fee banding.
    Mga,
    /// Insurance carrier; flat membership fee.
    Carrier,
    /// Service provider to the MGA market; flat membership fee.
    ServiceProvider,
}

impl OrganizationType {
    pub fn label(&self) -> &'static str {
        match self {
            OrganizationType::Mga => "MGA",
            OrganizationType::Carrier => "Carrier",
            OrganizationType::ServiceProvider => "Service provider",
        }
    }
}

/// Individual vs corporate membership, chosen before the wizard starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipClass {
    Individual,
    #[default]
    Corporate,
}

/// Fully resolved membership discriminant once the organization type is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipType {
    Individual,
    Corporate(OrganizationType),
}

/// Role a carrier plays in the delegated-underwriting market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierRole {
    Insurer,
    Reinsurer,
    LloydsSyndicate,
    CaptiveManager,
}

impl CarrierRole {
    /// The delegating roles must also declare delegation countries and a
    /// fronting arrangement.
    pub fn delegates_underwriting(&self) -> bool {
        matches!(
            self,
            CarrierRole::Insurer | CarrierRole::Reinsurer | CarrierRole::LloydsSyndicate
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontingArrangement {
    None,
    Partial,
    Full,
}

/// Carrier-specific block of the draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarrierProfile {
    pub role: Option<CarrierRole>,
    /// Countries in which underwriting authority is delegated to MGAs.
    pub delegation_countries: Vec<String>,
    pub fronting: Option<FrontingArrangement>,
}

/// Service-provider category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderCategory {
    ClaimsManagement,
    Actuarial,
    LegalServices,
    Technology,
    Compliance,
    Other,
}

/// Service-provider-specific block of the draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub categories: std::collections::BTreeSet<ProviderCategory>,
    /// Required whenever `Other` is among the selected categories.
    pub other_description: Option<String>,
}

/// Line of business written by an MGA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineOfBusiness {
    Property,
    Casualty,
    Motor,
    Marine,
    AccidentAndHealth,
    ProfessionalLines,
    Cyber,
    Other,
}

/// MGA portfolio mix: percentage of GWP per line of business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMix {
    shares: BTreeMap<LineOfBusiness, u8>,
}

impl PortfolioMix {
    /// Set the percentage share for one line. A zero share removes the line.
    pub fn set_share(&mut self, line: LineOfBusiness, percent: u8) {
        if percent == 0 {
            self.shares.remove(&line);
        } else {
            self.shares.insert(line, percent);
        }
    }

    pub fn share(&self, line: LineOfBusiness) -> u8 {
        self.shares.get(&line).copied().unwrap_or(0)
    }

    pub fn total_percent(&self) -> u32 {
        self.shares.values().map(|p| u32::from(*p)).sum()
    }

    /// Whether any line of business carries a non-zero share.
    pub fn has_allocation(&self) -> bool {
        !self.shares.is_empty()
    }

    pub fn shares(&self) -> impl Iterator<Item = (LineOfBusiness, u8)> + '_ {
        self.shares.iter().map(|(line, pct)| (*line, *pct))
    }
}
