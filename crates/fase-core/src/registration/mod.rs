//! Registration domain: the draft accumulated across wizard steps and the
//! value objects it is built from.

mod draft;
mod organization;
mod premium;
mod team;

pub use draft::{
    AccountDetails, Address, Consents, Demographics, OrganisationDetails, RegistrationDraft,
};
pub use organization::{
    CarrierProfile, CarrierRole, FrontingArrangement, LineOfBusiness, MembershipClass,
    MembershipType, OrganizationType, PortfolioMix, ProviderCategory, ProviderProfile,
};
pub use premium::{Currency, GrossWrittenPremium};
pub use team::{TeamMember, TeamRoster};
