//! Membership fee calculation.
//!
//! MGA fees are a step function of the EUR-converted gross written premium;
//! carrier and service-provider fees are flat. The exchange rates here are
//! fixed approximations used for display and banding only; settlement uses
//! live rates fetched by the payment backend.

use crate::registration::{Currency, MembershipType, OrganizationType, RegistrationDraft};

/// Premium band for MGA fee selection, by EUR-equivalent GWP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Band {
    UpTo10M,
    From10To20M,
    From20To50M,
    From50To100M,
    From100To500M,
    Above500M,
}

impl Band {
    pub fn index(&self) -> usize {
        match self {
            Band::UpTo10M => 0,
            Band::From10To20M => 1,
            Band::From20To50M => 2,
            Band::From50To100M => 3,
            Band::From100To500M => 4,
            Band::Above500M => 5,
        }
    }
}

/// Approximate EUR value of one unit of `currency`. Display-only.
pub fn eur_rate(currency: Currency) -> f64 {
    match currency {
        Currency::Eur => 1.0,
        Currency::Gbp => 1.17,
        Currency::Usd => 0.92,
        Currency::Chf => 1.05,
        Currency::Sek => 0.088,
        Currency::Nok => 0.086,
        Currency::Dkk => 0.134,
        Currency::Pln => 0.23,
    }
}

/// Convert an amount to EUR at the fixed approximate rate.
pub fn convert_to_eur(amount: f64, currency: Currency) -> f64 {
    amount * eur_rate(currency)
}

/// Classify an EUR-equivalent premium into its band.
pub fn band_for(premium_eur: f64) -> Band {
    if premium_eur < BAND_THRESHOLDS_EUR[0] {
        Band::UpTo10M
    } else if premium_eur < BAND_THRESHOLDS_EUR[1] {
        Band::From10To20M
    } else if premium_eur < BAND_THRESHOLDS_EUR[2] {
        Band::From20To50M
    } else if premium_eur < BAND_THRESHOLDS_EUR[3] {
        Band::From50To100M
    } else if premium_eur < BAND_THRESHOLDS_EUR[4] {
        Band::From100To500M
    } else {
        Band::Above500M
    }
}

/// Annual membership fee in whole EUR.
///
/// A premium total of exactly zero yields the fixed default fee rather than
/// the lowest band's fee, so live editing of an incomplete form never shows a
/// banded amount. The discount multiplies by 0.8 and rounds half-up.
pub fn fee(
    organization: OrganizationType,
    premium: u64,
    currency: Currency,
    has_discount: bool,
) -> u64 {
    let base = if premium == 0 {
        ZERO_PREMIUM_FEE_EUR
    } else {
        match organization {
            OrganizationType::Mga => {
                let premium_eur = convert_to_eur(premium as f64, currency);
                MGA_BAND_FEES_EUR[band_for(premium_eur).index()]
            }
            OrganizationType::Carrier => CARRIER_FEE_EUR,
            OrganizationType::ServiceProvider => PROVIDER_FEE_EUR,
        }
    };
    if has_discount {
        apply_discount(base)
    } else {
        base
    }
}

/// Fee for the whole draft, covering the individual flat fee as well.
pub fn membership_fee(draft: &RegistrationDraft) -> Option<u64> {
    match draft.membership()? {
        MembershipType::Individual => Some(INDIVIDUAL_FEE_EUR),
        MembershipType::Corporate(organization) => Some(fee(
            organization,
            draft.premium.total(),
            draft.premium.currency,
            draft.member_of_other_association,
        )),
    }
}

/// 20% association discount, rounded half-up on the final value.
fn apply_discount(fee_eur: u64) -> u64 {
    (fee_eur * 8 + 5) / 10
}

/// Fee shown while no premium has been entered.
pub const ZERO_PREMIUM_FEE_EUR: u64 = 900;

/// Flat annual fee for individual members.
pub const INDIVIDUAL_FEE_EUR: u64 = 500;

const CARRIER_FEE_EUR: u64 = 4_000;
const PROVIDER_FEE_EUR: u64 = 2_500;

/// MGA fee per band, strictly increasing with band index.
const MGA_BAND_FEES_EUR: [u64; 6] = [1_000, 1_500, 2_500, 3_500, 5_000, 7_500];

const BAND_THRESHOLDS_EUR: [f64; 5] =
    [10_000_000.0, 20_000_000.0, 50_000_000.0, 100_000_000.0, 500_000_000.0];
