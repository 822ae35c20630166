//! Gross written premium as entered in the wizard.

use serde::{Deserialize, Serialize};

/// Currencies the premium volume can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Gbp,
    Usd,
    Chf,
    Sek,
    Nok,
    Dkk,
    Pln,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
            Currency::Chf => "CHF",
            Currency::Sek => "SEK",
            Currency::Nok => "NOK",
            Currency::Dkk => "DKK",
            Currency::Pln => "PLN",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Eur
    }
}

/// Annual gross written premium, entered as three magnitude components.
///
/// `None` means the user never populated the component; a component the user
/// cleared again also goes back to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrossWrittenPremium {
    pub billions: Option<u64>,
    pub millions: Option<u64>,
    pub thousands: Option<u64>,
    pub currency: Currency,
}

impl GrossWrittenPremium {
    /// Whether any magnitude component has been populated.
    pub fn is_entered(&self) -> bool {
        self.billions.is_some() || self.millions.is_some() || self.thousands.is_some()
    }

    /// Combined total in whole currency units.
    pub fn total(&self) -> u64 {
        self.billions.unwrap_or(0) * 1_000_000_000
            + self.millions.unwrap_or(0) * 1_000_000
            + self.thousands.unwrap_or(0) * 1_000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_combines_components() {
        let gwp = GrossWrittenPremium {
            billions: Some(1),
            millions: Some(250),
            thousands: Some(500),
            currency: Currency::Eur,
        };
        assert_eq!(gwp.total(), 1_250_500_000);
    }

    #[test]
    fn test_unentered_premium() {
        let gwp = GrossWrittenPremium::default();
        assert!(!gwp.is_entered());
        assert_eq!(gwp.total(), 0);
    }

    #[test]
    fn test_entered_zero_is_still_entered() {
        let gwp = GrossWrittenPremium {
            millions: Some(0),
            ..Default::default()
        };
        assert!(gwp.is_entered());
        assert_eq!(gwp.total(), 0);
    }
}
