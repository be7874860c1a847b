//! Display currencies.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use mellylue_core::{DomainError, ValueObject};

/// A display currency. CVE is the currency of record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Cve,
    Krw,
    Usd,
}

impl ValueObject for Currency {}

impl Currency {
    /// Selector order.
    pub const ALL: [Currency; 3] = [Currency::Cve, Currency::Krw, Currency::Usd];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Cve => "CVE",
            Currency::Krw => "KRW",
            Currency::Usd => "USD",
        }
    }

    /// Fraction digits shown on the storefront: none for CVE, two otherwise.
    pub fn display_decimals(&self) -> u32 {
        match self {
            Currency::Cve => 0,
            Currency::Krw | Currency::Usd => 2,
        }
    }

    /// Narrow symbol, when the currency has one.
    pub fn narrow_symbol(&self) -> Option<&'static str> {
        match self {
            Currency::Cve => None,
            Currency::Krw => Some("₩"),
            Currency::Usd => Some("$"),
        }
    }

    /// Narrow symbol, or the ISO code when there is none.
    pub fn symbol(&self) -> &'static str {
        self.narrow_symbol().unwrap_or_else(|| self.code())
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CVE" => Ok(Currency::Cve),
            "KRW" => Ok(Currency::Krw),
            "USD" => Ok(Currency::Usd),
            other => Err(DomainError::validation(format!(
                "unsupported currency '{other}' (expected CVE, KRW or USD)"
            ))),
        }
    }
}
