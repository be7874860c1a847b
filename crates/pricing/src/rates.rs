//! Static conversion rates and converted prices.
//!
//! Rates are fixed-point with four decimal places so authored values such as
//! `0.0096` convert exactly (`4200 * 0.0096 = 40.32`).

use serde::{Deserialize, Serialize};

use mellylue_core::{DomainError, DomainResult, ValueObject};

use crate::currency::Currency;

/// Fixed-point scale of a [`Rate`].
const RATE_SCALE: u64 = 10_000;
const RATE_DECIMALS: u32 = 4;

/// Units of the target currency per one CVE, scaled by 10 000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rate(u64);

impl ValueObject for Rate {}

impl Rate {
    pub const ONE: Rate = Rate(RATE_SCALE);

    /// Exact rate from a scaled integer (`96` is `0.0096`).
    pub const fn from_scaled(scaled: u64) -> Self {
        Self(scaled)
    }

    /// Rate from a decimal value, rounded to four decimal places.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::validation(format!(
                "conversion rate must be a positive number, got {value}"
            )));
        }
        let scaled = (value * RATE_SCALE as f64).round();
        if scaled < 1.0 {
            return Err(DomainError::validation(format!(
                "conversion rate {value} is below the 0.0001 resolution"
            )));
        }
        if scaled > u64::MAX as f64 {
            return Err(DomainError::validation(format!(
                "conversion rate {value} is too large"
            )));
        }
        Ok(Self(scaled as u64))
    }

    pub fn scaled(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / RATE_SCALE as f64
    }
}

/// A converted amount, in the smallest displayed unit of its currency
/// (whole CVE, hundredths of USD/KRW).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub minor_units: u64,
    pub currency: Currency,
}

impl ValueObject for Price {}

impl Price {
    fn unit(&self) -> u64 {
        10u64.pow(self.currency.display_decimals())
    }

    pub fn integer_part(&self) -> u64 {
        self.minor_units / self.unit()
    }

    pub fn fraction_part(&self) -> u64 {
        self.minor_units % self.unit()
    }

    /// Plain decimal rendering without grouping or symbol (`"40.32"`).
    pub fn to_decimal_string(&self) -> String {
        let decimals = self.currency.display_decimals() as usize;
        if decimals == 0 {
            self.integer_part().to_string()
        } else {
            format!(
                "{}.{:0width$}",
                self.integer_part(),
                self.fraction_part(),
                width = decimals
            )
        }
    }
}

/// Conversion rates from CVE to every display currency.
///
/// The defaults are the storefront's demo values. The KRW rate (13.5) is a
/// placeholder, not a market rate; override it through configuration rather
/// than editing the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRates", into = "RawRates")]
pub struct RateTable {
    krw: Rate,
    usd: Rate,
}

impl ValueObject for RateTable {}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            krw: Rate::from_scaled(135_000),
            usd: Rate::from_scaled(96),
        }
    }
}

impl RateTable {
    pub fn new(krw: Rate, usd: Rate) -> Self {
        Self { krw, usd }
    }

    pub fn rate(&self, currency: Currency) -> Rate {
        match currency {
            Currency::Cve => Rate::ONE,
            Currency::Krw => self.krw,
            Currency::Usd => self.usd,
        }
    }

    /// `base_price * rate[currency]`, rounded half up to the currency's
    /// display decimals.
    pub fn convert(&self, base_price: u64, currency: Currency) -> Price {
        let exact = u128::from(base_price) * u128::from(self.rate(currency).scaled());
        let decimals = currency.display_decimals();
        let divisor = 10u128.pow(RATE_DECIMALS - decimals);
        let rounded = (exact + divisor / 2) / divisor;
        let minor_units = u64::try_from(rounded).unwrap_or_else(|_| {
            tracing::warn!(base_price, currency = %currency, "converted price overflows; clamping");
            u64::MAX
        });
        Price {
            minor_units,
            currency,
        }
    }
}

/// Wire form of a [`RateTable`]: decimal rates keyed by currency code.
/// Omitted rates take their default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRates {
    #[serde(rename = "CVE", default = "one")]
    pub cve: f64,
    #[serde(rename = "KRW", default = "default_krw")]
    pub krw: f64,
    #[serde(rename = "USD", default = "default_usd")]
    pub usd: f64,
}

fn one() -> f64 {
    1.0
}

fn default_krw() -> f64 {
    RateTable::default().krw.as_f64()
}

fn default_usd() -> f64 {
    RateTable::default().usd.as_f64()
}

impl TryFrom<RawRates> for RateTable {
    type Error = DomainError;

    fn try_from(raw: RawRates) -> Result<Self, Self::Error> {
        if Rate::from_f64(raw.cve)? != Rate::ONE {
            return Err(DomainError::validation(format!(
                "CVE is the base currency; its rate must be 1, got {}",
                raw.cve
            )));
        }
        Ok(Self {
            krw: Rate::from_f64(raw.krw)?,
            usd: Rate::from_f64(raw.usd)?,
        })
    }
}

impl From<RateTable> for RawRates {
    fn from(table: RateTable) -> Self {
        Self {
            cve: 1.0,
            krw: table.krw.as_f64(),
            usd: table.usd.as_f64(),
        }
    }
}
