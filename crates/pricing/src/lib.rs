//! Price conversion and locale-aware currency formatting.
//!
//! Catalog prices are authored in CVE base units. Display prices are
//! converted through a static [`RateTable`] and formatted with ICU number
//! conventions for the active locale.

pub mod currency;
pub mod format;
pub mod rates;

pub use currency::Currency;
pub use format::{PriceFormatter, SymbolPosition, check_locales, format_price};
pub use rates::{Price, Rate, RateTable};

use mellylue_i18n::Locale;

/// Convert `base_price` (CVE units) into `currency` and format it for `locale`.
pub fn convert_and_format(
    rates: &RateTable,
    base_price: u64,
    currency: Currency,
    locale: Locale,
) -> String {
    format_price(&rates.convert(base_price, currency), locale)
}
