//! Locale currency formatting.
//!
//! The number itself (grouping, separators, minimum grouping) comes from
//! ICU decimal formatting for the locale's formatting tag. Only the
//! narrow-symbol placement is decided here:
//!
//! | locale | USD       | KRW            | CVE        |
//! |--------|-----------|----------------|------------|
//! | en-US  | `$40.32`  | `₩56,700.00`   | `CVE 4,200`|
//! | ko-KR  | `$40.32`  | `₩56,700.00`   | `CVE 4,200`|
//! | pt-PT  | `40,32 $` | `56 700,00 ₩`  | `4200 CVE` |
//!
//! Spaces in the output are U+00A0 (no-break space).

use icu::decimal::DecimalFormatter;
use icu::decimal::input::Decimal;

use mellylue_core::{DomainError, DomainResult};
use mellylue_i18n::Locale;

use crate::rates::Price;

const NBSP: char = '\u{a0}';

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    /// After the number, separated by a no-break space.
    Suffix,
}

impl SymbolPosition {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En | Locale::Ko => SymbolPosition::Prefix,
            Locale::Pt => SymbolPosition::Suffix,
        }
    }
}

/// Currency formatter bound to one storefront locale.
pub struct PriceFormatter {
    locale: Locale,
    decimal: DecimalFormatter,
}

impl PriceFormatter {
    pub fn try_new(locale: Locale) -> DomainResult<Self> {
        let tag: icu::locale::Locale = locale.formatting_tag().parse().map_err(|e| {
            DomainError::validation(format!("bad formatting tag for {locale}: {e}"))
        })?;
        let decimal = DecimalFormatter::try_new(tag.into(), Default::default()).map_err(|e| {
            DomainError::validation(format!("no number format data for {locale}: {e}"))
        })?;
        Ok(Self { locale, decimal })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The bare number, without symbol.
    pub fn format_number(&self, price: &Price) -> String {
        let scaled = i64::try_from(price.minor_units).unwrap_or(i64::MAX);
        let mut decimal = Decimal::from(scaled);
        decimal.multiply_pow10(-(price.currency.display_decimals() as i16));
        self.decimal.format(&decimal).to_string()
    }

    pub fn format(&self, price: &Price) -> String {
        place_symbol(&self.format_number(price), price, self.locale)
    }
}

fn place_symbol(number: &str, price: &Price, locale: Locale) -> String {
    let symbol = price.currency.symbol();
    match SymbolPosition::for_locale(locale) {
        SymbolPosition::Prefix if price.currency.narrow_symbol().is_some() => {
            format!("{symbol}{number}")
        }
        // Alphabetic codes never touch the digits.
        SymbolPosition::Prefix => format!("{symbol}{NBSP}{number}"),
        SymbolPosition::Suffix => format!("{number}{NBSP}{symbol}"),
    }
}

/// Format a converted price for `locale`.
///
/// Falls back to an ungrouped `.`-decimal number if the locale has no
/// number data; [`check_locales`] rules that out at startup.
pub fn format_price(price: &Price, locale: Locale) -> String {
    match PriceFormatter::try_new(locale) {
        Ok(formatter) => formatter.format(price),
        Err(e) => {
            tracing::warn!(locale = %locale, error = %e, "formatting price without locale data");
            place_symbol(&price.to_decimal_string(), price, locale)
        }
    }
}

/// Fail early if any storefront locale lacks number formatting data.
pub fn check_locales() -> DomainResult<()> {
    for locale in Locale::ALL {
        PriceFormatter::try_new(locale)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use crate::rates::RateTable;

    fn fmt(base: u64, currency: Currency, locale: Locale) -> String {
        format_price(&RateTable::default().convert(base, currency), locale)
            .replace(NBSP, " ")
    }

    #[test]
    fn english_formats() {
        assert_eq!(fmt(4200, Currency::Cve, Locale::En), "CVE 4,200");
        assert_eq!(fmt(4200, Currency::Usd, Locale::En), "$40.32");
        assert_eq!(fmt(4200, Currency::Krw, Locale::En), "₩56,700.00");
        assert_eq!(fmt(600, Currency::Cve, Locale::En), "CVE 600");
    }

    #[test]
    fn korean_formats() {
        assert_eq!(fmt(2800, Currency::Krw, Locale::Ko), "₩37,800.00");
        assert_eq!(fmt(2300, Currency::Usd, Locale::Ko), "$22.08");
    }

    #[test]
    fn portuguese_formats() {
        assert_eq!(fmt(4200, Currency::Cve, Locale::Pt), "4200 CVE");
        assert_eq!(fmt(4200, Currency::Usd, Locale::Pt), "40,32 $");
        assert_eq!(fmt(4200, Currency::Krw, Locale::Pt), "56 700,00 ₩");
        assert_eq!(fmt(1_234_567, Currency::Cve, Locale::Pt), "1 234 567 CVE");
    }

    #[test]
    fn every_locale_has_number_data() {
        check_locales().unwrap();
        for locale in Locale::ALL {
            assert_eq!(PriceFormatter::try_new(locale).unwrap().locale(), locale);
        }
    }

    #[test]
    fn cve_has_no_fraction_digits_in_any_locale() {
        for locale in Locale::ALL {
            let text = fmt(4200, Currency::Cve, locale);
            assert!(!text.contains(".0") && !text.contains(",0"), "{locale}: {text}");
        }
    }

    #[test]
    fn grouping_follows_locale_minimums() {
        let number = |minor_units, locale| {
            PriceFormatter::try_new(locale)
                .unwrap()
                .format_number(&Price { minor_units, currency: Currency::Cve })
                .replace(NBSP, " ")
        };
        assert_eq!(number(999, Locale::En), "999");
        assert_eq!(number(1000, Locale::En), "1,000");
        assert_eq!(number(1_234_567, Locale::Ko), "1,234,567");
        assert_eq!(number(9999, Locale::Pt), "9999");
        assert_eq!(number(10_000, Locale::Pt), "10 000");
    }

    #[test]
    fn trailing_zero_fractions_are_kept() {
        let formatter = PriceFormatter::try_new(Locale::En).unwrap();
        let price = Price { minor_units: 100, currency: Currency::Usd };
        assert_eq!(formatter.format(&price), "$1.00");
    }
}
