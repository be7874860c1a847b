//! Per-record translations with `en` fallback.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A string translated into some (not necessarily all) locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized(BTreeMap<Locale, String>);

impl Localized {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, locale: Locale, text: impl Into<String>) -> Self {
        self.0.insert(locale, text.into());
        self
    }

    /// The exact translation for `locale`, without fallback.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.0.get(&locale).map(String::as_str)
    }

    pub fn has(&self, locale: Locale) -> bool {
        self.0.contains_key(&locale)
    }

    /// Text for `locale`, or the `en` text when `locale` has none.
    ///
    /// This is the only fallback in the storefront. A description shown in
    /// English on a Korean page is this rule at work, not a lookup bug.
    /// Returns `""` if `en` is missing too; catalog validation rejects such
    /// records at startup.
    pub fn resolve(&self, locale: Locale) -> &str {
        if let Some(text) = self.get(locale) {
            return text;
        }
        match self.get(Locale::FALLBACK) {
            Some(text) => {
                tracing::debug!(locale = %locale, "translation missing; using en");
                text
            }
            None => {
                tracing::warn!(locale = %locale, "translation missing with no en fallback");
                ""
            }
        }
    }
}

impl FromIterator<(Locale, String)> for Localized {
    fn from_iter<I: IntoIterator<Item = (Locale, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toner() -> Localized {
        Localized::new()
            .with(Locale::Ko, "미네랄 밸런싱 수분 토너")
            .with(Locale::Pt, "Tónico hidratante com minerais")
            .with(Locale::En, "Mineral-balanced hydrating toner")
    }

    #[test]
    fn resolves_present_locale() {
        assert_eq!(toner().resolve(Locale::Ko), "미네랄 밸런싱 수분 토너");
        assert_eq!(toner().resolve(Locale::Pt), "Tónico hidratante com minerais");
    }

    #[test]
    fn falls_back_to_english_when_locale_missing() {
        let only_en = Localized::new().with(Locale::En, "Gentle exfoliation");
        assert_eq!(only_en.resolve(Locale::Ko), "Gentle exfoliation");
        assert_eq!(only_en.resolve(Locale::Pt), "Gentle exfoliation");
    }

    #[test]
    fn empty_when_english_missing_too() {
        let only_ko = Localized::new().with(Locale::Ko, "클렌저");
        assert_eq!(only_ko.resolve(Locale::Pt), "");
        assert_eq!(only_ko.resolve(Locale::Ko), "클렌저");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn locale() -> impl Strategy<Value = Locale> {
            prop::sample::select(Locale::ALL.to_vec())
        }

        proptest! {
            /// Property: resolve returns the exact entry when present, else the en entry.
            #[test]
            fn resolve_follows_fallback_rule(
                ko in proptest::option::of("[a-z]{1,12}"),
                pt in proptest::option::of("[a-z]{1,12}"),
                en in "[a-z]{1,12}",
                active in locale(),
            ) {
                let mut text = Localized::new().with(Locale::En, en.clone());
                if let Some(ko) = &ko {
                    text = text.with(Locale::Ko, ko.clone());
                }
                if let Some(pt) = &pt {
                    text = text.with(Locale::Pt, pt.clone());
                }

                let expected = match text.get(active) {
                    Some(s) => s.to_string(),
                    None => en.clone(),
                };
                prop_assert_eq!(text.resolve(active), expected.as_str());
            }
        }
    }
}
