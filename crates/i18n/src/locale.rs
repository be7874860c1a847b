//! Supported locales.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use mellylue_core::{DomainError, ValueObject};

/// A supported UI locale. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    /// Portuguese (Portugal conventions); the storefront opens in it.
    #[default]
    Pt,
    En,
}

impl ValueObject for Locale {}

impl Locale {
    /// Selector order: Portuguese first, then English, then Korean.
    pub const ALL: [Locale; 3] = [Locale::Pt, Locale::En, Locale::Ko];

    /// Locale used when a translation is missing.
    pub const FALLBACK: Locale = Locale::En;

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// BCP 47 tag whose number/currency conventions the locale uses.
    pub fn formatting_tag(&self) -> &'static str {
        match self {
            Locale::Ko => "ko-KR",
            Locale::Pt => "pt-PT",
            Locale::En => "en-US",
        }
    }

    /// Name of the language in the language itself, as shown in the picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Ko => "한국어",
            Locale::Pt => "Português",
            Locale::En => "English",
        }
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko" => Ok(Locale::Ko),
            "pt" => Ok(Locale::Pt),
            "en" => Ok(Locale::En),
            other => Err(DomainError::validation(format!(
                "unsupported locale '{other}' (expected ko, pt or en)"
            ))),
        }
    }
}
