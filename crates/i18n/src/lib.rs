//! Localization for the storefront.
//!
//! Three closed locales (`ko`, `pt`, `en`), one statically authored
//! [`LocaleBundle`] per locale, and per-record translations with a single
//! `en` fallback rule (see [`Localized::resolve`]).

pub mod bundle;
pub mod locale;
pub mod localized;

pub use bundle::{BadgeLabels, CategoryLabels, LocaleBundle, bundle, bundle_keys, check_key_parity};
pub use locale::Locale;
pub use localized::Localized;
