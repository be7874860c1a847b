//! Storefront configuration.
//!
//! Every field has a default, so the storefront runs with no configuration
//! at all. The render binary reads a JSON file named by `MELLYLUE_CONFIG`
//! and lets `MELLYLUE_OUT_DIR` override the output directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mellylue_catalog::CategoryFilter;
use mellylue_i18n::Locale;
use mellylue_pricing::{Currency, RateTable};

use crate::contact::ContactInfo;
use crate::selection::Selection;

pub const CONFIG_ENV: &str = "MELLYLUE_CONFIG";
pub const OUT_DIR_ENV: &str = "MELLYLUE_OUT_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid storefront config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub default_locale: Locale,
    pub default_currency: Currency,
    pub default_category: CategoryFilter,
    /// Conversion rates from CVE. The KRW default is a demo placeholder.
    pub rates: RateTable,
    pub contact: ContactInfo,
    pub out_dir: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            default_currency: Currency::default(),
            default_category: CategoryFilter::default(),
            rates: RateTable::default(),
            contact: ContactInfo::default(),
            out_dir: PathBuf::from("dist"),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => {
                tracing::info!(path = %path, "loading storefront config");
                Self::load(Path::new(&path))?
            }
            None => {
                tracing::info!("{CONFIG_ENV} not set; using built-in defaults");
                Self::default()
            }
        };
        if let Some(out_dir) = lookup(OUT_DIR_ENV) {
            config.out_dir = PathBuf::from(out_dir);
        }
        Ok(config)
    }

    pub fn initial_selection(&self) -> Selection {
        Selection::new(
            self.default_locale,
            self.default_currency,
            self.default_category,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mellylue_catalog::Category;
    use mellylue_pricing::Rate;

    #[test]
    fn empty_json_is_all_defaults() {
        let config = StorefrontConfig::from_json("{}").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.initial_selection(), Selection::default());
    }

    #[test]
    fn overrides_rates_and_defaults() {
        let config = StorefrontConfig::from_json(
            r#"{
                "default_locale": "en",
                "default_currency": "USD",
                "default_category": "toner",
                "rates": {"USD": 0.0097, "KRW": 13.5}
            }"#,
        )
        .unwrap();
        let s = config.initial_selection();
        assert_eq!(s.locale, Locale::En);
        assert_eq!(s.currency, Currency::Usd);
        assert_eq!(s.active_category, CategoryFilter::Only(Category::Toner));
        assert_eq!(config.rates.rate(Currency::Usd), Rate::from_scaled(97));
    }

    #[test]
    fn partial_rate_override_keeps_other_defaults() {
        let config = StorefrontConfig::from_json(r#"{"rates": {"USD": 0.01}}"#).unwrap();
        assert_eq!(config.rates.rate(Currency::Usd), Rate::from_scaled(100));
        assert_eq!(
            config.rates.rate(Currency::Krw),
            RateTable::default().rate(Currency::Krw)
        );
        assert_eq!(config.initial_selection().currency, Currency::Cve);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"default_locale": "fr"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"rates": {"USD": -1, "KRW": 13.5}}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn lookup_without_config_uses_defaults_and_out_dir_override() {
        let config = StorefrontConfig::from_lookup(|key| {
            (key == OUT_DIR_ENV).then(|| "public".to_string())
        })
        .unwrap();
        assert_eq!(config.out_dir, PathBuf::from("public"));
        assert_eq!(config.rates, RateTable::default());
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let err = StorefrontConfig::from_lookup(|key| {
            (key == CONFIG_ENV).then(|| "/nonexistent/mellylue.json".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
