//! Application context: validated data plus configuration.

use mellylue_catalog::Catalog;
use mellylue_core::DomainResult;
use mellylue_i18n::check_key_parity;
use mellylue_pricing::{RateTable, check_locales};

use crate::config::StorefrontConfig;
use crate::contact::ContactInfo;
use crate::selection::Selection;
use crate::view::ViewModel;

/// Everything needed to resolve views, checked once at startup.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    rates: RateTable,
    contact: ContactInfo,
    initial: Selection,
}

impl Storefront {
    pub fn new(config: &StorefrontConfig) -> DomainResult<Self> {
        Self::with_catalog(config, Catalog::sample())
    }

    pub fn with_catalog(config: &StorefrontConfig, catalog: Catalog) -> DomainResult<Self> {
        check_key_parity()?;
        check_locales()?;
        let catalog = Catalog::new(catalog.into())?;
        tracing::info!(
            products = catalog.len(),
            locale = %config.default_locale,
            currency = %config.default_currency,
            "storefront ready"
        );
        Ok(Self {
            catalog,
            rates: config.rates.clone(),
            contact: config.contact.clone(),
            initial: config.initial_selection(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Selection a new session starts with.
    pub fn initial_selection(&self) -> Selection {
        self.initial
    }

    pub fn view(&self, selection: &Selection, year: i32) -> ViewModel {
        ViewModel::resolve(selection, &self.catalog, &self.rates, &self.contact, year)
    }
}
