use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use mellylue_core::{Entity, slug_id};
use mellylue_i18n::{Locale, LocaleBundle, Localized};

use crate::category::Category;

slug_id!(
    /// Product identifier (a stable, human-readable slug).
    pub struct ProductId,
    "ProductId"
);

/// Badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Bestseller,
    New,
    Clean,
}

impl Badge {
    pub fn key(&self) -> &'static str {
        match self {
            Badge::Bestseller => "bestseller",
            Badge::New => "new",
            Badge::Clean => "clean",
        }
    }

    pub fn label<'a>(&self, bundle: &'a LocaleBundle) -> &'a str {
        match self {
            Badge::Bestseller => bundle.badges.bestseller,
            Badge::New => bundle.badges.new,
            Badge::Clean => bundle.badges.clean,
        }
    }
}

/// Immutable catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: Localized,
    /// Price in whole CVE, the currency of record.
    price_base_units: u64,
    category: Category,
    tags: BTreeSet<Badge>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: Localized,
        price_base_units: u64,
        category: Category,
        tags: impl IntoIterator<Item = Badge>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            price_base_units,
            category,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &Localized {
        &self.description
    }

    /// Description in `locale`, falling back to `en`.
    pub fn describe(&self, locale: Locale) -> &str {
        self.description.resolve(locale)
    }

    pub fn price_base_units(&self) -> u64 {
        self.price_base_units
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Badges in display order.
    pub fn tags(&self) -> impl Iterator<Item = Badge> + '_ {
        self.tags.iter().copied()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
