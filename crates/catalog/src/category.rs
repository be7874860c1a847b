//! Category taxonomy.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use mellylue_core::{DomainError, ValueObject};
use mellylue_i18n::LocaleBundle;

/// A real product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cleanser,
    Toner,
    Serum,
    Cream,
    Sunscreen,
    Mask,
}

impl ValueObject for Category {}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cleanser,
        Category::Toner,
        Category::Serum,
        Category::Cream,
        Category::Sunscreen,
        Category::Mask,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Cleanser => "cleanser",
            Category::Toner => "toner",
            Category::Serum => "serum",
            Category::Cream => "cream",
            Category::Sunscreen => "sunscreen",
            Category::Mask => "mask",
        }
    }

    pub fn label<'a>(&self, bundle: &'a LocaleBundle) -> &'a str {
        let labels = &bundle.categories;
        match self {
            Category::Cleanser => labels.cleanser,
            Category::Toner => labels.toner,
            Category::Serum => labels.serum,
            Category::Cream => labels.cream,
            Category::Sunscreen => labels.sunscreen,
            Category::Mask => labels.mask,
        }
    }
}

/// Active category selection: the synthetic `all` wildcard or one real
/// category. No product can carry `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl ValueObject for CategoryFilter {}

impl CategoryFilter {
    /// Popover order: `all` first, then every real category.
    pub const ALL: [CategoryFilter; 7] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Cleanser),
        CategoryFilter::Only(Category::Toner),
        CategoryFilter::Only(Category::Serum),
        CategoryFilter::Only(Category::Cream),
        CategoryFilter::Only(Category::Sunscreen),
        CategoryFilter::Only(Category::Mask),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.key(),
        }
    }

    pub fn label<'a>(&self, bundle: &'a LocaleBundle) -> &'a str {
        match self {
            CategoryFilter::All => bundle.categories.all,
            CategoryFilter::Only(category) => category.label(bundle),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(active) => *active == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::ALL
            .into_iter()
            .find(|filter| filter.key() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category '{s}'")))
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.key().to_string()
    }
}
