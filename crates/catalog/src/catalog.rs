//! The product list and category filtering.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use mellylue_core::{DomainError, DomainResult, Entity};
use mellylue_i18n::{Locale, Localized};

use crate::category::{Category, CategoryFilter};
use crate::product::{Badge, Product, ProductId};

/// Ordered, validated list of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking authored data once.
    ///
    /// Rejects empty or malformed ids, duplicate ids, blank names and
    /// products without an `en` description (the fallback target).
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            let id = product.id();
            mellylue_core::validate_slug("ProductId", id.as_str())
                .map_err(|e| DomainError::invariant(e.to_string()))?;
            if !seen.insert(id.clone()) {
                return Err(DomainError::invariant(format!("duplicate product id '{id}'")));
            }
            if product.name().trim().is_empty() {
                return Err(DomainError::invariant(format!("product '{id}' has no name")));
            }
            if !product.description().has(Locale::FALLBACK) {
                return Err(DomainError::invariant(format!(
                    "product '{id}' has no en description"
                )));
            }
        }
        tracing::debug!(products = products.len(), "catalog validated");
        Ok(Self { products })
    }

    /// The storefront's featured products.
    pub fn sample() -> Self {
        let products = vec![
            Product::new(
                ProductId::from_static("rb-barrier-cream"),
                "Real Barrier Extreme Cream",
                Localized::new()
                    .with(Locale::Ko, "손상 피부 장벽 케어의 스테디셀러")
                    .with(Locale::Pt, "Clássico para barreira cutânea fragilizada")
                    .with(Locale::En, "Steady seller for damaged skin barrier"),
                4200,
                Category::Cream,
                [Badge::Bestseller, Badge::Clean],
            ),
            Product::new(
                ProductId::from_static("roundlab-dokdo-toner"),
                "Round Lab 1025 Dokdo Toner",
                Localized::new()
                    .with(Locale::Ko, "미네랄 밸런싱 수분 토너")
                    .with(Locale::Pt, "Tónico hidratante com minerais")
                    .with(Locale::En, "Mineral‑balanced hydrating toner"),
                2800,
                Category::Toner,
                [Badge::Bestseller],
            ),
            Product::new(
                ProductId::from_static("abib-gummy-sheet"),
                "Abib Gummy Sheet Mask",
                Localized::new()
                    .with(Locale::Ko, "찰떡 시트 밀착 보습")
                    .with(Locale::Pt, "Máscara com aderência tipo mochi")
                    .with(Locale::En, "Mochi‑fit sheet hydration"),
                600,
                Category::Mask,
                [Badge::New],
            ),
            Product::new(
                ProductId::from_static("cosrx-aha-bha"),
                "COSRX AHA/BHA Toner",
                Localized::new()
                    .with(Locale::Ko, "부드러운 각질·피지 케어")
                    .with(Locale::Pt, "Esfoliação suave e sebo care")
                    .with(Locale::En, "Gentle exfoliation & sebum care"),
                2300,
                Category::Toner,
                [Badge::Clean],
            ),
        ];
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        filter_by_category(&self.products, filter)
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = DomainError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Catalog::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}

/// All products for `all`; otherwise exactly the products of that category.
/// Original order is preserved.
pub fn filter_by_category(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| filter.matches(p.category()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id().to_string()).collect()
    }

    fn product(id: &'static str, category: Category) -> Product {
        Product::new(
            ProductId::from_static(id),
            "Name",
            Localized::new().with(Locale::En, "desc"),
            100,
            category,
            [],
        )
    }

    #[test]
    fn sample_catalog_is_valid() {
        let sample = Catalog::sample();
        assert_eq!(sample.len(), 4);
        let validated = Catalog::new(sample.products().to_vec()).unwrap();
        assert_eq!(validated, sample);
    }

    #[test]
    fn all_returns_everything_in_order() {
        let catalog = Catalog::sample();
        assert_eq!(
            ids(&catalog.filter(CategoryFilter::All)),
            vec![
                "rb-barrier-cream",
                "roundlab-dokdo-toner",
                "abib-gummy-sheet",
                "cosrx-aha-bha"
            ]
        );
    }

    #[test]
    fn toner_returns_both_toners() {
        let catalog = Catalog::sample();
        assert_eq!(
            ids(&catalog.filter(Category::Toner.into())),
            vec!["roundlab-dokdo-toner", "cosrx-aha-bha"]
        );
    }

    #[test]
    fn empty_categories_yield_nothing() {
        let catalog = Catalog::sample();
        assert!(catalog.filter(Category::Serum.into()).is_empty());
        assert!(catalog.filter(Category::Sunscreen.into()).is_empty());
        assert!(catalog.filter(Category::Cleanser.into()).is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            product("a", Category::Toner),
            product("a", Category::Mask),
        ])
        .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn rejects_missing_english_description() {
        let p = Product::new(
            ProductId::from_static("ko-only"),
            "Name",
            Localized::new().with(Locale::Ko, "설명"),
            100,
            Category::Serum,
            [],
        );
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(Catalog::new(vec![product("Bad Id", Category::Toner)]).is_err());
        assert!(Catalog::new(vec![product("", Category::Toner)]).is_err());
    }

    #[test]
    fn deserializing_validates() {
        let json = r#"[
            {"id":"x","name":"X","description":{"en":"x"},"price_base_units":1,"category":"toner","tags":[]},
            {"id":"x","name":"Y","description":{"en":"y"},"price_base_units":2,"category":"mask","tags":["new"]}
        ]"#;
        assert!(serde_json::from_str::<Catalog>(json).is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn category() -> impl Strategy<Value = Category> {
            prop::sample::select(Category::ALL.to_vec())
        }

        proptest! {
            /// Property: filtering keeps exactly the matching products, in order.
            #[test]
            fn filter_is_an_order_preserving_subsequence(
                categories in prop::collection::vec(category(), 0..20),
                active in category(),
            ) {
                let products: Vec<Product> = categories
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        Product::new(
                            format!("p-{i}").parse().unwrap(),
                            "Name",
                            Localized::new().with(Locale::En, "desc"),
                            100,
                            *c,
                            [],
                        )
                    })
                    .collect();

                let filtered = filter_by_category(&products, CategoryFilter::Only(active));
                let expected: Vec<&Product> = products.iter().filter(|p| p.category() == active).collect();
                prop_assert_eq!(filtered, expected);

                let all = filter_by_category(&products, CategoryFilter::All);
                prop_assert_eq!(all.len(), products.len());
            }
        }
    }
}
