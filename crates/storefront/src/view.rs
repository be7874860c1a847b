//! Presentation state resolver: selection in, render-ready model out.

use serde::Serialize;

use mellylue_catalog::{Catalog, CategoryFilter};
use mellylue_core::Entity;
use mellylue_i18n::{Locale, LocaleBundle, bundle};
use mellylue_pricing::{Currency, RateTable, convert_and_format};

use crate::contact::{ContactForm, ContactInfo, Link, STORES};
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleOption {
    pub locale: Locale,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyOption {
    pub currency: Currency,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub badges: Vec<BadgeView>,
    pub price: String,
    pub price_from: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreCard {
    pub name: &'static str,
    pub address: &'static str,
    pub hours: String,
    pub map_url: &'static str,
}

/// Product-line claims shown beside the hero image. Brand copy, not localized.
pub const HERO_BADGE: &str = "ERIS\u{2011}ready · Clean · Cruelty\u{2011}free";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroLinks {
    pub primary: Link,
    pub whatsapp: Link,
    pub phone: Link,
}

/// Everything a page render needs, fully localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub selection: Selection,
    pub text: &'static LocaleBundle,
    pub locales: Vec<LocaleOption>,
    pub currencies: Vec<CurrencyOption>,
    pub categories: Vec<CategoryOption>,
    pub active_category_label: &'static str,
    pub products: Vec<ProductCard>,
    pub hero: HeroLinks,
    pub hero_badge: &'static str,
    pub stores: Vec<StoreCard>,
    pub form: ContactForm,
    pub contact_links: Vec<Link>,
    pub footer: String,
}

impl ViewModel {
    /// Derive the view for `selection`. Pure: the same inputs always give
    /// the same model, so it may be recomputed on every render.
    pub fn resolve(
        selection: &Selection,
        catalog: &Catalog,
        rates: &RateTable,
        contact: &ContactInfo,
        year: i32,
    ) -> Self {
        let locale = selection.locale;
        let text = bundle(locale);

        let products = catalog
            .filter(selection.active_category)
            .into_iter()
            .map(|p| ProductCard {
                id: p.id().to_string(),
                name: p.name().to_string(),
                description: p.describe(locale).to_string(),
                badges: p
                    .tags()
                    .map(|b| BadgeView {
                        key: b.key(),
                        label: b.label(text),
                    })
                    .collect(),
                price: convert_and_format(rates, p.price_base_units(), selection.currency, locale),
                price_from: text.price_from,
            })
            .collect();

        Self {
            selection: *selection,
            text,
            locales: Locale::ALL
                .into_iter()
                .map(|l| LocaleOption {
                    locale: l,
                    label: l.native_name(),
                    selected: l == locale,
                })
                .collect(),
            currencies: Currency::ALL
                .into_iter()
                .map(|c| CurrencyOption {
                    currency: c,
                    selected: c == selection.currency,
                })
                .collect(),
            categories: CategoryFilter::ALL
                .into_iter()
                .map(|f| CategoryOption {
                    filter: f,
                    label: f.label(text),
                    active: f == selection.active_category,
                })
                .collect(),
            active_category_label: selection.active_category.label(text),
            products,
            hero: HeroLinks {
                primary: Link {
                    label: text.shop_now.to_string(),
                    href: "#contact".to_string(),
                    external: false,
                },
                whatsapp: Link {
                    label: "WhatsApp".to_string(),
                    href: contact.whatsapp_url(),
                    external: true,
                },
                phone: Link {
                    label: contact.phone_display.clone(),
                    href: contact.tel_url(),
                    external: false,
                },
            },
            hero_badge: HERO_BADGE,
            stores: STORES
                .iter()
                .map(|s| StoreCard {
                    name: s.label(text),
                    address: s.address,
                    hours: format!("{}: {}", text.hours, s.hours),
                    map_url: s.map_url,
                })
                .collect(),
            form: ContactForm::new(contact, text),
            contact_links: contact.links(),
            footer: text.footer_text(year),
        }
    }
}
