//! `mellylue-storefront`
//!
//! **Responsibility:** the Mellylue K-Beauty landing page.
//!
//! This crate provides:
//! - Session selection state (locale, currency, category, menu) and its reducer
//! - The presentation resolver turning a selection into a localized view model
//! - Contact channels, pickup stores and the `mailto:` contact form
//! - Configuration, a static HTML renderer and (on wasm32) a Leptos frontend

pub mod config;
pub mod contact;
pub mod render;
pub mod selection;
pub mod storefront;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::{ConfigError, StorefrontConfig};
pub use contact::{ContactForm, ContactInfo, Link, STORES, Store};
pub use render::{render_page, write_site};
pub use selection::{MenuState, Selection, SelectionAction};
pub use storefront::Storefront;
pub use view::ViewModel;
