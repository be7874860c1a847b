//! Product catalog.
//!
//! Products are authored once at startup and never mutated. This crate holds
//! the records, the category taxonomy used for filtering, and the startup
//! validation of authored data (no IO, no rendering).

pub mod catalog;
pub mod category;
pub mod product;

pub use catalog::{Catalog, filter_by_category};
pub use category::{Category, CategoryFilter};
pub use product::{Badge, Product, ProductId};
