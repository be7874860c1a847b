//! `mellylue-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the storefront
//! crates (no rendering, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod reducer;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::validate_slug;
pub use reducer::Reducer;
pub use value_object::ValueObject;
