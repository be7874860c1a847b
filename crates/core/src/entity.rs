//! Entity trait: records identified by id rather than by value.

/// A record with a stable identity (e.g. a catalog product keyed by slug).
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
