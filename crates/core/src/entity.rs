//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Records kept by a store are entities: two records with the same id are the
/// same product, whatever their current quantity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
