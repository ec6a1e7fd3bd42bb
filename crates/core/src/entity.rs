//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Hotels, rooms, guests and bookings are entities: two records with the same
/// id are the same thing, even if a name or a price changed in between.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
