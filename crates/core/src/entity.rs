//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same thing when their ids match, whatever the rest of
/// their state says.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison (as opposed to `PartialEq`, which compares state).
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
