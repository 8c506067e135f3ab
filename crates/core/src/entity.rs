//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Returns true iff some element of `items` carries `id`.
pub fn contains_id<'a, E, I>(items: I, id: E::Id) -> bool
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    items.into_iter().any(|item| item.id() == id)
}
