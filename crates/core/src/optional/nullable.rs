//! The absence predicate shared by every absence-aware entry point.

use super::Optional;

/// A value that may stand for "no value".
///
/// `Optional::of`, `Optional::of_nullable`, `Optional::map_nullable` and
/// `Optional::or_null` all go through this trait, so they agree on what
/// counts as absent.
pub trait Nullable: Sized {
    /// The type carried when the value is not absent
    type Value;

    /// Split into the carried value, or `None` when absent
    fn into_value(self) -> Option<Self::Value>;

    /// Whether this is the absence marker
    fn is_absent(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_value(self) -> Option<T> {
        self
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullable for Optional<T> {
    type Value = T;

    #[inline]
    fn into_value(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}
