//! Extension traits turning standard library values into `Optional`

use crate::optional::Optional;

/// Convert a value into an `Optional`, discarding whatever marks absence.
pub trait IntoOptional<T> {
    fn into_optional(self) -> Optional<T>;
}

impl<T> IntoOptional<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        Optional::of_nullable(self)
    }
}

/// The error is dropped; use `Optional::or_else_throw` to get one back.
impl<T, E> IntoOptional<T> for Result<T, E> {
    fn into_optional(self) -> Optional<T> {
        Optional::of_nullable(self.ok())
    }
}
