//! Side-effecting consumption and transformation combinators.
//!
//! An empty receiver short-circuits every combinator here: the callback is
//! never invoked. Callbacks are never wrapped, so a panic or an `Err`
//! coming out of one reaches the caller unchanged.

use super::{Nullable, Optional};

// Side-effecting consumption
impl<T> Optional<T> {
    /// Run `consumer` on the value when present
    #[inline]
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        match self {
            Optional::Present(value) => consumer(value),
            Optional::Empty => {}
        }
    }

    /// Run exactly one of `consumer` (present) or `empty_action` (empty)
    #[inline]
    pub fn if_present_or_else<F, A>(&self, consumer: F, empty_action: A)
    where
        F: FnOnce(&T),
        A: FnOnce(),
    {
        match self {
            Optional::Present(value) => consumer(value),
            Optional::Empty => empty_action(),
        }
    }
}

// Transformation
impl<T> Optional<T> {
    /// Keep the value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match &self {
            Optional::Present(value) => predicate(value),
            Optional::Empty => return self,
        };
        if keep {
            self
        } else {
            Optional::Empty
        }
    }

    /// Transform the value.
    ///
    /// The output type here has no absence marker, so a present receiver
    /// always yields a present result. Use [`Optional::map_nullable`] when the
    /// mapper may produce nothing.
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(mapper(value)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Transform the value, re-deriving presence from the mapper's output.
    ///
    /// An absent output becomes `Empty`, never a present absence marker.
    pub fn map_nullable<N, F>(self, mapper: F) -> Optional<N::Value>
    where
        N: Nullable,
        F: FnOnce(T) -> N,
    {
        match self {
            Optional::Present(value) => Optional::of_nullable(mapper(value)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Monadic bind: the mapper's container is returned as is.
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => mapper(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Fall back to another container when empty.
    ///
    /// Unlike [`Optional::or_else_get`] the fallback is itself an `Optional`,
    /// so the chain can keep going after it.
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Optional::Present(_) => self,
            Optional::Empty => supplier(),
        }
    }
}

// Fallible callbacks
impl<T> Optional<T> {
    /// [`Optional::filter`] with a predicate that can fail
    pub fn try_filter<P, E>(self, predicate: P) -> Result<Self, E>
    where
        P: FnOnce(&T) -> Result<bool, E>,
    {
        let keep = match &self {
            Optional::Present(value) => predicate(value)?,
            Optional::Empty => return Ok(self),
        };
        if keep {
            Ok(self)
        } else {
            Ok(Optional::Empty)
        }
    }

    /// [`Optional::map`] with a mapper that can fail
    pub fn try_map<U, F, E>(self, mapper: F) -> Result<Optional<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Optional::Present(value) => mapper(value).map(Optional::Present),
            Optional::Empty => Ok(Optional::Empty),
        }
    }

    /// [`Optional::flat_map`] with a mapper that can fail
    pub fn try_flat_map<U, F, E>(self, mapper: F) -> Result<Optional<U>, E>
    where
        F: FnOnce(T) -> Result<Optional<U>, E>,
    {
        match self {
            Optional::Present(value) => mapper(value),
            Optional::Empty => Ok(Optional::Empty),
        }
    }
}
