//! The `Optional` container.
//!
//! An `Optional<T>` is either `Present` with exactly one `T`, or `Empty`.
//! Instances never change state: every combinator consumes the receiver and
//! hands back a new container, or the receiver itself where that is the
//! correct answer.
//!
//! ```
//! use presence_core::Optional;
//!
//! let port = Optional::of_nullable(Some("8080"))
//!     .map_nullable(|raw| raw.parse::<u16>().ok())
//!     .filter(|port| *port >= 1024)
//!     .or_else(3000);
//!
//! assert_eq!(port, 8080);
//! ```

mod combinators;
mod conversions;
mod nullable;

pub use conversions::{IntoIter, Iter};
pub use nullable::Nullable;

use crate::errors::{Error, Result};

/// A value of type `T`, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// Holds exactly one value
    Present(T),
    /// Holds no value
    Empty,
}

// Construction
impl<T> Optional<T> {
    /// Strict constructor.
    ///
    /// Fails with [`Error::IllegalArgument`] when `value` is absent. Use this
    /// where non-absence has already been established and a violation is a bug.
    pub fn of<N>(value: N) -> Result<Self>
    where
        N: Nullable<Value = T>,
    {
        match value.into_value() {
            Some(value) => Ok(Optional::Present(value)),
            None => {
                tracing::debug!("strict constructor received an absent value");
                Err(Error::absent_value())
            }
        }
    }

    /// Absence-safe constructor: Present when `value` is not absent, Empty otherwise.
    pub fn of_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        match value.into_value() {
            Some(value) => Optional::Present(value),
            None => Optional::Empty,
        }
    }

    /// The canonical empty container
    #[inline]
    pub const fn empty() -> Self {
        Optional::Empty
    }

    /// Wrap a value whose type has no absence marker.
    #[inline]
    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }
}

// Inspection
impl<T> Optional<T> {
    #[inline]
    pub const fn is_present(&self) -> bool {
        match self {
            Optional::Present(_) => true,
            Optional::Empty => false,
        }
    }

    /// Always the negation of [`Optional::is_present`].
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the wrapped value, leaving the receiver intact.
    ///
    /// Every accessor consumes its receiver, so repeated reads of one
    /// instance go through this view.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Empty => Optional::Empty,
        }
    }
}

// Extraction
impl<T> Optional<T> {
    /// Unchecked accessor.
    ///
    /// Fails with [`Error::IllegalState`] when empty. Reserved for call sites
    /// that have already checked presence.
    pub fn get(self) -> Result<T> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Empty => {
                tracing::debug!("value requested from an empty container");
                Err(Error::not_present())
            }
        }
    }

    /// The wrapped value, or `fallback`. The fallback is evaluated by the caller.
    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => fallback,
        }
    }

    /// The wrapped value, or the result of `supplier`, which only runs when empty.
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => supplier(),
        }
    }

    /// The wrapped value, or the error built by `error_supplier`.
    ///
    /// The supplied error is returned as is; the supplier only runs when empty.
    #[inline]
    pub fn or_else_throw<E, F>(self, error_supplier: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Empty => Err(error_supplier()),
        }
    }

    /// The wrapped value, or the absence marker `None`. Never fails.
    #[inline]
    pub fn or_null(self) -> Option<T> {
        self.into_value()
    }
}
