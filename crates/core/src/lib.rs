//! A type-safe container for values that may be absent.
//!
//! ## Key Components
//!
//! - **`optional`**: the `Optional` type, its constructors, accessors and
//!   combinators, plus the `Nullable` trait that defines what counts as absent.
//! - **`errors`**: the `Error` enum and `Result` alias for the two failures the
//!   container raises on its own.
//! - **`functional`**: extension traits for stepping from `Option` and `Result`
//!   into an `Optional` chain.

pub mod errors;
pub mod functional;
pub mod optional;

#[cfg(test)]
mod testing;

pub use self::{
    errors::{Error, Result},
    functional::IntoOptional,
    optional::{Nullable, Optional},
};
