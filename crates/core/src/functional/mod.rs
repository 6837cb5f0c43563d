//! Bridges between `Optional` and the standard library's own presence types
//!
//! Code that already works with `Option` or `Result` can step into the
//! combinator chain with a single call.

pub mod extensions;

pub use extensions::IntoOptional;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::extensions::IntoOptional;
    pub use crate::optional::{Nullable, Optional};
}
