//! Core error type definitions

/// Result type alias for presence operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the container itself.
///
/// Errors produced by caller-supplied callbacks never pass through this type;
/// they reach the caller exactly as the callback returned them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A strict constructor was handed an absent value
    IllegalArgument { message: String },

    /// An unchecked accessor was called on an empty container
    IllegalState { message: String },
}
