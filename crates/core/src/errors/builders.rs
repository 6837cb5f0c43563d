//! Builder methods for creating errors with context

use super::types::Error;

pub(crate) const ABSENT_VALUE_MESSAGE: &str = "Passed value is null or undefined";
pub(crate) const NOT_PRESENT_MESSAGE: &str = "The value is not present";

impl Error {
    /// Create an illegal argument error
    #[must_use]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Error::IllegalArgument {
            message: message.into(),
        }
    }

    /// Create an illegal state error
    #[must_use]
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Error::IllegalState {
            message: message.into(),
        }
    }

    /// The error raised when a strict constructor receives an absent value
    #[must_use]
    pub fn absent_value() -> Self {
        Self::illegal_argument(ABSENT_VALUE_MESSAGE)
    }

    /// The error raised when an empty container is unwrapped
    #[must_use]
    pub fn not_present() -> Self {
        Self::illegal_state(NOT_PRESENT_MESSAGE)
    }

    /// Whether this error came from a strict constructor
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, Error::IllegalArgument { .. })
    }

    /// Whether this error came from unwrapping an empty container
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Error::IllegalState { .. })
    }
}
