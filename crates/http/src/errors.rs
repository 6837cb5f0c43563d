//! Error types for status lookups

/// Result type alias for status lookups
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The code is not in the registry
    #[error("Status code {code} is unknown")]
    UnknownStatusCode { code: u16 },

    /// The code falls outside every classification band
    #[error("Status code {code} is outside the 100-599 range")]
    OutOfRange { code: u16 },
}

impl Error {
    /// The code that caused the failure
    pub fn code(&self) -> u16 {
        match self {
            Error::UnknownStatusCode { code } | Error::OutOfRange { code } => *code,
        }
    }
}
