//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IllegalArgument { message } | Error::IllegalState { message } => {
                f.write_str(message)
            }
        }
    }
}
