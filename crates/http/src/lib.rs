//! HTTP status code registry.
//!
//! Maps registered status codes to their canonical reason phrases and sorts
//! any code into one of the five classification bands. Lookups that may miss
//! come in two flavours: [`HttpStatus::of_status_code`] fails with
//! [`Error::UnknownStatusCode`], [`HttpStatus::find`] returns an empty
//! [`presence_core::Optional`].

pub mod class;
pub mod errors;
pub mod status;

#[cfg(feature = "http-interop")]
pub mod interop;

pub use class::StatusClass;
pub use errors::{Error, Result};
pub use status::HttpStatus;

#[cfg(feature = "http-interop")]
pub use interop::AsStatusCode;
