//! Error types for presence operations

mod builders;
mod display;
mod types;

pub use types::{Error, Result};
