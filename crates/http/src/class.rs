//! Coarse classification bands keyed on the leading digit of a status code

use crate::errors::{Error, Result};
use presence_core::Optional;
use std::fmt;

/// The five standard status bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusClass {
    /// 1xx
    Informational,
    /// 2xx
    Successful,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
}

impl StatusClass {
    pub const ALL: [StatusClass; 5] = [
        StatusClass::Informational,
        StatusClass::Successful,
        StatusClass::Redirection,
        StatusClass::ClientError,
        StatusClass::ServerError,
    ];

    /// The band for `code`, registered or not. Empty outside 100..=599.
    pub fn of(code: u16) -> Optional<StatusClass> {
        match code / 100 {
            1 => Optional::present(StatusClass::Informational),
            2 => Optional::present(StatusClass::Successful),
            3 => Optional::present(StatusClass::Redirection),
            4 => Optional::present(StatusClass::ClientError),
            5 => Optional::present(StatusClass::ServerError),
            _ => Optional::empty(),
        }
    }

    /// Like [`StatusClass::of`], failing for codes outside every band
    pub fn classify(code: u16) -> Result<StatusClass> {
        StatusClass::of(code).or_else_throw(|| Error::OutOfRange { code })
    }

    /// The leading digit shared by every code in this band
    pub const fn leading_digit(self) -> u16 {
        match self {
            StatusClass::Informational => 1,
            StatusClass::Successful => 2,
            StatusClass::Redirection => 3,
            StatusClass::ClientError => 4,
            StatusClass::ServerError => 5,
        }
    }

    pub fn contains(self, code: u16) -> bool {
        code / 100 == self.leading_digit()
    }

    /// Human readable band name
    pub const fn label(self) -> &'static str {
        match self {
            StatusClass::Informational => "Informational",
            StatusClass::Successful => "Successful",
            StatusClass::Redirection => "Redirection",
            StatusClass::ClientError => "Client Error",
            StatusClass::ServerError => "Server Error",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}xx {}", self.leading_digit(), self.label())
    }
}
