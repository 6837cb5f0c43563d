//! Conversions to and from the `http` crate's status type

use crate::errors::{Error, Result};
use crate::status::HttpStatus;
pub use http::StatusCode;

pub trait AsStatusCode {
    fn as_status_code(&self) -> StatusCode;
}

impl AsStatusCode for StatusCode {
    fn as_status_code(&self) -> StatusCode {
        *self
    }
}

impl AsStatusCode for HttpStatus {
    fn as_status_code(&self) -> StatusCode {
        // Registered codes are all within 100..=599
        StatusCode::from_u16(self.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl TryFrom<StatusCode> for HttpStatus {
    type Error = Error;

    fn try_from(status: StatusCode) -> Result<Self> {
        HttpStatus::of_status_code(status.as_u16())
    }
}

impl From<HttpStatus> for StatusCode {
    fn from(status: HttpStatus) -> Self {
        status.as_status_code()
    }
}
