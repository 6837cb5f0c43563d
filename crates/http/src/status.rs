//! The status code registry

use crate::class::StatusClass;
use crate::errors::{Error, Result};
use presence_core::Optional;
use std::fmt;

/// A registered HTTP status: numeric code plus canonical reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HttpStatus {
    code: u16,
    reason: &'static str,
}

macro_rules! status_codes {
    ($( ($code:literal, $konst:ident, $reason:literal); )+) => {
        impl HttpStatus {
            $(
                #[doc = concat!(stringify!($code), " ", $reason)]
                pub const $konst: HttpStatus = HttpStatus { code: $code, reason: $reason };
            )+
        }

        const REGISTRY: &[HttpStatus] = &[$(HttpStatus::$konst,)+];

        fn lookup(code: u16) -> Option<HttpStatus> {
            match code {
                $($code => Some(HttpStatus::$konst),)+
                _ => None,
            }
        }
    };
}

status_codes! {
    (100, CONTINUE, "Continue");
    (101, SWITCHING_PROTOCOLS, "Switching Protocols");
    (102, PROCESSING, "Processing");
    (103, EARLY_HINTS, "Early Hints");

    (200, OK, "OK");
    (201, CREATED, "Created");
    (202, ACCEPTED, "Accepted");
    (203, NON_AUTHORITATIVE_INFORMATION, "Non-Authoritative Information");
    (204, NO_CONTENT, "No Content");
    (205, RESET_CONTENT, "Reset Content");
    (206, PARTIAL_CONTENT, "Partial Content");
    (207, MULTI_STATUS, "Multi-Status");
    (208, ALREADY_REPORTED, "Already Reported");
    (226, IM_USED, "IM Used");

    (300, MULTIPLE_CHOICES, "Multiple Choices");
    (301, MOVED_PERMANENTLY, "Moved Permanently");
    (302, FOUND, "Found");
    (303, SEE_OTHER, "See Other");
    (304, NOT_MODIFIED, "Not Modified");
    (305, USE_PROXY, "Use Proxy");
    (306, SWITCH_PROXY, "Switch Proxy");
    (307, TEMPORARY_REDIRECT, "Temporary Redirect");
    (308, PERMANENT_REDIRECT, "Permanent Redirect");

    (400, BAD_REQUEST, "Bad Request");
    (401, UNAUTHORIZED, "Unauthorized");
    (402, PAYMENT_REQUIRED, "Payment Required");
    (403, FORBIDDEN, "Forbidden");
    (404, NOT_FOUND, "Not Found");
    (405, METHOD_NOT_ALLOWED, "Method Not Allowed");
    (406, NOT_ACCEPTABLE, "Not Acceptable");
    (407, PROXY_AUTHENTICATION_REQUIRED, "Proxy Authentication Required");
    (408, REQUEST_TIMEOUT, "Request Timeout");
    (409, CONFLICT, "Conflict");
    (410, GONE, "Gone");
    (411, LENGTH_REQUIRED, "Length Required");
    (412, PRECONDITION_FAILED, "Precondition Failed");
    (413, PAYLOAD_TOO_LARGE, "Payload Too Large");
    (414, URI_TOO_LONG, "URI Too Long");
    (415, UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type");
    (416, RANGE_NOT_SATISFIABLE, "Range Not Satisfiable");
    (417, EXPECTATION_FAILED, "Expectation Failed");
    (418, IM_A_TEAPOT, "I'm a teapot");
    (421, MISDIRECTED_REQUEST, "Misdirected Request");
    (422, UNPROCESSABLE_ENTITY, "Unprocessable Entity");
    (423, LOCKED, "Locked");
    (424, FAILED_DEPENDENCY, "Failed Dependency");
    (425, TOO_EARLY, "Too Early");
    (426, UPGRADE_REQUIRED, "Upgrade Required");
    (428, PRECONDITION_REQUIRED, "Precondition Required");
    (429, TOO_MANY_REQUESTS, "Too Many Requests");
    (431, REQUEST_HEADER_FIELDS_TOO_LARGE, "Request Header Fields Too Large");
    (451, UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons");

    (500, INTERNAL_SERVER_ERROR, "Internal Server Error");
    (501, NOT_IMPLEMENTED, "Not Implemented");
    (502, BAD_GATEWAY, "Bad Gateway");
    (503, SERVICE_UNAVAILABLE, "Service Unavailable");
    (504, GATEWAY_TIMEOUT, "Gateway Timeout");
    (505, HTTP_VERSION_NOT_SUPPORTED, "HTTP Version Not Supported");
    (506, VARIANT_ALSO_NEGOTIATES, "Variant Also Negotiates");
    (507, INSUFFICIENT_STORAGE, "Insufficient Storage");
    (508, LOOP_DETECTED, "Loop Detected");
    (510, NOT_EXTENDED, "Not Extended");
    (511, NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required");
}

impl HttpStatus {
    /// Look up a registered status, failing for unknown codes.
    pub fn of_status_code(code: u16) -> Result<HttpStatus> {
        HttpStatus::find(code).or_else_throw(|| {
            tracing::debug!(code, "status code is not registered");
            Error::UnknownStatusCode { code }
        })
    }

    /// Look up a registered status without failing.
    pub fn find(code: u16) -> Optional<HttpStatus> {
        Optional::of_nullable(lookup(code))
    }

    /// Every registered status, in ascending code order
    pub fn all() -> &'static [HttpStatus] {
        REGISTRY
    }

    /// Registered statuses belonging to `class`
    pub fn in_class(class: StatusClass) -> impl Iterator<Item = HttpStatus> {
        REGISTRY
            .iter()
            .copied()
            .filter(move |status| class.contains(status.code))
    }

    #[inline]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Canonical reason phrase
    #[inline]
    pub const fn reason(&self) -> &'static str {
        self.reason
    }

    pub fn class(&self) -> StatusClass {
        // Every registered code sits in 100..=599
        match self.code / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Successful,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    pub fn is_1xx_informational(&self) -> bool {
        self.class() == StatusClass::Informational
    }

    pub fn is_2xx_successful(&self) -> bool {
        self.class() == StatusClass::Successful
    }

    pub fn is_3xx_redirection(&self) -> bool {
        self.class() == StatusClass::Redirection
    }

    pub fn is_4xx_client_error(&self) -> bool {
        self.class() == StatusClass::ClientError
    }

    pub fn is_5xx_server_error(&self) -> bool {
        self.class() == StatusClass::ServerError
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.reason)
    }
}

impl TryFrom<u16> for HttpStatus {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        HttpStatus::of_status_code(code)
    }
}
