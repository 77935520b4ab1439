use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetError {
    // Cookie file format errors
    #[error("Cookie line {line} has {found} tab-separated fields, expected 7")]
    CookieMissingField { line: usize, found: usize },
    #[error("Cookie line {line} has an invalid {field} flag: {token:?}")]
    CookieInvalidBool {
        line: usize,
        field: &'static str,
        token: String,
    },

    // HTTP Errors
    #[error("Invalid header value")]
    InvalidHeaderValue,

    // I/O Errors
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl NetError {
    /// Integer error code.
    ///
    /// I/O failures reuse the Chromium codes from `net_error_list.h`; the
    /// cookie file errors live in the custom range below -10000.
    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::Io(e) => match e.kind() {
                io::ErrorKind::NotFound => -6,
                io::ErrorKind::PermissionDenied => -10,
                _ => -2,
            },
            NetError::InvalidHeaderValue => -10000,
            NetError::CookieMissingField { .. } => -10100,
            NetError::CookieInvalidBool { .. } => -10101,
        }
    }

    /// True for errors caused by malformed cookie file content.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            NetError::CookieMissingField { .. } | NetError::CookieInvalidBool { .. }
        )
    }

    /// Line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            NetError::CookieMissingField { line, .. } | NetError::CookieInvalidBool { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

impl From<http::header::InvalidHeaderValue> for NetError {
    fn from(_: http::header::InvalidHeaderValue) -> Self {
        NetError::InvalidHeaderValue
    }
}
