//! Render a cookie as an HTTP `Set-Cookie` style header value.

use crate::base::neterror::NetError;
use crate::cookies::netcookie::NetCookie;
use http::HeaderValue;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// `Mon, 02 Jan 2006 15:04:05 GMT`
const EXPIRES_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Optional attributes appended after `Path`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderOptions {
    pub secure: bool,
    pub http_only: bool,
}

impl HeaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }
}

/// Format `cookie` as `name=value; Expires=..; Domain=..; Path=..`,
/// followed by `Secure` and `HttpOnly` when requested.
///
/// No trailing semicolon is emitted.
pub fn format_header(cookie: &NetCookie, options: Option<&HeaderOptions>) -> String {
    let options = options.copied().unwrap_or_default();

    let mut header = format!(
        "{}={}; Expires={}; Domain={}; Path={};",
        cookie.name,
        cookie.value,
        format_expires(cookie.expires),
        cookie.domain,
        cookie.path
    );

    if options.secure {
        header.push_str(" Secure;");
    }
    if options.http_only {
        header.push_str(" HttpOnly;");
    }

    if header.ends_with(';') {
        header.pop();
    }
    header
}

/// Like [`format_header`], checked for use as an [`http::HeaderValue`].
pub fn to_header_value(
    cookie: &NetCookie,
    options: Option<&HeaderOptions>,
) -> Result<HeaderValue, NetError> {
    Ok(HeaderValue::from_str(&format_header(cookie, options))?)
}

fn format_expires(expires: OffsetDateTime) -> String {
    expires
        .to_offset(UtcOffset::UTC)
        .format(EXPIRES_FORMAT)
        .unwrap_or_default()
}

impl NetCookie {
    /// See [`format_header`].
    pub fn header(&self, options: Option<&HeaderOptions>) -> String {
        format_header(self, options)
    }
}
