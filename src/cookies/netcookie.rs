use cookie::Cookie;
use time::OffsetDateTime;

/// A single cookie as stored in a Netscape cookie file.
///
/// Carries the include-subdomains flag next to the regular cookie fields,
/// since [`cookie::Cookie`] has no place for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetCookie {
    pub domain: String,
    pub include_subdomains: bool,
    pub path: String,
    pub secure: bool,
    /// Epoch when the file held no usable timestamp.
    pub expires: OffsetDateTime,
    pub name: String,
    pub value: String,
}

impl NetCookie {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
        expires: OffsetDateTime,
    ) -> Self {
        Self {
            domain: domain.into(),
            include_subdomains: false,
            path: path.into(),
            secure: false,
            expires,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a record from an HTTP cookie.
    ///
    /// Missing attributes become empty strings, `false`, or the epoch.
    /// Note that [`Cookie::domain`] strips a leading `.`.
    pub fn from_cookie(cookie: &Cookie<'_>, include_subdomains: bool) -> Self {
        Self {
            domain: cookie.domain().unwrap_or_default().to_string(),
            include_subdomains,
            path: cookie.path().unwrap_or_default().to_string(),
            secure: cookie.secure().unwrap_or(false),
            expires: cookie
                .expires_datetime()
                .unwrap_or(OffsetDateTime::UNIX_EPOCH),
            name: cookie.name().to_string(),
            value: cookie.value().to_string(),
        }
    }

    /// Convert into an HTTP cookie. The include-subdomains flag is dropped.
    pub fn to_cookie(&self) -> Cookie<'static> {
        Cookie::from(self.clone())
    }

    /// Expiration as whole seconds since the Unix epoch.
    pub fn expires_unix(&self) -> i64 {
        self.expires.unix_timestamp()
    }
}

impl From<NetCookie> for Cookie<'static> {
    fn from(c: NetCookie) -> Self {
        Cookie::build((c.name, c.value))
            .domain(c.domain)
            .path(c.path)
            .secure(c.secure)
            .expires(c.expires)
            .build()
    }
}
