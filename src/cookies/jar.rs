use crate::base::neterror::NetError;
use crate::cookies::netcookie::NetCookie;
use crate::cookies::netscape::{self, Destination, Source};
use std::path::Path;

/// Entry point for reading and writing Netscape cookie files.
///
/// The jar keeps no cookies itself; every call works on the records
/// passed in or returned, in file order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetCookieJar;

impl NetCookieJar {
    pub fn new() -> Self {
        Self
    }

    /// Read cookies from a string or a file.
    ///
    /// # Example
    /// ```rust,no_run
    /// use netcookiejar::cookies::jar::NetCookieJar;
    /// use netcookiejar::cookies::netscape::Source;
    /// use std::path::Path;
    ///
    /// let jar = NetCookieJar::new();
    /// let cookies = jar.read(Source::File(Path::new("cookies.txt")))?;
    /// println!("Read {} cookies", cookies.len());
    /// # Ok::<(), netcookiejar::base::neterror::NetError>(())
    /// ```
    pub fn read(&self, source: Source<'_>) -> Result<Vec<NetCookie>, NetError> {
        netscape::read(source)
    }

    /// Serialize cookies, also writing them to a file for [`Destination::File`].
    ///
    /// # Example
    /// ```rust,no_run
    /// use netcookiejar::cookies::jar::NetCookieJar;
    /// use netcookiejar::cookies::netscape::{Destination, Source};
    /// use std::path::Path;
    ///
    /// let jar = NetCookieJar::new();
    /// let cookies = jar.read(Source::Text(".example.com\tTRUE\t/\tFALSE\t0\tid\t42"))?;
    /// jar.write(Destination::File(Path::new("cookies.txt")), &cookies)?;
    /// # Ok::<(), netcookiejar::base::neterror::NetError>(())
    /// ```
    pub fn write(
        &self,
        destination: Destination<'_>,
        cookies: &[NetCookie],
    ) -> Result<String, NetError> {
        netscape::write(destination, cookies)
    }

    /// Read a cookie file through `tokio::fs`.
    pub async fn read_file_async(&self, path: impl AsRef<Path>) -> Result<Vec<NetCookie>, NetError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let cookies = netscape::parse_str(&content)?;
        tracing::debug!(path = %path.display(), count = cookies.len(), "read cookie file");
        Ok(cookies)
    }

    /// Write a cookie file through `tokio::fs`, replacing its content.
    pub async fn write_file_async(
        &self,
        path: impl AsRef<Path>,
        cookies: &[NetCookie],
    ) -> Result<String, NetError> {
        let path = path.as_ref();
        let text = netscape::serialize(cookies);
        tokio::fs::write(path, &text).await?;
        tracing::debug!(path = %path.display(), count = cookies.len(), "wrote cookie file");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use time::OffsetDateTime;

    fn make_test_cookie(name: &str, domain: &str) -> NetCookie {
        let mut c = NetCookie::new(
            name,
            "test_value",
            domain,
            "/",
            OffsetDateTime::from_unix_timestamp(1735689600).unwrap(),
        );
        c.include_subdomains = domain.starts_with('.');
        c.secure = true;
        c
    }

    #[test]
    fn test_write_then_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        let jar = NetCookieJar::new();
        let cookies = vec![
            make_test_cookie("session", ".example.com"),
            make_test_cookie("user", "test.org"),
        ];

        let written = jar.write(Destination::File(&path), &cookies).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), written);

        let loaded = jar.read(Source::File(&path)).unwrap();
        assert_eq!(loaded, cookies);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = NetCookieJar::new()
            .read(Source::File(&dir.path().join("nope.txt")))
            .unwrap_err();
        assert!(matches!(err, NetError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_async_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        let jar = NetCookieJar::new();
        let cookies = vec![make_test_cookie("a", ".example.com")];

        jar.write_file_async(&path, &cookies).await.unwrap();
        let loaded = jar.read_file_async(&path).await.unwrap();
        assert_eq!(loaded, cookies);
    }
}
