//! Netscape cookie file codec.
//!
//! One cookie per line, seven tab-separated fields:
//! `domain\tinclude_subdomains\tpath\tsecure\texpiry\tname\tvalue`
//!
//! See <https://curl.se/docs/http-cookies.html>. Comment lines and the
//! `#HttpOnly_` prefix are not part of the supported layout.

use crate::base::neterror::NetError;
use crate::cookies::netcookie::NetCookie;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use time::OffsetDateTime;

const FIELD_COUNT: usize = 7;
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Where cookie text is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// Cookie file content held in memory.
    Text(&'a str),
    /// Path of a cookie file.
    File(&'a Path),
}

/// Where serialized cookie text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Only return the text.
    Text,
    /// Also write the text to this file, replacing its content.
    File(&'a Path),
}

/// Read cookies from an in-memory string or a file.
pub fn read(source: Source<'_>) -> Result<Vec<NetCookie>, NetError> {
    match source {
        Source::Text(text) => parse_str(text),
        Source::File(path) => {
            let file = fs::File::open(path)?;
            let cookies = parse_reader(BufReader::new(file))?;
            tracing::debug!(path = %path.display(), count = cookies.len(), "read cookie file");
            Ok(cookies)
        }
    }
}

/// Serialize cookies, writing them to `destination` when it is a file.
///
/// Returns the serialized text in both cases.
pub fn write(destination: Destination<'_>, cookies: &[NetCookie]) -> Result<String, NetError> {
    let text = serialize(cookies);
    if let Destination::File(path) = destination {
        fs::write(path, &text)?;
        tracing::debug!(path = %path.display(), count = cookies.len(), "wrote cookie file");
    }
    Ok(text)
}

/// Parse cookie file content.
pub fn parse_str(text: &str) -> Result<Vec<NetCookie>, NetError> {
    parse_lines(text.lines())
}

/// Parse cookies from a buffered reader. Read errors abort the parse.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<NetCookie>, NetError> {
    let mut cookies = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(cookie) = parse_line(idx + 1, &line)? {
            cookies.push(cookie);
        }
    }
    Ok(cookies)
}

/// Parse a sequence of lines, one cookie per non-empty line.
///
/// Output order matches input order. The first malformed line fails the
/// whole call.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<NetCookie>, NetError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cookies = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        if let Some(cookie) = parse_line(idx + 1, line.as_ref())? {
            cookies.push(cookie);
        }
    }
    tracing::debug!(count = cookies.len(), "parsed netscape cookies");
    Ok(cookies)
}

/// Parse one line. `Ok(None)` for empty lines.
fn parse_line(line_no: usize, line: &str) -> Result<Option<NetCookie>, NetError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < FIELD_COUNT {
        tracing::debug!(line = line_no, found = fields.len(), "cookie line missing fields");
        return Err(NetError::CookieMissingField {
            line: line_no,
            found: fields.len(),
        });
    }

    Ok(Some(NetCookie {
        domain: fields[0].to_string(),
        include_subdomains: parse_flag(line_no, "include_subdomains", fields[1])?,
        path: fields[2].to_string(),
        secure: parse_flag(line_no, "secure", fields[3])?,
        expires: parse_expiry(line_no, fields[4]),
        name: fields[5].to_string(),
        value: fields[6].to_string(),
    }))
}

fn parse_flag(line_no: usize, field: &'static str, token: &str) -> Result<bool, NetError> {
    match token {
        "TRUE" | "true" | "True" | "T" | "t" | "1" => Ok(true),
        "FALSE" | "false" | "False" | "F" | "f" | "0" => Ok(false),
        _ => {
            tracing::debug!(line = line_no, field, token, "invalid cookie flag");
            Err(NetError::CookieInvalidBool {
                line: line_no,
                field,
                token: token.to_string(),
            })
        }
    }
}

/// Fractional seconds since the epoch. Anything unusable maps to the epoch.
fn parse_expiry(line_no: usize, token: &str) -> OffsetDateTime {
    let expiry = token
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite())
        .and_then(|secs| {
            let whole = secs.trunc();
            let nanos = (whole as i128)
                .checked_mul(1_000_000_000)?
                .checked_add(((secs - whole) * NANOS_PER_SEC) as i128)?;
            OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
        });

    match expiry {
        Some(t) => t,
        None => {
            tracing::trace!(line = line_no, token, "unparseable cookie expiry, using epoch");
            OffsetDateTime::UNIX_EPOCH
        }
    }
}

/// Render cookies in Netscape format, one per line, without a trailing newline.
///
/// Expirations are written as whole seconds.
pub fn serialize(cookies: &[NetCookie]) -> String {
    cookies
        .iter()
        .map(|c| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                c.domain,
                flag(c.include_subdomains),
                c.path,
                flag(c.secure),
                c.expires.unix_timestamp(),
                c.name,
                c.value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn flag(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GITHUB_LINE: &str = ".github.com\tFALSE\t/\tTRUE\t1462299218\twom\tbat";

    #[test]
    fn test_parse_github_line() {
        let cookies = parse_str(GITHUB_LINE).unwrap();
        assert_eq!(cookies.len(), 1);

        let c = &cookies[0];
        assert_eq!(c.domain, ".github.com");
        assert!(!c.include_subdomains);
        assert_eq!(c.path, "/");
        assert!(c.secure);
        assert_eq!(c.expires.unix_timestamp(), 1462299218);
        assert_eq!(c.expires.nanosecond(), 0);
        assert_eq!(c.name, "wom");
        assert_eq!(c.value, "bat");
    }

    #[test]
    fn test_parse_skips_empty_lines_and_crlf() {
        let text = format!("\n{}\r\n\r\n{}\n", GITHUB_LINE, GITHUB_LINE);
        let cookies = parse_str(&text).unwrap();
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies[0].value, "bat");
    }

    #[test]
    fn test_parse_empty_value() {
        let cookies = parse_str("example.com\tTRUE\t/\tFALSE\t0\tempty\t").unwrap();
        assert_eq!(cookies[0].name, "empty");
        assert_eq!(cookies[0].value, "");
        assert!(cookies[0].include_subdomains);
    }

    #[test]
    fn test_parse_extra_fields_ignored() {
        let cookies = parse_str("example.com\tTRUE\t/\tFALSE\t0\tn\tv\textra").unwrap();
        assert_eq!(cookies[0].value, "v");
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_str("example.com\tTRUE\t/\tFALSE\t0\tname").unwrap_err();
        assert!(matches!(
            err,
            NetError::CookieMissingField { line: 1, found: 6 }
        ));
    }

    #[test]
    fn test_error_line_counts_empty_lines() {
        let text = format!("{}\n\nbroken", GITHUB_LINE);
        let err = parse_str(&text).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_parse_flag_literals() {
        for token in ["TRUE", "true", "True", "T", "t", "1"] {
            assert!(parse_flag(1, "secure", token).unwrap());
        }
        for token in ["FALSE", "false", "False", "F", "f", "0"] {
            assert!(!parse_flag(1, "secure", token).unwrap());
        }
        for token in ["yes", "no", "tRUE", "", " TRUE"] {
            assert!(parse_flag(1, "secure", token).is_err());
        }
    }

    #[test]
    fn test_parse_expiry_fallbacks() {
        for token in ["notanumber", "", "NaN", "inf", "-inf", "1e300"] {
            assert_eq!(parse_expiry(1, token), OffsetDateTime::UNIX_EPOCH, "{token}");
        }
    }

    #[test]
    fn test_parse_expiry_fractional() {
        let t = parse_expiry(1, "1621483493.456876");
        assert_eq!(t.unix_timestamp(), 1621483493);
        let micros = t.nanosecond() / 1_000;
        assert!((456_875..=456_877).contains(&micros), "{micros}");
    }

    #[test]
    fn test_parse_expiry_negative() {
        assert_eq!(parse_expiry(1, "-86400").unix_timestamp(), -86400);
    }

    #[test]
    fn test_serialize_format() {
        let cookies = parse_str(GITHUB_LINE).unwrap();
        assert_eq!(serialize(&cookies), GITHUB_LINE);
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_serialize_normalizes_flags() {
        let cookies = parse_str("example.com\tt\t/\t0\t10\tn\tv").unwrap();
        assert_eq!(serialize(&cookies), "example.com\tTRUE\t/\tFALSE\t10\tn\tv");
    }

    #[test]
    fn test_write_text_destination() {
        let cookies = parse_str(GITHUB_LINE).unwrap();
        assert_eq!(write(Destination::Text, &cookies).unwrap(), GITHUB_LINE);
    }

    #[test]
    fn test_read_text_source() {
        let cookies = read(Source::Text(GITHUB_LINE)).unwrap();
        assert_eq!(cookies.len(), 1);
    }
}
