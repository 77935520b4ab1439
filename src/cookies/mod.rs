//! Netscape cookie files and cookie header formatting.
//!
//! - **Record**: [`NetCookie`](netcookie::NetCookie), one line of a cookie file
//! - **Codec**: [`netscape`] parses and serializes the tab-separated format
//! - **Headers**: [`header`] renders a cookie as a `Set-Cookie` style value
//! - **Files**: [`NetCookieJar`](jar::NetCookieJar) reads and writes files (sync and async)
//!
//! # Read a cookie file (curl/wget compatible)
//!
//! ```rust,no_run
//! use netcookiejar::cookies::jar::NetCookieJar;
//! use netcookiejar::cookies::netscape::Source;
//! use std::path::Path;
//!
//! let jar = NetCookieJar::new();
//! for cookie in jar.read(Source::File(Path::new("cookies.txt")))? {
//!     println!("{}", cookie.header(None));
//! }
//! # Ok::<(), netcookiejar::base::neterror::NetError>(())
//! ```
//!
//! # Format
//!
//! | Field | Example | Notes |
//! |-------|---------|-------|
//! | domain | `.github.com` | |
//! | include subdomains | `FALSE` | strict boolean |
//! | path | `/` | |
//! | secure | `TRUE` | strict boolean |
//! | expiry | `1462299218` | fractional seconds accepted, epoch if unparseable |
//! | name | `wom` | |
//! | value | `bat` | may be empty |

pub mod header;
pub mod jar;
pub mod netcookie;
pub mod netscape;
