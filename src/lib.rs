//! # netcookiejar
//!
//! Reader and writer for Netscape-format cookie files, the `cookies.txt`
//! layout used by curl, wget and most browser export extensions.
//!
//! ## Quick Start
//!
//! ```rust
//! use netcookiejar::cookies::header::HeaderOptions;
//! use netcookiejar::cookies::netscape;
//!
//! let cookies = netscape::parse_str(".github.com\tFALSE\t/\tTRUE\t1462299218\twom\tbat")?;
//! assert_eq!(cookies[0].name, "wom");
//!
//! let header = cookies[0].header(Some(&HeaderOptions::new().secure(true)));
//! assert!(header.ends_with("Path=/; Secure"));
//!
//! assert_eq!(
//!     netscape::serialize(&cookies),
//!     ".github.com\tFALSE\t/\tTRUE\t1462299218\twom\tbat"
//! );
//! # Ok::<(), netcookiejar::base::neterror::NetError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error type
//! - [`cookies`] - Cookie record, file codec and header formatting

pub mod base;
pub mod cookies;
