//! Base types and error handling.
//!
//! - [`NetError`](neterror::NetError): Error type shared by the cookie codec and formatter

pub mod neterror;
