//! Example: Read a Netscape cookie file and print request headers.
//!
//! Usage: cargo run --example cookie_file -- [path/to/cookies.txt]
//!
//! Without a path, a small built-in cookie file is used and written back
//! to a temporary location.

use netcookiejar::cookies::header::HeaderOptions;
use netcookiejar::cookies::jar::NetCookieJar;
use netcookiejar::cookies::netscape::{Destination, Source};
use std::path::PathBuf;

const SAMPLE: &str = ".github.com\tFALSE\t/\tTRUE\t1462299218\twom\tbat\n\
                      .example.com\tTRUE\t/\tFALSE\t1621483493.456876\tsession\tabc123";

fn main() {
    println!("=== Netscape Cookie File Example ===\n");

    let jar = NetCookieJar::new();
    let arg = std::env::args().nth(1).map(PathBuf::from);

    let result = match &arg {
        Some(path) => jar.read(Source::File(path)),
        None => jar.read(Source::Text(SAMPLE)),
    };

    let cookies = match result {
        Ok(cookies) => cookies,
        Err(e) => {
            eprintln!("Failed to read cookies: {} (code {})", e, e.as_i32());
            std::process::exit(1);
        }
    };

    println!("Found {} cookies", cookies.len());
    for cookie in &cookies {
        let opts = HeaderOptions::new().secure(cookie.secure).http_only(true);
        println!("  {}", cookie.header(Some(&opts)));
    }

    if arg.is_none() {
        let out = std::env::temp_dir().join("netcookiejar-demo.txt");
        match jar.write(Destination::File(&out), &cookies) {
            Ok(text) => println!("\nWrote {} bytes to {}", text.len(), out.display()),
            Err(e) => eprintln!("Failed to write {}: {}", out.display(), e),
        }
    }
}
