//! End-to-end tests for the site. The HTTP smoke test starts the `web` server
//! itself; the browser tests also need Chrome and a hydrated client bundle, so
//! they are `#[ignore]`d; run them with `cargo test -p e2e -- --ignored`.

pub mod browser;

/// Selector that matches once the header has hydrated on the client.
pub const READY_HEADER: &str = r#"header.site_header[data-ready="true"]"#;

/// Paths of the header navigation, in display order.
pub const NAV_PATHS: [&str; 6] = ["/", "/services", "/about", "/projects", "/contact", "/faq"];
