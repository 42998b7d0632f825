//! Redirect chain retrieval.
//!
//! This module walks a URL's redirects with a redirect-disabled client and
//! records each response (status, protocol, headers, cookies, timing).

mod hop;
mod redirects;
mod request;

// Re-export public API
pub use redirects::fetch_chain;
pub use request::normalize_url;
