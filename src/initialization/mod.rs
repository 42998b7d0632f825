//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a trace:
//! - HTTP client (redirects disabled, so every hop can be recorded)
//! - DNS resolver
//! - Registrable-domain extractor
//! - Logger

mod client;
mod logger;
mod resolver;

use std::sync::Arc;

use tldextract::{TldExtractor, TldOption};

// Re-export public API
pub use client::{init_client, pick_user_agent};
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the registrable-domain extractor.
///
/// Uses the Public Suffix List snapshot bundled with `tldextract`, so no
/// network access is needed.
pub fn init_extractor() -> Arc<TldExtractor> {
    Arc::new(TldExtractor::new(TldOption::default()))
}
