//! Configuration constants.
//!
//! This module defines the constants used throughout the tracer, including
//! timeouts, redirect limits and the User-Agent strings used for requests.

/// Program name shown in the banner and the summary line.
pub const TOOL_NAME: &str = "HTTP-Tracer";

/// Version printed in the banner unless a different one is configured.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// ASCII logo printed at the top of every summary.
pub const LOGO: &str = r"
  _  _ _   _            _
 | || | |_| |_ _ __ ___| |_ _ _ __ _ __ ___ _ _
 | __ |  _|  _| '_ \___|  _| '_/ _` / _/ -_) '_|
 |_||_|\__|\__| .__/    \__|_| \__,_\__\___|_|
              |_|";

// Network operation timeouts
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

// Redirect handling
/// Maximum number of redirects to follow before giving up.
/// Matches the limit most browsers and HTTP libraries apply.
pub const MAX_REDIRECT_HOPS: usize = 30;

/// Status codes that are followed when they carry a `Location` header.
pub const REDIRECT_STATUS_CODES: &[u16] = &[301, 302, 303, 307, 308];

// URL validation
/// Schemes the tracer accepts.
pub const URL_SCHEME_PATTERN: &str = r"(?i)^https?://";
/// Any `scheme://` prefix, used to reject unsupported schemes instead of
/// prefixing them with `http://`.
pub const ANY_SCHEME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://";

// Header names inspected by the detailed report
pub const HEADER_SET_COOKIE: &str = "Set-Cookie";
pub const HEADER_LOCATION: &str = "Location";

/// Browser User-Agent strings picked at random for each trace unless
/// `--user-agent` is given.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_7_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0",
];
