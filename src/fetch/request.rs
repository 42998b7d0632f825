//! Target URL normalization.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use crate::config::{ANY_SCHEME_PATTERN, URL_SCHEME_PATTERN};
use crate::error_handling::TraceError;

static SUPPORTED_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_SCHEME_PATTERN).expect("valid scheme pattern"));
static ANY_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANY_SCHEME_PATTERN).expect("valid scheme pattern"));

/// Turns user input into the URL to trace.
///
/// Input without a scheme gets `http://` prepended. Input with a scheme other
/// than `http`/`https` is rejected rather than prefixed.
///
/// # Errors
///
/// `TraceError::InvalidScheme` for unsupported schemes, `TraceError::InvalidUrl`
/// when the result does not parse.
pub fn normalize_url(input: &str) -> Result<Url, TraceError> {
    let trimmed = input.trim();

    let candidate = if SUPPORTED_SCHEME.is_match(trimmed) {
        trimmed.to_string()
    } else if let Some(m) = ANY_SCHEME.find(trimmed) {
        let scheme = m.as_str().trim_end_matches("://");
        return Err(TraceError::InvalidScheme(scheme.to_string()));
    } else {
        format!("http://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|e| TraceError::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    if url.host_str().is_none() {
        return Err(TraceError::InvalidUrl {
            url: input.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}
