//! Conversion of transport responses into hop records.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Method;

use crate::metrics::version_token;
use crate::models::{HopHeaders, HopRecord};

/// Captures everything the reports need from `response`.
///
/// Only the status line and headers are read; the body is left untouched.
pub(crate) fn hop_from_response(
    method: &Method,
    response: &reqwest::Response,
    elapsed: Duration,
) -> HopRecord {
    let cookies: BTreeMap<String, String> = response
        .cookies()
        .map(|c| (c.name().to_string(), c.value().to_string()))
        .collect();

    HopRecord {
        status: response.status().as_u16(),
        version: version_token(response.version()),
        method: method.as_str().to_string(),
        url: response.url().to_string(),
        elapsed,
        headers: HopHeaders::from(response.headers()),
        cookies,
    }
}
