//! Trace data model.
//!
//! A [`TraceChain`] holds one [`HopRecord`] per response received while
//! following redirects, ending with the final response. Records are built
//! once by the fetch layer and only read afterwards.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::HeaderMap;

/// Response headers of one hop, in the order the transport yielded them.
///
/// Names keep the spelling the transport produced; lookups ignore case.
/// A name may appear more than once (e.g. several `Set-Cookie` headers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HopHeaders(Vec<(String, String)>);

impl HopHeaders {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// Iterates over `(name, value)` pairs in transport order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All values stored under `name`.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All values under `name` joined with ", ", or `None` if absent.
    pub fn joined(&self, name: &str) -> Option<String> {
        let values = self.get_all(name);
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&HeaderMap> for HopHeaders {
    fn from(headers: &HeaderMap) -> Self {
        Self(
            headers
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_string(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect(),
        )
    }
}

/// One response in the redirect chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopRecord {
    /// HTTP status code
    pub status: u16,
    /// Compact protocol version token (11 = HTTP/1.1, 2 = HTTP/2)
    pub version: u16,
    /// Request method used for this hop
    pub method: String,
    /// URL that was requested
    pub url: String,
    /// Time from sending the request to receiving the response headers
    pub elapsed: Duration,
    /// Response headers
    pub headers: HopHeaders,
    /// Cookies set by this response, by name
    pub cookies: BTreeMap<String, String>,
}

impl HopRecord {
    /// Creates a GET hop over HTTP/1.1 with no headers or cookies.
    pub fn new(status: u16, url: &str, elapsed: Duration) -> Self {
        Self {
            status,
            version: 11,
            method: "GET".to_string(),
            url: url.to_string(),
            elapsed,
            headers: HopHeaders::default(),
            cookies: BTreeMap::new(),
        }
    }

    pub fn with_version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.0.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }
}

/// Ordered responses for one trace: every redirect followed, then the final
/// response. Never empty: the final response is required to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceChain {
    hops: Vec<HopRecord>,
}

#[allow(clippy::len_without_is_empty)] // a chain always holds its final hop
impl TraceChain {
    /// Builds a chain from the redirect responses and the final response.
    pub fn new(mut redirects: Vec<HopRecord>, final_hop: HopRecord) -> Self {
        redirects.push(final_hop);
        Self { hops: redirects }
    }

    /// Every hop, redirects first, final response last.
    pub fn hops(&self) -> &[HopRecord] {
        &self.hops
    }

    /// The intermediate redirect responses.
    pub fn redirects(&self) -> &[HopRecord] {
        &self.hops[..self.hops.len() - 1]
    }

    /// The terminal response.
    pub fn final_hop(&self) -> &HopRecord {
        &self.hops[self.hops.len() - 1]
    }

    /// Number of hops, including the final response.
    pub fn len(&self) -> usize {
        self.hops.len()
    }
}

/// Aggregate figures for one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    /// Sum of every hop's elapsed time, truncated to whole milliseconds
    pub total_elapsed_ms: u64,
    /// Redirects plus the final response
    pub hop_count: usize,
    /// Status code of the final response
    pub final_status: u16,
}
