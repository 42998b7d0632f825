//! Per-hop and per-chain derived values.
//!
//! Everything here is a pure function of a [`HopRecord`] or [`TraceChain`],
//! except the address helpers which consult a [`HostResolver`]. Address
//! lookups are best effort: failures are logged and reported as `None`.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Version;
use tldextract::TldExtractor;

use crate::dns::HostResolver;
use crate::domain::extract_domain;
use crate::models::{HopRecord, TraceChain, TraceSummary};

/// Resolved address of every hop, in chain order.
pub type HopAddresses = Vec<Option<IpAddr>>;

/// Converts an elapsed duration to whole milliseconds, truncating.
pub fn elapsed_millis(duration: Duration) -> u64 {
    // u64 milliseconds covers ~585 million years
    duration.as_millis() as u64
}

/// Encodes a transport version as the compact token used in reports.
pub fn version_token(version: Version) -> u16 {
    match version {
        Version::HTTP_09 => 9,
        Version::HTTP_10 => 10,
        Version::HTTP_11 => 11,
        Version::HTTP_2 => 2,
        Version::HTTP_3 => 3,
        _ => 11,
    }
}

/// Renders a compact version token as it appears after `HTTP/`.
///
/// Multi-digit tokens are split after the first digit (`11` becomes `"1.1"`),
/// single digits are kept as they are (`2` stays `"2"`).
pub fn normalize_protocol_version(token: u16) -> String {
    let text = token.to_string();
    if text.len() > 1 {
        let (major, minor) = text.split_at(1);
        format!("{major}.{minor}")
    } else {
        text
    }
}

/// Total time spent on the chain: every hop is summed first, then truncated.
pub fn total_elapsed_millis(chain: &TraceChain) -> u64 {
    let total: Duration = chain.hops().iter().map(|hop| hop.elapsed).sum();
    elapsed_millis(total)
}

/// `"(cookies: N)"` when the hop set cookies.
pub fn cookie_summary(hop: &HopRecord) -> Option<String> {
    if hop.cookies.is_empty() {
        None
    } else {
        Some(format!("(cookies: {})", hop.cookies.len()))
    }
}

/// Aggregates a chain into its summary figures.
pub fn summarize(chain: &TraceChain) -> TraceSummary {
    TraceSummary {
        total_elapsed_ms: total_elapsed_millis(chain),
        hop_count: chain.len(),
        final_status: chain.final_hop().status,
    }
}

/// Name looked up for `url`, or the literal address for IP hosts.
enum LookupTarget {
    Domain(String),
    Literal(IpAddr),
}

fn lookup_target(extractor: &TldExtractor, url: &str) -> Option<LookupTarget> {
    match url::Url::parse(url).ok()?.host()? {
        url::Host::Ipv4(ip) => return Some(LookupTarget::Literal(IpAddr::V4(ip))),
        url::Host::Ipv6(ip) => return Some(LookupTarget::Literal(IpAddr::V6(ip))),
        url::Host::Domain(_) => {}
    }
    match extract_domain(extractor, url) {
        Ok(domain) => Some(LookupTarget::Domain(domain)),
        Err(e) => {
            debug!("No registrable domain for {url}: {e:#}");
            None
        }
    }
}

async fn resolve_domain<R: HostResolver>(resolver: &R, domain: &str) -> Option<IpAddr> {
    match resolver.resolve(domain).await {
        Ok(ip) => {
            debug!("Resolved {domain} to {ip}");
            Some(ip)
        }
        Err(e) => {
            warn!("Failed to resolve {domain}: {e:#}");
            None
        }
    }
}

/// Resolves the registrable domain of `url` to an address.
///
/// IP-literal hosts are returned without a lookup. Any failure yields `None`.
pub async fn resolve_host_ip<R: HostResolver>(
    extractor: &TldExtractor,
    resolver: &R,
    url: &str,
) -> Option<IpAddr> {
    match lookup_target(extractor, url)? {
        LookupTarget::Literal(ip) => Some(ip),
        LookupTarget::Domain(domain) => resolve_domain(resolver, &domain).await,
    }
}

/// Resolves every hop of `chain` with [`resolve_host_ip`], one lookup per
/// distinct host.
pub async fn resolve_chain_addresses<R: HostResolver>(
    extractor: &TldExtractor,
    resolver: &R,
    chain: &TraceChain,
) -> HopAddresses {
    let mut resolved: HashMap<String, Option<IpAddr>> = HashMap::new();
    let mut addresses = Vec::with_capacity(chain.len());

    for hop in chain.hops() {
        let host = url::Url::parse(&hop.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_ascii_lowercase));
        let ip = match host {
            Some(host) => match resolved.get(&host) {
                Some(cached) => *cached,
                None => {
                    let ip = resolve_host_ip(extractor, resolver, &hop.url).await;
                    resolved.insert(host, ip);
                    ip
                }
            },
            None => None,
        };
        addresses.push(ip);
    }

    addresses
}
