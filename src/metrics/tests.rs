// Metrics module tests.

use super::*;
use crate::dns::StaticResolver;
use std::cell::Cell;
use std::net::Ipv4Addr;
use tldextract::TldOption;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn test_extractor() -> TldExtractor {
    TldExtractor::new(TldOption::default())
}

#[test]
fn test_elapsed_millis_truncates() {
    assert_eq!(elapsed_millis(Duration::from_micros(1_599_900)), 1599);
    assert_eq!(elapsed_millis(Duration::from_micros(999)), 0);
    assert_eq!(elapsed_millis(Duration::ZERO), 0);
}

#[test]
fn test_normalize_protocol_version() {
    assert_eq!(normalize_protocol_version(11), "1.1");
    assert_eq!(normalize_protocol_version(10), "1.0");
    assert_eq!(normalize_protocol_version(2), "2");
    assert_eq!(normalize_protocol_version(3), "3");
}

#[test]
fn test_normalize_protocol_version_keeps_whole_remainder() {
    // Fixed split after the first digit, not general version parsing
    assert_eq!(normalize_protocol_version(20), "2.0");
    assert_eq!(normalize_protocol_version(123), "1.23");
}

#[test]
fn test_version_token_round_trip_through_normalization() {
    assert_eq!(normalize_protocol_version(version_token(Version::HTTP_11)), "1.1");
    assert_eq!(normalize_protocol_version(version_token(Version::HTTP_10)), "1.0");
    assert_eq!(normalize_protocol_version(version_token(Version::HTTP_2)), "2");
    assert_eq!(normalize_protocol_version(version_token(Version::HTTP_3)), "3");
}

#[test]
fn test_total_elapsed_includes_every_hop() {
    let chain = TraceChain::new(
        vec![
            HopRecord::new(301, "http://a.test/", ms(120)),
            HopRecord::new(302, "http://b.test/", ms(45)),
        ],
        HopRecord::new(200, "http://c.test/", ms(300)),
    );
    assert_eq!(total_elapsed_millis(&chain), 465);
}

#[test]
fn test_total_elapsed_sums_before_truncating() {
    // 0.6ms + 0.6ms is 1ms, while truncating each hop first would give 0
    let chain = TraceChain::new(
        vec![HopRecord::new(301, "http://a.test/", Duration::from_micros(600))],
        HopRecord::new(200, "http://b.test/", Duration::from_micros(600)),
    );
    assert_eq!(total_elapsed_millis(&chain), 1);
}

#[test]
fn test_cookie_summary() {
    let hop = HopRecord::new(200, "http://a.test/", ms(10));
    assert_eq!(cookie_summary(&hop), None);

    let hop = hop
        .with_cookie("a", "1")
        .with_cookie("b", "2")
        .with_cookie("c", "3");
    assert_eq!(cookie_summary(&hop).as_deref(), Some("(cookies: 3)"));
}

#[test]
fn test_summarize_counts_final_hop() {
    let chain = TraceChain::new(
        vec![
            HopRecord::new(301, "http://a.test/", ms(10)),
            HopRecord::new(302, "http://b.test/", ms(10)),
        ],
        HopRecord::new(404, "http://c.test/", ms(10)),
    );
    let summary = summarize(&chain);
    assert_eq!(summary.hop_count, 3);
    assert_eq!(summary.final_status, 404);
    assert_eq!(summary.total_elapsed_ms, 30);

    let direct = TraceChain::new(Vec::new(), HopRecord::new(200, "http://a.test/", ms(10)));
    assert_eq!(summarize(&direct).hop_count, 1);
}

#[tokio::test]
async fn test_resolve_host_ip_uses_registrable_domain() {
    let extractor = test_extractor();
    let ip = IpAddr::V4(Ipv4Addr::new(103, 102, 166, 224));
    let resolver = StaticResolver::new().with_entry("wikipedia.org", ip);

    let resolved = resolve_host_ip(
        &extractor,
        &resolver,
        "https://en.wikipedia.org/wiki/Domain_Name_System",
    )
    .await;
    assert_eq!(resolved, Some(ip));
}

#[tokio::test]
async fn test_resolve_host_ip_failure_is_absent() {
    let extractor = test_extractor();
    let resolver = StaticResolver::new();
    assert_eq!(
        resolve_host_ip(&extractor, &resolver, "https://unknown.example.com/").await,
        None
    );
    assert_eq!(resolve_host_ip(&extractor, &resolver, "not a url").await, None);
}

#[tokio::test]
async fn test_resolve_host_ip_literal_skips_lookup() {
    let extractor = test_extractor();
    let resolver = StaticResolver::new();
    assert_eq!(
        resolve_host_ip(&extractor, &resolver, "http://127.0.0.1:8080/x").await,
        Some(IpAddr::V4(Ipv4Addr::LOCALHOST))
    );
}

#[tokio::test]
async fn test_resolve_chain_addresses_one_per_hop() {
    let extractor = test_extractor();
    let ip = IpAddr::V4(Ipv4Addr::new(93, 184, 215, 14));
    let resolver = StaticResolver::new().with_entry("example.com", ip);
    let chain = TraceChain::new(
        vec![
            HopRecord::new(301, "http://example.com/", ms(10)),
            HopRecord::new(302, "https://www.example.com/", ms(10)),
        ],
        HopRecord::new(200, "https://other.test/", ms(10)),
    );

    let addresses = resolve_chain_addresses(&extractor, &resolver, &chain).await;
    assert_eq!(addresses, vec![Some(ip), Some(ip), None]);
}

/// Counts lookups before delegating to a fixed table.
struct CountingResolver {
    inner: StaticResolver,
    calls: Cell<usize>,
}

impl HostResolver for CountingResolver {
    async fn resolve(&self, host: &str) -> anyhow::Result<IpAddr> {
        self.calls.set(self.calls.get() + 1);
        self.inner.resolve(host).await
    }
}

#[tokio::test]
async fn test_resolve_chain_addresses_looks_up_each_host_once() {
    let extractor = test_extractor();
    let ip = IpAddr::V4(Ipv4Addr::new(93, 184, 215, 14));
    let resolver = CountingResolver {
        inner: StaticResolver::new().with_entry("example.com", ip),
        calls: Cell::new(0),
    };
    let chain = TraceChain::new(
        vec![
            HopRecord::new(301, "http://example.com/", ms(10)),
            HopRecord::new(302, "https://example.com/login", ms(10)),
            HopRecord::new(302, "http://127.0.0.1/", ms(10)),
        ],
        HopRecord::new(200, "https://EXAMPLE.com/home", ms(10)),
    );

    let addresses = resolve_chain_addresses(&extractor, &resolver, &chain).await;
    assert_eq!(
        addresses,
        vec![Some(ip), Some(ip), Some(IpAddr::V4(Ipv4Addr::LOCALHOST)), Some(ip)]
    );
    assert_eq!(resolver.calls.get(), 1);
}
