// Domain module tests.

use super::*;
use tldextract::TldOption;

fn test_extractor() -> TldExtractor {
    TldExtractor::new(TldOption::default())
}

#[test]
fn test_extract_domain_basic() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://www.example.com/path").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_with_port() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://www.example.com:8080/path").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_with_query_and_fragment() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://example.com/path?query=1#fragment").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_strips_subdomains() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://en.wikipedia.org/wiki/Domain_Name_System").unwrap(),
        "wikipedia.org"
    );
    assert_eq!(
        extract_domain(&extractor, "https://a.b.c.example.com").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_uk_domain() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://www.example.co.uk").unwrap(),
        "example.co.uk"
    );
}

#[test]
fn test_extract_domain_invalid_url() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "not-a-url").is_err());
}

#[test]
fn test_extract_domain_url_without_host() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "file:///path/to/file").is_err());
}

#[test]
fn test_extract_domain_rejects_ip_addresses() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "http://127.0.0.1:8080/").is_err());
    assert!(extract_domain(&extractor, "http://[::1]/").is_err());
}
