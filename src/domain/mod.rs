//! Registrable-domain extraction.
//!
//! Hop addresses are resolved against the registrable domain of each URL
//! (e.g. "wikipedia.org" for "https://en.wikipedia.org/wiki/DNS"), using the
//! Public Suffix List to handle multi-part suffixes such as "co.uk".

use anyhow::{Context, Result};
use tldextract::TldExtractor;

/// Extracts the registrable domain from a URL using tldextract.
///
/// # Returns
///
/// The registrable domain (e.g., "example.com" from "https://www.example.com/path")
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, if the URL is an IP address,
/// or if domain extraction fails.
pub fn extract_domain(extractor: &TldExtractor, url: &str) -> Result<String> {
    // tldextract is lenient, so validate the URL first
    let parsed = url::Url::parse(url).with_context(|| format!("Failed to parse URL: {}", url))?;

    let host = match parsed.host() {
        Some(url::Host::Domain(host)) => host,
        Some(url::Host::Ipv4(_)) | Some(url::Host::Ipv6(_)) => {
            return Err(anyhow::anyhow!(
                "IP addresses do not have registrable domains: {}",
                url
            ));
        }
        None => return Err(anyhow::anyhow!("URL '{}' has no host component", url)),
    };

    let result = extractor
        .extract(host)
        .with_context(|| format!("Failed to extract domain from URL: {}", url))?;

    match (result.domain, result.suffix) {
        (Some(domain), Some(suffix)) => Ok(format!("{}.{}", domain, suffix)),
        (Some(domain), None) => Ok(domain),
        (None, Some(suffix)) => Ok(suffix),
        (None, None) => Err(anyhow::anyhow!("No domain or suffix found in URL: {}", url)),
    }
}
