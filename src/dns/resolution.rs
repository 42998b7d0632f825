//! IP address resolution.

use std::collections::HashMap;
use std::future::Future;
use std::net::IpAddr;

use anyhow::{Error, Result};
use hickory_resolver::TokioAsyncResolver;

/// Forward lookup of a hostname to a single address.
pub trait HostResolver {
    /// Resolves `host` to its first address.
    fn resolve(&self, host: &str) -> impl Future<Output = Result<IpAddr>>;
}

/// Resolves a hostname to an IP address using DNS.
///
/// # Returns
///
/// The first IP address found, or an error if resolution fails.
///
/// # Errors
///
/// Returns an error if DNS resolution fails or no IP addresses are found.
pub async fn resolve_host_to_ip(host: &str, resolver: &TokioAsyncResolver) -> Result<IpAddr> {
    let response = resolver.lookup_ip(host).await.map_err(Error::new)?;
    response
        .iter()
        .next()
        .ok_or_else(|| Error::msg(format!("No IP addresses found for {host}")))
}

impl HostResolver for TokioAsyncResolver {
    async fn resolve(&self, host: &str) -> Result<IpAddr> {
        resolve_host_to_ip(host, self).await
    }
}

/// Resolver backed by a fixed hostname table.
///
/// Unknown hosts fail to resolve. Used for deterministic reports.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, IpAddr>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the address for `host`.
    pub fn with_entry(mut self, host: &str, ip: IpAddr) -> Self {
        self.entries.insert(host.to_ascii_lowercase(), ip);
        self
    }
}

impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> Result<IpAddr> {
        self.entries
            .get(&host.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("{host} is not in the static table"))
    }
}
