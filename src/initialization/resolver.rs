//! DNS resolver initialization.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::debug;

/// Initializes the DNS resolver for hop address lookups.
///
/// Prefers the system configuration (`/etc/resolv.conf` or the platform
/// equivalent) so results match what the HTTP client itself sees, and falls
/// back to the resolver's default upstream servers when the system
/// configuration cannot be read or lists no name servers.
pub fn init_resolver() -> TokioAsyncResolver {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, opts)) if !config.name_servers().is_empty() => (config, opts),
        Ok(_) => {
            debug!("System DNS configuration has no name servers, using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }
        Err(e) => {
            debug!("Falling back to default DNS configuration: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 2;

    TokioAsyncResolver::tokio(config, opts)
}
