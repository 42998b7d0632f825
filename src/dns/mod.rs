//! Hostname resolution.
//!
//! Hop addresses are looked up through the [`HostResolver`] trait so the
//! reporter can be driven by the system resolver in the CLI and by a fixed
//! table in tests.

mod resolution;

// Re-export public API
pub use resolution::{resolve_host_to_ip, HostResolver, StaticResolver};
