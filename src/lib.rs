//! http_tracer library: redirect chain tracing
//!
//! Follows the redirects of a URL and reports every hop: status code,
//! protocol version, method, resolved IP address, URL, elapsed time and
//! cookies, optionally followed by a per-hop header dump.
//!
//! # Example
//!
//! ```no_run
//! use http_tracer::{run_trace, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     url: "github.com".to_string(),
//!     full: true,
//!     ..Default::default()
//! };
//!
//! let summary = run_trace(&config, &mut std::io::stdout()).await?;
//! println!("{} hops", summary.hop_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod config;
pub mod dns;
mod domain;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod metrics;
pub mod models;
pub mod report;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{TraceError, TraceErrorKind};
pub use models::{HopHeaders, HopRecord, TraceChain, TraceSummary};
pub use report::{ReporterConfig, TraceReporter};
pub use run::run_trace;
