//! Orchestration of a single trace.

use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::fetch::{fetch_chain, normalize_url};
use crate::initialization::{init_client, init_extractor, init_resolver};
use crate::metrics::{resolve_chain_addresses, summarize};
use crate::models::TraceSummary;
use crate::report::{ReporterConfig, TraceReporter};

/// Traces `config.url` and writes the report to `out`.
///
/// The summary is always written; the detailed dump follows when
/// `config.full` is set.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the request chain fails
/// (the root cause is a [`TraceError`](crate::TraceError)), resource
/// initialization fails, or writing to `out` fails. Address lookups never
/// fail the trace.
pub async fn run_trace<W: Write>(config: &Config, out: &mut W) -> Result<TraceSummary> {
    let url = normalize_url(&config.url)?;
    info!("Tracing {url}");

    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let resolver = init_resolver();
    let extractor = init_extractor();

    let chain = fetch_chain(&client, &url, config.max_redirects).await?;
    info!("Reached {} after {} hops", chain.final_hop().url, chain.len());

    let addresses = resolve_chain_addresses(&extractor, &resolver, &chain).await;

    let reporter = TraceReporter::new(ReporterConfig {
        banner_version: config.banner_version.clone(),
        color: config.color,
    });
    reporter
        .format_summary(&chain, &addresses, out)
        .context("Failed to write summary")?;
    if config.full {
        reporter
            .format_detailed(&chain, &addresses, out)
            .context("Failed to write detailed report")?;
    }
    out.flush().context("Failed to flush output")?;

    Ok(summarize(&chain))
}
