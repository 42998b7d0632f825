//! Trace rendering.
//!
//! [`TraceReporter`] turns a [`TraceChain`](crate::models::TraceChain) and its
//! resolved hop addresses into text. The summary prints one line per hop, the
//! detailed report dumps every hop's headers. Both write to any
//! [`std::io::Write`] and produce identical bytes for identical input.

mod detailed;
mod summary;

use std::io::{self, Write};
use std::net::IpAddr;

use colored::{Color, Colorize};

use crate::config::TOOL_VERSION;
use crate::models::{HopHeaders, TraceChain};

pub use detailed::header_maps;

/// Reporter settings.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Version shown in the banner
    pub banner_version: String,
    /// Emit ANSI colors
    pub color: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            banner_version: TOOL_VERSION.to_string(),
            color: true,
        }
    }
}

/// Renders redirect traces.
#[derive(Debug, Clone, Default)]
pub struct TraceReporter {
    config: ReporterConfig,
}

impl TraceReporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.config.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn section<W: Write>(&self, out: &mut W, title: &str, color: Color) -> io::Result<()> {
        let bar = self.paint("##################################", color);
        writeln!(out, "{bar}")?;
        writeln!(out, "{title:^34}")?;
        writeln!(out, "{bar}")?;
        writeln!(out)
    }
}

/// Address of hop `index`, absent when unresolved or out of range.
fn address_at(addresses: &[Option<IpAddr>], index: usize) -> Option<IpAddr> {
    addresses.get(index).copied().flatten()
}

fn render_ip(ip: Option<IpAddr>) -> String {
    ip.map(|ip| ip.to_string()).unwrap_or_default()
}

/// Header list for every hop, borrowed from the chain.
fn hop_headers(chain: &TraceChain) -> impl Iterator<Item = &HopHeaders> {
    chain.hops().iter().map(|hop| &hop.headers)
}
