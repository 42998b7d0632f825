//! One line per hop, followed by the trace totals.

use std::io::{self, Write};
use std::net::IpAddr;

use colored::Color;

use super::{address_at, TraceReporter};
use crate::config::{LOGO, TOOL_NAME};
use crate::metrics::{cookie_summary, elapsed_millis, normalize_protocol_version, summarize};
use crate::models::{HopRecord, TraceChain};

impl TraceReporter {
    /// Writes the banner, a line for every redirect, a line for the final
    /// response and the totals line.
    ///
    /// `addresses` holds the resolved address of each hop in chain order;
    /// missing entries are left out of the line.
    pub fn format_summary<W: Write>(
        &self,
        chain: &TraceChain,
        addresses: &[Option<IpAddr>],
        out: &mut W,
    ) -> io::Result<()> {
        self.write_banner(out)?;

        let final_index = chain.len() - 1;
        for (index, hop) in chain.redirects().iter().enumerate() {
            writeln!(out, "{}", self.hop_line(hop, address_at(addresses, index)))?;
        }
        writeln!(
            out,
            "{}",
            self.hop_line(chain.final_hop(), address_at(addresses, final_index))
        )?;

        writeln!(out)?;
        writeln!(out, "{}", self.totals_line(chain))
    }

    fn write_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let banner = format!("{LOGO}  v {}", self.config().banner_version);
        writeln!(out, "{}", self.paint(&banner, Color::White))?;
        writeln!(out)
    }

    /// `[status] HTTP/<version> <method> <ip> <url> (<ms>ms) (cookies: N)`
    pub(crate) fn hop_line(&self, hop: &HopRecord, ip: Option<IpAddr>) -> String {
        let mut parts = vec![
            self.paint(&format!("[{}]", hop.status), Color::Green),
            self.paint(
                &format!("HTTP/{}", normalize_protocol_version(hop.version)),
                Color::Yellow,
            ),
            self.paint(&hop.method, Color::Blue),
        ];
        if let Some(ip) = ip {
            parts.push(self.paint(&ip.to_string(), Color::Red));
        }
        parts.push(self.paint(&hop.url, Color::White));
        parts.push(self.paint(&format!("({}ms)", elapsed_millis(hop.elapsed)), Color::Cyan));
        if let Some(cookies) = cookie_summary(hop) {
            parts.push(self.paint(&cookies, Color::BrightGreen));
        }
        parts.join(" ")
    }

    fn totals_line(&self, chain: &TraceChain) -> String {
        let summary = summarize(chain);
        let elapsed = self.paint(&format!("{}ms", summary.total_elapsed_ms), Color::Cyan);
        let hops = self.paint(&summary.hop_count.to_string(), Color::Cyan);
        if summary.final_status == 404 {
            format!(
                "{TOOL_NAME} Returned {} in {elapsed} over {hops} hops",
                self.paint("404", Color::Red)
            )
        } else {
            format!("{TOOL_NAME} finished in {elapsed} over {hops} hops")
        }
    }
}
