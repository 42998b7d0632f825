//! Per-hop header dump.

use std::io::{self, Write};
use std::net::IpAddr;

use colored::Color;
use reqwest::StatusCode;

use super::{address_at, hop_headers, render_ip, TraceReporter};
use crate::config::{HEADER_LOCATION, HEADER_SET_COOKIE};
use crate::models::{HopHeaders, TraceChain};

/// One header list per hop, redirects first and the final response last.
pub fn header_maps(chain: &TraceChain) -> Vec<&HopHeaders> {
    hop_headers(chain).collect()
}

/// `"<code> <reason>"`, or just the code for unregistered statuses.
fn status_label(status: u16) -> String {
    match StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}

impl TraceReporter {
    /// Writes every hop's headers, its cookies and redirect target, then the
    /// final destination with its real status and address.
    ///
    /// Redirect targets are annotated with the final response's address.
    pub fn format_detailed<W: Write>(
        &self,
        chain: &TraceChain,
        addresses: &[Option<IpAddr>],
        out: &mut W,
    ) -> io::Result<()> {
        let final_hop = chain.final_hop();
        let final_ip = render_ip(address_at(addresses, chain.len() - 1));
        let label = |text: &str| self.paint(text, Color::BrightCyan);

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.paint("[!]    START FULL OUTPUT       [!]", Color::White)
        )?;

        for (index, (hop, headers)) in chain.hops().iter().zip(header_maps(chain)).enumerate() {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                self.paint(
                    &format!("********* HOP NUMBER: {} **********", index + 1),
                    Color::Magenta
                )
            )?;
            writeln!(out)?;

            self.section(out, "HEADERS", Color::Yellow)?;
            for (name, value) in headers.iter() {
                writeln!(out, "{} {value}", label(&format!("{name}:")))?;
            }
            writeln!(out)?;

            if let Some(cookie) = headers.joined(HEADER_SET_COOKIE) {
                self.section(out, "COOKIES", Color::Green)?;
                writeln!(out, "{} {cookie}", label("Cookie:"))?;
                writeln!(out)?;
            }

            if let Some(location) = headers.get(HEADER_LOCATION) {
                self.section(out, "REDIRECTION", Color::Blue)?;
                // The URL that answered with Location, not the final URL
                writeln!(out, "{} {}", label("Request for:"), hop.url)?;
                let line = format!(
                    "{} {location} {} {final_ip}",
                    label("Redirected to:"),
                    self.paint("=>", Color::Red)
                );
                writeln!(out, "{}", line.trim_end())?;
                writeln!(out)?;
            }
        }

        writeln!(out, "{}", self.paint("!! FINAL DESTINATION !!", Color::Yellow))?;
        writeln!(
            out,
            "{} {}",
            self.paint(&format!("[{}]", status_label(final_hop.status)), Color::White),
            final_hop.url
        )?;
        let ip_line = format!("{} {final_ip}", self.paint("IP Address:", Color::White));
        writeln!(out, "{}", ip_line.trim_end())
    }
}
