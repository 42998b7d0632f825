//! HTTP redirect chain resolution.
//!
//! The client is built with redirects disabled, so the chain is followed here
//! one request at a time and every response is recorded as a hop.

use std::time::Instant;

use log::{debug, warn};
use reqwest::{Method, Url};

use super::hop::hop_from_response;
use crate::config::REDIRECT_STATUS_CODES;
use crate::error_handling::{categorize_reqwest_error, TraceError};
use crate::models::TraceChain;

/// Follows the redirect chain starting at `start_url`.
///
/// Statuses 301, 302, 303, 307 and 308 carrying a `Location` header are
/// followed; relative targets are resolved against the current URL. A
/// redirect status without `Location` ends the chain.
///
/// # Errors
///
/// Transport failures are categorized into `TraceError` variants. Following
/// more than `max_redirects` redirects yields `TraceError::TooManyRedirects`.
pub async fn fetch_chain(
    client: &reqwest::Client,
    start_url: &Url,
    max_redirects: usize,
) -> Result<TraceChain, TraceError> {
    let mut redirects = Vec::new();
    let mut current = start_url.clone();

    loop {
        let started = Instant::now();
        let response = client
            .request(Method::GET, current.clone())
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(current.as_str(), e))?;
        let elapsed = started.elapsed();

        let hop = hop_from_response(&Method::GET, &response, elapsed);
        debug!(
            "{} {} -> {} in {}ms",
            hop.method,
            hop.url,
            hop.status,
            elapsed.as_millis()
        );

        match redirect_target(&current, &response)? {
            Some(next) => {
                redirects.push(hop);
                if redirects.len() > max_redirects {
                    return Err(TraceError::TooManyRedirects(max_redirects));
                }
                debug!("Following redirect to {next}");
                current = next;
            }
            None => return Ok(TraceChain::new(redirects, hop)),
        }
    }
}

/// Where `response` redirects to, if anywhere.
fn redirect_target(current: &Url, response: &reqwest::Response) -> Result<Option<Url>, TraceError> {
    let status_code = response.status().as_u16();
    if !REDIRECT_STATUS_CODES.contains(&status_code) {
        return Ok(None);
    }

    let Some(loc) = response.headers().get(reqwest::header::LOCATION) else {
        warn!("Redirect status {status_code} for {current} but no Location header");
        return Ok(None);
    };

    let invalid = || TraceError::Redirect {
        url: current.to_string(),
        location: String::from_utf8_lossy(loc.as_bytes()).into_owned(),
    };
    let loc = loc.to_str().map_err(|_| invalid())?;
    // join() handles both absolute and relative Location values
    current.join(loc).map(Some).map_err(|_| invalid())
}
