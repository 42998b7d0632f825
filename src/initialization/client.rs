//! HTTP client initialization.

use std::time::Duration;

use log::debug;
use rand::seq::IndexedRandom;
use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS, USER_AGENTS};
use crate::error_handling::InitializationError;

/// Picks the User-Agent for this trace.
///
/// Returns the configured value when there is one, otherwise a random entry
/// from [`USER_AGENTS`].
pub fn pick_user_agent(configured: Option<&str>) -> String {
    match configured {
        Some(ua) => ua.to_string(),
        None => USER_AGENTS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(USER_AGENTS[0])
            .to_string(),
    }
}

/// Initializes the HTTP client used to walk the redirect chain.
///
/// Redirects are disabled: the chain is followed manually so that every
/// intermediate response (status, headers, cookies, timing) can be recorded.
/// Each request carries the User-Agent picked by [`pick_user_agent`], and
/// cookies set by one hop are sent on the following ones.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let user_agent = pick_user_agent(config.user_agent.as_deref());
    debug!("Using User-Agent: {user_agent}");

    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(user_agent)
        .cookie_store(true)
        .build()?;
    Ok(client)
}
