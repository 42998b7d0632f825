//! Error categorization.
//!
//! Maps transport errors onto [`TraceError`] variants.

use super::types::TraceError;

/// Categorizes a `reqwest::Error` raised while requesting `url`.
///
/// Timeouts are checked before connection failures because a connect timeout
/// reports both.
pub fn categorize_reqwest_error(url: &str, error: reqwest::Error) -> TraceError {
    let url = url.to_string();
    if error.is_builder() {
        TraceError::InvalidUrl {
            url,
            reason: error.to_string(),
        }
    } else if error.is_timeout() {
        TraceError::Timeout { url, source: error }
    } else if error.is_connect() {
        TraceError::Connect { url, source: error }
    } else if error.is_status() || error.is_redirect() || error.is_body() || error.is_decode() {
        TraceError::Status { url, source: error }
    } else {
        TraceError::Request { url, source: error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::TraceErrorKind;

    #[tokio::test]
    async fn test_connection_refused_is_connect_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let url = "http://127.0.0.1:9/";
        let client = reqwest::Client::new();
        let err = client
            .get(url)
            .send()
            .await
            .expect_err("request to closed port should fail");
        let trace_err = categorize_reqwest_error(url, err);
        assert_eq!(trace_err.kind(), TraceErrorKind::Connect);
        assert!(trace_err.to_string().contains(url));
    }

    #[tokio::test]
    async fn test_builder_error_is_invalid_url() {
        let url = "http://exa mple.com/";
        let client = reqwest::Client::new();
        let err = client
            .get(url)
            .send()
            .await
            .expect_err("malformed URL should fail");
        let trace_err = categorize_reqwest_error(url, err);
        assert_eq!(trace_err.kind(), TraceErrorKind::InvalidUrl);
    }
}
