//! Error type definitions.
//!
//! This module defines the error types used throughout the tracer.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures that stop a trace.
///
/// Each variant maps to one class of transport failure so that the CLI can
/// report it distinctly. None of them are retried.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The URL uses a scheme other than `http` or `https`.
    #[error("Schema error: only 'http://' and 'https://' are supported, got '{0}'")]
    InvalidScheme(String),

    /// The URL could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending input
        url: String,
        /// Parser message
        reason: String,
    },

    /// The TCP/TLS connection could not be established.
    #[error("Connection to {url} failed: {source}")]
    Connect {
        /// URL being requested
        url: String,
        /// Transport error
        #[source]
        source: ReqwestError,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out: {source}")]
    Timeout {
        /// URL being requested
        url: String,
        /// Transport error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with something that is not valid HTTP, or the
    /// request was rejected at the HTTP level.
    #[error("HTTP error for {url}: {source}")]
    Status {
        /// URL being requested
        url: String,
        /// Transport error
        #[source]
        source: ReqwestError,
    },

    /// A redirect response carried an unusable `Location` header.
    #[error("Redirect from {url} has an invalid Location '{location}'")]
    Redirect {
        /// URL that answered with the redirect
        url: String,
        /// Raw header value
        location: String,
    },

    /// The redirect limit was reached before a final response.
    #[error("Exceeded {0} redirects")]
    TooManyRedirects(usize),

    /// Any other transport failure.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// URL being requested
        url: String,
        /// Transport error
        #[source]
        source: ReqwestError,
    },
}

/// Coarse classification of [`TraceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TraceErrorKind {
    InvalidScheme,
    InvalidUrl,
    Connect,
    Timeout,
    Status,
    Redirect,
    TooManyRedirects,
    Request,
}

impl TraceErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceErrorKind::InvalidScheme => "Schema error",
            TraceErrorKind::InvalidUrl => "Invalid URL",
            TraceErrorKind::Connect => "Connection error",
            TraceErrorKind::Timeout => "Timeout",
            TraceErrorKind::Status => "HTTP error",
            TraceErrorKind::Redirect => "Redirect error",
            TraceErrorKind::TooManyRedirects => "Too many redirects",
            TraceErrorKind::Request => "Request error",
        }
    }
}

impl TraceError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> TraceErrorKind {
        match self {
            TraceError::InvalidScheme(_) => TraceErrorKind::InvalidScheme,
            TraceError::InvalidUrl { .. } => TraceErrorKind::InvalidUrl,
            TraceError::Connect { .. } => TraceErrorKind::Connect,
            TraceError::Timeout { .. } => TraceErrorKind::Timeout,
            TraceError::Status { .. } => TraceErrorKind::Status,
            TraceError::Redirect { .. } => TraceErrorKind::Redirect,
            TraceError::TooManyRedirects(_) => TraceErrorKind::TooManyRedirects,
            TraceError::Request { .. } => TraceErrorKind::Request,
        }
    }
}
