//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, MAX_REDIRECT_HOPS, TOOL_VERSION};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use http_tracer::Config;
///
/// let config = Config {
///     url: "example.com".to_string(),
///     full: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL to trace (scheme optional)
    pub url: String,

    /// Print the per-hop header dump after the summary
    pub full: bool,

    /// Fixed User-Agent; a random browser string is used when `None`
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Maximum number of redirects to follow
    pub max_redirects: usize,

    /// Emit ANSI colors in the report
    pub color: bool,

    /// Version shown in the banner
    pub banner_version: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            full: false,
            user_agent: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_redirects: MAX_REDIRECT_HOPS,
            color: true,
            banner_version: TOOL_VERSION.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// If the URL has no scheme, `http://` is prepended.
///
/// ```bash
/// http-tracer example.com
/// http-tracer https://bit.ly/something --full
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "http-tracer",
    version,
    about = "Returns the redirects on the way to the destination URL."
)]
pub struct Opt {
    /// URL to trace
    pub url: String,

    /// Print a detailed report on each hop along the path
    #[arg(short, long)]
    pub full: bool,

    /// HTTP User-Agent header value (default: random browser string)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            url: opt.url,
            full: opt.full,
            user_agent: opt.user_agent,
            timeout_seconds: opt.timeout_seconds,
            max_redirects: opt.max_redirects,
            color: !opt.no_color,
            log_level: opt.log_level,
            log_format: opt.log_format,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_format_debug() {
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.full);
        assert!(config.color);
        assert!(config.user_agent.is_none());
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.max_redirects, 30);
        assert_eq!(config.banner_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_opt_parses_url_and_full_flag() {
        let opt = Opt::parse_from(["http-tracer", "example.com", "-f"]);
        assert_eq!(opt.url, "example.com");
        assert!(opt.full);

        let opt = Opt::parse_from(["http-tracer", "--full", "example.com"]);
        assert!(opt.full);
    }

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::parse_from(["http-tracer", "example.com"]);
        assert!(!opt.full);
        assert!(!opt.no_color);
        assert_eq!(opt.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(opt.max_redirects, MAX_REDIRECT_HOPS);
        assert!(matches!(opt.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_opt_requires_url() {
        assert!(Opt::try_parse_from(["http-tracer"]).is_err());
    }

    #[test]
    fn test_config_from_opt() {
        let opt = Opt::parse_from([
            "http-tracer",
            "https://example.com",
            "--no-color",
            "--user-agent",
            "curl/8.0",
            "--max-redirects",
            "5",
        ]);
        let config = Config::from(opt);
        assert_eq!(config.url, "https://example.com");
        assert!(!config.color);
        assert_eq!(config.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(config.max_redirects, 5);
        assert_eq!(config.banner_version, TOOL_VERSION);
    }
}
