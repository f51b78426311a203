//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT,
};
use crate::signals::external::SignalTimeouts;

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

/// Extraction configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// by library callers.
///
/// # Examples
///
/// ```no_run
/// use phishing_features::Config;
///
/// let config = Config {
///     urls: vec!["example.com".to_string()],
///     offline: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "phishing_features",
    version,
    about = "Extracts phishing-classifier feature vectors from URLs"
)]
pub struct Config {
    /// URLs to extract features from (use `-` to read from stdin)
    pub urls: Vec<String>,

    /// File to read URLs from, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Upper bound in seconds on any single WHOIS, DNS or HTTP lookup
    ///
    /// Lowers the built-in per-signal budgets (WHOIS 5 s, redirect 4 s,
    /// favicon 3 s, DNS 3 s) that exceed it; also the HTTP client's timeout.
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum number of URLs extracted concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Skip WHOIS, DNS and HTTP lookups (external signals take their fallback values)
    #[arg(long)]
    pub offline: bool,

    /// Log a summary of outcomes and lookup failures at the end of the run
    #[arg(long)]
    pub show_stats: bool,
}

impl Config {
    /// Per-signal time budgets, capped at `timeout_seconds`.
    pub fn signal_timeouts(&self) -> SignalTimeouts {
        SignalTimeouts::default().capped_at(Duration::from_secs(self.timeout_seconds))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            file: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            offline: false,
            show_stats: false,
        }
    }
}
