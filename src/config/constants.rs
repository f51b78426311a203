//! Configuration constants.
//!
//! This module defines the timeouts, thresholds and limits used throughout
//! feature extraction.

// Network operation timeouts
/// HTTP timeout for the favicon probe in seconds
pub const FAVICON_TIMEOUT_SECS: u64 = 3;
/// HTTP timeout for the redirect probe in seconds
pub const REDIRECT_TIMEOUT_SECS: u64 = 4;
/// WHOIS/RDAP lookup timeout in seconds
/// Registrars are slow and rate limited; anything longer than this is treated as a failure
pub const WHOIS_TIMEOUT_SECS: u64 = 5;
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s, 3s provides good buffer while failing fast
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Default per-request timeout for the shared HTTP client in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;
/// Maximum response body size in bytes read by the favicon probe (2MB)
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length accepted by the CLI (2048 characters).
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Lexical thresholds
/// URLs shorter than this are considered benign by the length signal
pub const SHORT_URL_MAX_LEN: usize = 54;
/// URLs longer than this are considered suspicious by the length signal
pub const LONG_URL_MIN_LEN: usize = 75;
/// Shannon entropy (bits) above which the whole URL is considered abnormal
pub const ABNORMAL_URL_ENTROPY: f64 = 4.0;

// Strict heuristic thresholds
/// Risk score at or above which a URL is declared phishing outright
pub const STRICT_THRESHOLD: u32 = 4;
/// Shannon entropy (bits) of the hostname above which the entropy rule fires
pub const HOSTNAME_ENTROPY_THRESHOLD: f64 = 3.6;
/// Number of decimal digits in the hostname above which the digit rule fires
pub const HOSTNAME_DIGIT_THRESHOLD: usize = 5;

// Registry signals
/// Minimum registration span and minimum age (in days) for a domain to count as established
pub const MIN_REGISTRATION_DAYS: i64 = 365;

/// Default concurrency for the CLI batch mode
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;
