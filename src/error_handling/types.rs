//! Error type definitions.
//!
//! This module defines the error types used throughout the crate and the
//! categories used to count them.

use std::time::Duration;

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

/// A failed WHOIS, DNS or HTTP lookup.
///
/// Lookup errors never leave the signal that issued the lookup: each one is
/// converted into that signal's fallback value.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The lookup did not complete within its time budget.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        /// Name of the operation that timed out
        operation: &'static str,
        /// Time budget that was exceeded
        after: Duration,
    },

    /// DNS resolution failed or returned no addresses.
    #[error("DNS lookup failed: {0}")]
    Dns(String),

    /// WHOIS/RDAP lookup failed.
    #[error("WHOIS lookup failed: {0}")]
    Whois(String),

    /// HTTP request failed (connect, TLS, body, status).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// A redirect response carried an unusable `Location` header.
    #[error("Invalid redirect: {0}")]
    InvalidRedirect(String),

    /// The lookup succeeded but lacked a field the signal needs.
    #[error("Missing {0} in lookup response")]
    MissingData(&'static str),

    /// Network lookups are disabled.
    #[error("Network lookups are disabled")]
    Offline,
}

impl LookupError {
    /// Returns the counting category for this error.
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Timeout { .. } => LookupErrorKind::Timeout,
            LookupError::Dns(_) => LookupErrorKind::Dns,
            LookupError::Whois(_) => LookupErrorKind::Whois,
            LookupError::Http(_) | LookupError::InvalidRedirect(_) => LookupErrorKind::Http,
            LookupError::MissingData(_) => LookupErrorKind::MissingData,
            LookupError::Offline => LookupErrorKind::Offline,
        }
    }
}

/// Categories of lookup failures, used for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, strum_macros::AsRefStr)]
pub enum LookupErrorKind {
    /// Time budget exceeded
    Timeout,
    /// Resolution failure
    Dns,
    /// Registry failure
    Whois,
    /// Transport or protocol failure
    Http,
    /// Incomplete response
    MissingData,
    /// Lookups disabled
    Offline,
}

/// The three terminal outcomes of a feature extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, strum_macros::AsRefStr)]
pub enum OutcomeKind {
    /// The URL could not be normalized
    Invalid,
    /// The strict heuristic declared the URL phishing
    StrictPhishing,
    /// Every signal was evaluated
    Features,
}
