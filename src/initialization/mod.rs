//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client (redirects disabled)
//! - DNS resolver
//! - The live collaborator set used by the feature extractor

mod client;
mod logger;
mod resolver;

use std::sync::Arc;

use crate::config::Config;
use crate::dns::HickoryDns;
use crate::error_handling::InitializationError;
use crate::fetch::ReqwestProbe;
use crate::lookup::{Collaborators, SystemClock};
use crate::whois::WhoisServiceLookup;

// Re-export public API
pub use client::init_redirect_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Builds the collaborators described by `config`.
///
/// With `config.offline` set, every lookup fails immediately and the external
/// signals take their fallback values.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
pub fn init_collaborators(config: &Config) -> Result<Collaborators, InitializationError> {
    if config.offline {
        log::info!("Offline mode: WHOIS, DNS and HTTP lookups are disabled");
        return Ok(Collaborators::offline());
    }

    let client = init_redirect_client(config)?;
    Ok(Collaborators {
        whois: Arc::new(WhoisServiceLookup::new()),
        dns: Arc::new(HickoryDns::new(init_resolver())),
        http: Arc::new(ReqwestProbe::new(client)),
        clock: Arc::new(SystemClock),
    })
}
