// whois/mod.rs
// WHOIS/RDAP domain lookup using whois-service crate

mod parse;

use futures::future::BoxFuture;
use futures::FutureExt;
use whois_service::WhoisClient;

use crate::error_handling::LookupError;
use crate::lookup::{WhoisLookup, WhoisRecord};

/// Live registry lookup backed by the `whois-service` crate.
///
/// The crate tries RDAP first and falls back to WHOIS, handling IANA bootstrap
/// for TLD discovery and per-server rate limiting. Results are not cached:
/// each extraction performs its own lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhoisServiceLookup;

impl WhoisServiceLookup {
    /// Creates the lookup.
    pub fn new() -> Self {
        Self
    }

    async fn lookup_record(&self, domain: &str) -> Result<WhoisRecord, LookupError> {
        log::debug!("Starting WHOIS lookup for domain: {}", domain);

        // Create a new client each time since it's lightweight
        let client = WhoisClient::new()
            .await
            .map_err(|e| LookupError::Whois(format!("failed to create WHOIS client: {e}")))?;

        match client.lookup(domain).await {
            Ok(response) => {
                log::debug!("WHOIS lookup successful for {}", domain);
                Ok(parse::convert_response(&response))
            }
            Err(e) => Err(LookupError::Whois(e.to_string())),
        }
    }
}

impl WhoisLookup for WhoisServiceLookup {
    fn lookup<'a>(&'a self, domain: &'a str) -> BoxFuture<'a, Result<WhoisRecord, LookupError>> {
        self.lookup_record(domain).boxed()
    }
}
