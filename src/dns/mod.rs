//! Forward DNS resolution.
//!
//! Backs the `DNSRecord` signal with an async `hickory-resolver` lookup.

use std::net::IpAddr;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;
use crate::lookup::DnsLookup;

/// Live resolver backed by `hickory-resolver`.
#[derive(Clone)]
pub struct HickoryDns {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryDns {
    /// Wraps an initialized resolver (see [`crate::initialization::init_resolver`]).
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }

    async fn resolve_host(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        let response = self
            .resolver
            .lookup_ip(host)
            .await
            .map_err(|e| LookupError::Dns(e.to_string()))?;
        let addresses: Vec<IpAddr> = response.iter().collect();
        if addresses.is_empty() {
            return Err(LookupError::Dns(format!("no addresses found for {host}")));
        }
        Ok(addresses)
    }
}

impl DnsLookup for HickoryDns {
    fn resolve<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Vec<IpAddr>, LookupError>> {
        self.resolve_host(host).boxed()
    }
}
