//! External lookup collaborators.
//!
//! The external signals never talk to the network directly. They go through
//! these traits so that WHOIS, DNS and HTTP can be swapped for mocks in tests
//! or disabled entirely with [`Offline`].
//!
//! Live implementations:
//! - [`crate::whois::WhoisServiceLookup`] (WHOIS/RDAP via `whois-service`)
//! - [`crate::dns::HickoryDns`] (forward resolution via `hickory-resolver`)
//! - [`crate::fetch::ReqwestProbe`] (HTTP GET with redirect tracking via `reqwest`)

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::{self, BoxFuture};
use futures::FutureExt;

use crate::error_handling::LookupError;

/// Registration dates of a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    /// Domain creation date
    pub creation_date: Option<DateTime<Utc>>,
    /// Domain expiration date
    pub expiration_date: Option<DateTime<Utc>>,
    /// Registrar name
    pub registrar: Option<String>,
}

/// What an HTTP GET observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpSnapshot {
    /// URL of the final response
    pub final_url: String,
    /// URLs that answered with a redirect, in order
    pub redirects: Vec<String>,
    /// Response body of the final response (possibly truncated)
    pub body: String,
}

/// WHOIS/RDAP registry lookup.
pub trait WhoisLookup: Send + Sync {
    /// Looks up the registration record of `domain`.
    fn lookup<'a>(&'a self, domain: &'a str) -> BoxFuture<'a, Result<WhoisRecord, LookupError>>;
}

/// Forward DNS resolution.
pub trait DnsLookup: Send + Sync {
    /// Resolves `host` to its addresses.
    fn resolve<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Vec<IpAddr>, LookupError>>;
}

/// HTTP GET that follows redirects and records them.
pub trait HttpProbe: Send + Sync {
    /// Fetches `url`, giving up after `timeout`.
    fn get<'a>(
        &'a self,
        url: &'a str,
        timeout: Duration,
    ) -> BoxFuture<'a, Result<HttpSnapshot, LookupError>>;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Collaborator that fails every lookup with [`LookupError::Offline`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl WhoisLookup for Offline {
    fn lookup<'a>(&'a self, _domain: &'a str) -> BoxFuture<'a, Result<WhoisRecord, LookupError>> {
        future::ready(Err(LookupError::Offline)).boxed()
    }
}

impl DnsLookup for Offline {
    fn resolve<'a>(&'a self, _host: &'a str) -> BoxFuture<'a, Result<Vec<IpAddr>, LookupError>> {
        future::ready(Err(LookupError::Offline)).boxed()
    }
}

impl HttpProbe for Offline {
    fn get<'a>(
        &'a self,
        _url: &'a str,
        _timeout: Duration,
    ) -> BoxFuture<'a, Result<HttpSnapshot, LookupError>> {
        future::ready(Err(LookupError::Offline)).boxed()
    }
}

/// The set of collaborators used by one extractor.
#[derive(Clone)]
pub struct Collaborators {
    /// Registry lookups
    pub whois: Arc<dyn WhoisLookup>,
    /// Resolver
    pub dns: Arc<dyn DnsLookup>,
    /// HTTP client
    pub http: Arc<dyn HttpProbe>,
    /// Time source for domain age
    pub clock: Arc<dyn Clock>,
}

impl Collaborators {
    /// Collaborators that perform no network access; every external signal takes its fallback.
    pub fn offline() -> Self {
        Self {
            whois: Arc::new(Offline),
            dns: Arc::new(Offline),
            http: Arc::new(Offline),
            clock: Arc::new(SystemClock),
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
