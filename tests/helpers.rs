// Shared test helpers: scripted WHOIS, DNS and HTTP collaborators.
//
// Each mock counts its calls and remembers what it was asked for, so tests can
// assert both the resulting vector and which lookups actually happened.

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use futures::future::BoxFuture;
use futures::FutureExt;

use phishing_features::lookup::{HttpSnapshot, WhoisRecord};
use phishing_features::{Clock, Collaborators, DnsLookup, HttpProbe, LookupError, WhoisLookup};

/// Midnight UTC on the given date.
#[allow(dead_code)] // Used by other test files
pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// WHOIS mock returning a fixed record, or a WHOIS error when `record` is `None`.
#[derive(Default)]
pub struct MockWhois {
    record: Option<WhoisRecord>,
    pub calls: AtomicUsize,
    pub domains: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockWhois {
    pub fn returning(record: WhoisRecord) -> Self {
        Self {
            record: Some(record),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WhoisLookup for MockWhois {
    fn lookup<'a>(&'a self, domain: &'a str) -> BoxFuture<'a, Result<WhoisRecord, LookupError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.domains.lock().unwrap().push(domain.to_string());
        let result = self
            .record
            .clone()
            .ok_or_else(|| LookupError::Whois(format!("no record for {domain}")));
        async move { result }.boxed()
    }
}

/// DNS mock; an empty address list fails the lookup.
#[derive(Default)]
pub struct MockDns {
    addresses: Vec<IpAddr>,
    pub calls: AtomicUsize,
    pub hosts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockDns {
    pub fn resolving(addresses: &[&str]) -> Self {
        Self {
            addresses: addresses.iter().map(|a| a.parse().unwrap()).collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DnsLookup for MockDns {
    fn resolve<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Result<Vec<IpAddr>, LookupError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.hosts.lock().unwrap().push(host.to_string());
        let result = if self.addresses.is_empty() {
            Err(LookupError::Dns(format!("NXDOMAIN for {host}")))
        } else {
            Ok(self.addresses.clone())
        };
        async move { result }.boxed()
    }
}

/// HTTP mock returning a fixed snapshot, optionally after a delay.
#[derive(Default)]
pub struct MockHttp {
    snapshot: HttpSnapshot,
    delay: Option<Duration>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockHttp {
    pub fn returning(body: &str, redirects: &[&str]) -> Self {
        Self {
            snapshot: HttpSnapshot {
                final_url: String::new(),
                redirects: redirects.iter().map(|r| r.to_string()).collect(),
                body: body.to_string(),
            },
            ..Default::default()
        }
    }

    /// Answers only after `delay`; pair with a paused Tokio clock.
    pub fn hanging(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::returning("<link rel=\"icon\" href=\"/favicon.ico\">", &[])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpProbe for MockHttp {
    fn get<'a>(
        &'a self,
        _url: &'a str,
        _timeout: Duration,
    ) -> BoxFuture<'a, Result<HttpSnapshot, LookupError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async move {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(self.snapshot.clone())
        }
        .boxed()
    }
}

/// Clock frozen at one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Mocks bundled with the collaborator set built from them.
pub struct Mocks {
    pub whois: Arc<MockWhois>,
    pub dns: Arc<MockDns>,
    pub http: Arc<MockHttp>,
}

#[allow(dead_code)]
impl Mocks {
    pub fn new(whois: MockWhois, dns: MockDns, http: MockHttp) -> Self {
        Self {
            whois: Arc::new(whois),
            dns: Arc::new(dns),
            http: Arc::new(http),
        }
    }

    /// Every lookup succeeds with benign data for a long-established domain.
    pub fn benign() -> Self {
        Self::new(
            MockWhois::returning(WhoisRecord {
                creation_date: Some(date(2000, 1, 1)),
                expiration_date: Some(date(2030, 1, 1)),
                registrar: Some("Example Registrar".to_string()),
            }),
            MockDns::resolving(&["93.184.216.34"]),
            MockHttp::returning("<link rel=\"icon\" href=\"/favicon.ico\">", &[]),
        )
    }

    pub fn total_calls(&self) -> usize {
        self.whois.calls() + self.dns.calls() + self.http.calls()
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            whois: self.whois.clone(),
            dns: self.dns.clone(),
            http: self.http.clone(),
            clock: Arc::new(FixedClock(date(2026, 1, 1))),
        }
    }
}
