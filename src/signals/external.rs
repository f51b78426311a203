//! Signals backed by WHOIS, DNS and HTTP lookups.
//!
//! Every lookup runs under its own timeout and at most once per extraction.
//! A failed lookup is logged, counted, and replaced by the signal's
//! pessimistic fallback ([`SignalValue::SUSPICIOUS`]); it never reaches the
//! caller.

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;

use crate::config::{
    has_suspicious_tld, DNS_TIMEOUT_SECS, FAVICON_TIMEOUT_SECS, MIN_REGISTRATION_DAYS,
    REDIRECT_TIMEOUT_SECS, WHOIS_TIMEOUT_SECS,
};
use crate::domain::NormalizedUrl;
use crate::error_handling::{with_timeout, ExtractionStats, LookupError};
use crate::lookup::{Collaborators, WhoisRecord};
use crate::signals::SignalValue;

/// The two registry signals, derived from a single WHOIS lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrySignals {
    /// `Domain_registeration_length`
    pub registration_length: SignalValue,
    /// `age_of_domain`
    pub age_of_domain: SignalValue,
}

impl RegistrySignals {
    /// Both signals at their fallback value.
    pub const FALLBACK: RegistrySignals = RegistrySignals {
        registration_length: SignalValue::SUSPICIOUS,
        age_of_domain: SignalValue::SUSPICIOUS,
    };
}

/// Benign if the domain was registered for at least a year.
pub fn registration_length(record: &WhoisRecord) -> SignalValue {
    match (record.creation_date, record.expiration_date) {
        (Some(created), Some(expires)) => {
            SignalValue::benign_if((expires - created).num_days() >= MIN_REGISTRATION_DAYS)
        }
        _ => SignalValue::SUSPICIOUS,
    }
}

/// Benign if the domain was created at least a year before `now`.
pub fn age_of_domain(record: &WhoisRecord, now: DateTime<Utc>) -> SignalValue {
    match record.creation_date {
        Some(created) => SignalValue::benign_if((now - created).num_days() >= MIN_REGISTRATION_DAYS),
        None => SignalValue::SUSPICIOUS,
    }
}

/// Benign if the URL has no explicit port, or port 80 or 443.
///
/// A port that is not a decimal number in range is suspicious.
pub fn port(url: &NormalizedUrl) -> SignalValue {
    let allowed = match url.port.as_deref() {
        None => true,
        Some(port) => {
            port.bytes().all(|b| b.is_ascii_digit()) && matches!(port.parse::<u16>(), Ok(80 | 443))
        }
    };
    SignalValue::benign_if(allowed)
}

/// Crude traffic stand-in: suspicious TLDs are assumed to have no real traffic.
pub fn web_traffic(url: &NormalizedUrl) -> SignalValue {
    SignalValue::suspicious_if(has_suspicious_tld(&url.hostname))
}

/// Time budget of each network-backed signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTimeouts {
    /// WHOIS lookup feeding both registry signals
    pub whois: Duration,
    /// `Favicon` page fetch
    pub favicon: Duration,
    /// `Redirect` page fetch
    pub redirect: Duration,
    /// `DNSRecord` resolution
    pub dns: Duration,
}

impl Default for SignalTimeouts {
    fn default() -> Self {
        Self {
            whois: Duration::from_secs(WHOIS_TIMEOUT_SECS),
            favicon: Duration::from_secs(FAVICON_TIMEOUT_SECS),
            redirect: Duration::from_secs(REDIRECT_TIMEOUT_SECS),
            dns: Duration::from_secs(DNS_TIMEOUT_SECS),
        }
    }
}

impl SignalTimeouts {
    /// Clamps every budget to at most `cap`.
    pub fn capped_at(self, cap: Duration) -> Self {
        Self {
            whois: self.whois.min(cap),
            favicon: self.favicon.min(cap),
            redirect: self.redirect.min(cap),
            dns: self.dns.min(cap),
        }
    }
}

/// Runs the network-backed signals against one set of collaborators.
pub struct ExternalSignals<'a> {
    collaborators: &'a Collaborators,
    stats: &'a ExtractionStats,
    timeouts: SignalTimeouts,
}

impl<'a> ExternalSignals<'a> {
    /// Binds the signals to collaborators and a statistics sink.
    pub fn new(
        collaborators: &'a Collaborators,
        stats: &'a ExtractionStats,
        timeouts: SignalTimeouts,
    ) -> Self {
        Self {
            collaborators,
            stats,
            timeouts,
        }
    }

    fn fallback(&self, signal: &str, target: &str, error: LookupError) -> SignalValue {
        debug!("{signal} lookup for {target} failed, using fallback: {error}");
        self.stats.increment_lookup_failure(error.kind());
        SignalValue::SUSPICIOUS
    }

    /// Registration length and domain age from one WHOIS lookup of `domain`.
    pub async fn registry(&self, domain: &str) -> RegistrySignals {
        let result = with_timeout(
            "WHOIS lookup",
            self.timeouts.whois,
            self.collaborators.whois.lookup(domain),
        )
        .await;

        match result {
            Ok(record) => {
                if record.creation_date.is_none() {
                    self.fallback("WHOIS", domain, LookupError::MissingData("creation date"));
                    return RegistrySignals::FALLBACK;
                }
                RegistrySignals {
                    registration_length: registration_length(&record),
                    age_of_domain: age_of_domain(&record, self.collaborators.clock.now()),
                }
            }
            Err(e) => {
                self.fallback("WHOIS", domain, e);
                RegistrySignals::FALLBACK
            }
        }
    }

    /// Benign if the page body mentions `favicon` (case-insensitive).
    pub async fn favicon(&self, url: &str) -> SignalValue {
        let timeout = self.timeouts.favicon;
        match with_timeout(
            "favicon probe",
            timeout,
            self.collaborators.http.get(url, timeout),
        )
        .await
        {
            Ok(snapshot) => SignalValue::benign_if(snapshot.body.to_lowercase().contains("favicon")),
            Err(e) => self.fallback("Favicon", url, e),
        }
    }

    /// Suspicious if reaching the page took more than one redirect.
    pub async fn redirect(&self, url: &str) -> SignalValue {
        let timeout = self.timeouts.redirect;
        match with_timeout(
            "redirect probe",
            timeout,
            self.collaborators.http.get(url, timeout),
        )
        .await
        {
            Ok(snapshot) => SignalValue::suspicious_if(snapshot.redirects.len() > 1),
            Err(e) => self.fallback("Redirect", url, e),
        }
    }

    /// Benign if the hostname resolves to at least one address.
    pub async fn dns_record(&self, hostname: &str) -> SignalValue {
        match with_timeout(
            "DNS lookup",
            self.timeouts.dns,
            self.collaborators.dns.resolve(hostname),
        )
        .await
        {
            Ok(addresses) => SignalValue::benign_if(!addresses.is_empty()),
            Err(e) => self.fallback("DNS", hostname, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize_url;
    use crate::error_handling::LookupErrorKind;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn record(created: Option<DateTime<Utc>>, expires: Option<DateTime<Utc>>) -> WhoisRecord {
        WhoisRecord {
            creation_date: created,
            expiration_date: expires,
            registrar: None,
        }
    }

    #[test]
    fn test_registration_length() {
        let long = record(Some(date(2020, 1, 1)), Some(date(2030, 1, 1)));
        assert_eq!(registration_length(&long), SignalValue::BENIGN);

        let exactly_a_year = record(Some(date(2023, 1, 1)), Some(date(2024, 1, 1)));
        assert_eq!(registration_length(&exactly_a_year), SignalValue::BENIGN);

        let short = record(Some(date(2024, 1, 1)), Some(date(2024, 6, 1)));
        assert_eq!(registration_length(&short), SignalValue::SUSPICIOUS);

        let missing = record(Some(date(2024, 1, 1)), None);
        assert_eq!(registration_length(&missing), SignalValue::SUSPICIOUS);
    }

    #[test]
    fn test_age_of_domain() {
        let now = date(2026, 1, 1);
        let old = record(Some(date(1997, 9, 15)), None);
        assert_eq!(age_of_domain(&old, now), SignalValue::BENIGN);

        let young = record(Some(date(2025, 11, 1)), None);
        assert_eq!(age_of_domain(&young, now), SignalValue::SUSPICIOUS);

        assert_eq!(age_of_domain(&record(None, None), now), SignalValue::SUSPICIOUS);
    }

    #[test]
    fn test_port() {
        let n = |raw| normalize_url(raw).unwrap();
        assert_eq!(port(&n("http://example.com/")), SignalValue::BENIGN);
        assert_eq!(port(&n("http://example.com:80/")), SignalValue::BENIGN);
        assert_eq!(port(&n("http://example.com:080/")), SignalValue::BENIGN);
        assert_eq!(port(&n("https://example.com:443/")), SignalValue::BENIGN);
        // 443 on plain http is explicit but still allowed
        assert_eq!(port(&n("http://example.com:443/")), SignalValue::BENIGN);
        assert_eq!(port(&n("http://example.com:8080/")), SignalValue::SUSPICIOUS);
        assert_eq!(port(&n("http://example.com:http/")), SignalValue::SUSPICIOUS);
        assert_eq!(port(&n("http://example.com:+80/")), SignalValue::SUSPICIOUS);
        assert_eq!(port(&n("http://example.com:70000/")), SignalValue::SUSPICIOUS);
    }

    #[test]
    fn test_web_traffic() {
        let n = |raw| normalize_url(raw).unwrap();
        assert_eq!(web_traffic(&n("http://shop.example.xyz")), SignalValue::SUSPICIOUS);
        assert_eq!(web_traffic(&n("http://example.com")), SignalValue::BENIGN);
    }

    #[test]
    fn test_signal_timeouts_cap() {
        let capped = SignalTimeouts::default().capped_at(Duration::from_secs(4));
        assert_eq!(capped.whois, Duration::from_secs(4));
        assert_eq!(capped.redirect, Duration::from_secs(4));
        assert_eq!(capped.favicon, Duration::from_secs(FAVICON_TIMEOUT_SECS));
        assert_eq!(capped.dns, Duration::from_secs(DNS_TIMEOUT_SECS));

        // A generous cap leaves the defaults alone
        let loose = SignalTimeouts::default().capped_at(Duration::from_secs(60));
        assert_eq!(loose, SignalTimeouts::default());
    }

    #[tokio::test]
    async fn test_offline_lookups_fall_back_and_are_counted() {
        let collaborators = Collaborators::offline();
        let stats = ExtractionStats::new();
        let signals = ExternalSignals::new(&collaborators, &stats, SignalTimeouts::default());

        assert_eq!(signals.registry("example.com").await, RegistrySignals::FALLBACK);
        assert_eq!(signals.favicon("http://example.com").await, SignalValue::SUSPICIOUS);
        assert_eq!(signals.redirect("http://example.com").await, SignalValue::SUSPICIOUS);
        assert_eq!(signals.dns_record("example.com").await, SignalValue::SUSPICIOUS);

        assert_eq!(stats.get_lookup_failure_count(LookupErrorKind::Offline), 4);
    }
}
