//! Lexical signals.
//!
//! Pure predicates over the URL string, the hostname and the registrable
//! domain. None of them touch the network.

use crate::config::{
    contains_suspicious_keyword, ABNORMAL_URL_ENTROPY, LONG_URL_MIN_LEN, SHORTENER_RE,
    SHORT_URL_MAX_LEN,
};
use crate::domain::{is_ipv4_literal, registrable_domain, subdomain_labels, NormalizedUrl};
use crate::heuristics::entropy;
use crate::signals::SignalValue;

/// Host is a dotted IPv4 literal.
///
/// Decided by parsing the hostname, never by resolving it.
pub fn having_ip_address(url: &NormalizedUrl) -> SignalValue {
    SignalValue::suspicious_if(is_ipv4_literal(&url.hostname))
}

/// Short URLs are benign, medium ones neutral, long ones suspicious.
pub fn url_length(url: &NormalizedUrl) -> SignalValue {
    match url.url.chars().count() {
        len if len < SHORT_URL_MAX_LEN => SignalValue::BENIGN,
        len if len <= LONG_URL_MIN_LEN => SignalValue::NEUTRAL,
        _ => SignalValue::SUSPICIOUS,
    }
}

/// URL goes through a known shortener service.
pub fn shortening_service(url: &NormalizedUrl) -> SignalValue {
    SignalValue::suspicious_if(SHORTENER_RE.is_match(&url.url.to_lowercase()))
}

/// `@` anywhere in the URL; browsers ignore everything before it in the authority.
pub fn having_at_symbol(url: &NormalizedUrl) -> SignalValue {
    SignalValue::suspicious_if(url.url.contains('@'))
}

/// A second `//` after the one that ends the scheme.
pub fn double_slash_redirecting(url: &NormalizedUrl) -> SignalValue {
    let redirected = url
        .url
        .find("//")
        .is_some_and(|i| url.url[i + 2..].contains("//"));
    SignalValue::suspicious_if(redirected)
}

/// Registrable domain contains a hyphen.
///
/// Falls back to the full hostname when it has no registrable domain.
pub fn prefix_suffix(url: &NormalizedUrl) -> SignalValue {
    let domain = registrable_domain(&url.hostname).unwrap_or(&url.hostname);
    SignalValue::suspicious_if(domain.contains('-'))
}

/// Benign without subdomains, neutral with one label, suspicious with more.
pub fn having_sub_domain(url: &NormalizedUrl) -> SignalValue {
    match subdomain_labels(&url.hostname).len() {
        0 => SignalValue::BENIGN,
        1 => SignalValue::NEUTRAL,
        _ => SignalValue::SUSPICIOUS,
    }
}

/// URL uses TLS.
pub fn ssl_final_state(url: &NormalizedUrl) -> SignalValue {
    SignalValue::benign_if(url.url.starts_with("https"))
}

/// `https` spelled inside the hostname, e.g. `https-paypal.com`.
pub fn https_token(url: &NormalizedUrl) -> SignalValue {
    SignalValue::suspicious_if(url.hostname.contains("https"))
}

/// URL contains one of the suspicious keywords.
pub fn request_url(url: &NormalizedUrl) -> SignalValue {
    SignalValue::suspicious_if(contains_suspicious_keyword(&url.url.to_lowercase()))
}

/// URL contains a `mailto:` target.
pub fn submitting_to_email(url: &NormalizedUrl) -> SignalValue {
    SignalValue::suspicious_if(url.url.to_lowercase().contains("mailto:"))
}

/// Shannon entropy of the whole URL above [`ABNORMAL_URL_ENTROPY`].
pub fn abnormal_url(url: &NormalizedUrl) -> SignalValue {
    SignalValue::suspicious_if(entropy(&url.url) > ABNORMAL_URL_ENTROPY)
}
