//! URL normalization and domain parsing.
//!
//! This module turns a raw, untrusted URL string into a scheme-qualified URL
//! and a lowercase hostname, and splits hostnames using the Public Suffix
//! List (PSL) to identify the registrable domain and its subdomain labels.
//!
//! Key functions:
//! - `normalize_url()` - Qualifies a raw URL and reads its hostname
//! - `registrable_domain()` - Extracts the registrable domain from a hostname
//! - `subdomain_labels()` - Lists the labels left of the registrable domain

use std::net::Ipv4Addr;

use log::debug;
use serde::Serialize;

/// A URL that passed normalization.
///
/// `hostname` is lowercase, non-empty and contains at least one `.`. Neither
/// the hostname nor the port is canonicalized: numeric, hex and IDN hosts stay
/// as they were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedUrl {
    /// Scheme-qualified URL, otherwise as given
    pub url: String,
    /// Lowercase hostname
    pub hostname: String,
    /// Port text after the host, if one was written
    pub port: Option<String>,
}

/// Host and port of a URL authority, exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Authority<'a> {
    host: &'a str,
    port: Option<&'a str>,
}

/// Splits the authority of a scheme-qualified URL.
///
/// The authority runs from `://` to the first `/`, `?` or `#`. Userinfo ends
/// at the last `@`, and a bracketed host keeps only what is inside the
/// brackets. No host canonicalization takes place.
fn split_authority(url: &str) -> Result<Authority<'_>, &'static str> {
    let (_, rest) = url.split_once("://").ok_or("missing scheme separator")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let netloc = &rest[..end];
    if netloc.contains('[') != netloc.contains(']') {
        return Err("unbalanced brackets in authority");
    }

    let hostinfo = netloc.rsplit_once('@').map_or(netloc, |(_, host)| host);
    let (host, port) = match hostinfo.split_once('[') {
        Some((_, bracketed)) => {
            let (host, after) = bracketed.split_once(']').unwrap_or((bracketed, ""));
            (host, after.split_once(':').map(|(_, port)| port))
        }
        None => match hostinfo.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (hostinfo, None),
        },
    };

    Ok(Authority {
        host,
        port: port.filter(|p| !p.is_empty()),
    })
}

/// Normalizes a raw URL string.
///
/// Prepends `http://` when the input has no `http://`/`https://` prefix, then
/// reads the hostname lexically from the authority.
///
/// # Returns
///
/// `None` if the authority is malformed, the host is empty or contains
/// whitespace, or the host contains no `.`. Never panics.
pub fn normalize_url(raw: &str) -> Option<NormalizedUrl> {
    let url = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    let authority = match split_authority(&url) {
        Ok(authority) => authority,
        Err(e) => {
            debug!("Unparseable URL {url:?}: {e}");
            return None;
        }
    };

    if authority
        .host
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        debug!("URL {url:?} has whitespace in its host");
        return None;
    }

    let hostname = authority.host.to_lowercase();
    if hostname.is_empty() || !hostname.contains('.') {
        debug!("URL {url:?} has no dotted hostname");
        return None;
    }
    let port = authority.port.map(str::to_string);

    Some(NormalizedUrl {
        url,
        hostname,
        port,
    })
}

/// Returns true if `host` is four dot-separated groups of one to three decimal digits.
///
/// This is a purely lexical check; no resolution takes place.
pub fn is_ipv4_literal(host: &str) -> bool {
    let groups: Vec<&str> = host.split('.').collect();
    groups.len() == 4
        && groups
            .iter()
            .all(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Extracts the registrable domain (e.g. `example.co.uk`) from a hostname.
///
/// Returns `None` for IP literals and for hostnames that are themselves a
/// public suffix.
pub fn registrable_domain(hostname: &str) -> Option<&str> {
    if hostname.parse::<Ipv4Addr>().is_ok() || is_ipv4_literal(hostname) {
        return None;
    }
    psl::domain_str(hostname)
}

/// Returns the subdomain labels left of the registrable domain.
///
/// `www.example.com` yields `["www"]`, `example.com` yields nothing. IP
/// literals and hostnames without a registrable domain have no subdomains.
pub fn subdomain_labels(hostname: &str) -> Vec<&str> {
    let Some(domain) = registrable_domain(hostname) else {
        return Vec::new();
    };
    match hostname
        .strip_suffix(domain)
        .and_then(|rest| rest.strip_suffix('.'))
    {
        Some(subdomain) if !subdomain.is_empty() => subdomain.split('.').collect(),
        _ => Vec::new(),
    }
}
