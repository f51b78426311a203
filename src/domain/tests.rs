// Domain module tests.

use super::*;

#[test]
fn test_normalize_prepends_http() {
    let normalized = normalize_url("example.com/path").unwrap();
    assert_eq!(normalized.url, "http://example.com/path");
    assert_eq!(normalized.hostname, "example.com");
}

#[test]
fn test_normalize_preserves_https() {
    let normalized = normalize_url("https://example.com").unwrap();
    assert_eq!(normalized.url, "https://example.com");
}

#[test]
fn test_normalize_lowercases_hostname_only() {
    let normalized = normalize_url("http://WWW.Example.COM/Login").unwrap();
    assert_eq!(normalized.hostname, "www.example.com");
    assert_eq!(normalized.url, "http://WWW.Example.COM/Login");
}

#[test]
fn test_normalize_rejects_dotless_host() {
    assert!(normalize_url("localhost").is_none());
    assert!(normalize_url("http://intranet/login").is_none());
}

#[test]
fn test_normalize_rejects_empty_and_garbage() {
    assert!(normalize_url("").is_none());
    assert!(normalize_url("http://").is_none());
    assert!(normalize_url("not a url at all!!!").is_none());
}

#[test]
fn test_normalize_uppercase_scheme_is_not_a_prefix() {
    // "HTTP://" is not recognized, so "http://" is prepended and the host becomes "http"
    assert!(normalize_url("HTTP://WWW.Example.COM/Login").is_none());
}

#[test]
fn test_normalize_rejects_ipv6_literal() {
    // Bracketed IPv6 hosts never contain a dot
    assert!(normalize_url("http://[::1]/").is_none());
}

#[test]
fn test_normalize_accepts_ipv4_literal() {
    let normalized = normalize_url("192.168.1.1/login").unwrap();
    assert_eq!(normalized.hostname, "192.168.1.1");
}

#[test]
fn test_normalize_with_port_and_userinfo() {
    let normalized = normalize_url("http://user@example.com:8080/").unwrap();
    assert_eq!(normalized.hostname, "example.com");
    assert_eq!(normalized.port.as_deref(), Some("8080"));
}

#[test]
fn test_normalize_userinfo_ends_at_last_at_sign() {
    let normalized = normalize_url("http://paypal.com@login@evil.example.net/x").unwrap();
    assert_eq!(normalized.hostname, "evil.example.net");
    assert_eq!(normalized.port, None);
}

#[test]
fn test_normalize_authority_stops_at_query_and_fragment() {
    assert_eq!(normalize_url("example.com?next=a.b").unwrap().hostname, "example.com");
    assert_eq!(normalize_url("example.com#a.b").unwrap().hostname, "example.com");
    // A query cannot supply the missing dot
    assert!(normalize_url("intranet?host=a.b").is_none());
}

#[test]
fn test_normalize_empty_port_is_absent() {
    let normalized = normalize_url("http://example.com:/").unwrap();
    assert_eq!(normalized.hostname, "example.com");
    assert_eq!(normalized.port, None);
}

#[test]
fn test_normalize_keeps_numeric_hosts_as_written() {
    // A dotless decimal host is not rewritten into a dotted address
    assert!(normalize_url("http://3232235777/login").is_none());

    let hex = normalize_url("http://0x7f.0.0.1/").unwrap();
    assert_eq!(hex.hostname, "0x7f.0.0.1");

    let short = normalize_url("http://127.1/").unwrap();
    assert_eq!(short.hostname, "127.1");

    let out_of_range = normalize_url("http://999.999.999.999/login").unwrap();
    assert_eq!(out_of_range.hostname, "999.999.999.999");
    assert!(is_ipv4_literal(&out_of_range.hostname));
}

#[test]
fn test_normalize_accepts_numeric_labels() {
    assert_eq!(normalize_url("http://example.123/").unwrap().hostname, "example.123");
    assert_eq!(normalize_url("http://1.2.3.4.5/").unwrap().hostname, "1.2.3.4.5");
}

#[test]
fn test_normalize_keeps_idn_host_unencoded() {
    let normalized = normalize_url("http://Bücher.example.de/").unwrap();
    assert_eq!(normalized.hostname, "bücher.example.de");
}

#[test]
fn test_normalize_bracketed_hosts() {
    let mapped = normalize_url("http://[::ffff:1.2.3.4]:8443/").unwrap();
    assert_eq!(mapped.hostname, "::ffff:1.2.3.4");
    assert_eq!(mapped.port.as_deref(), Some("8443"));

    assert!(normalize_url("http://[::1.2.3.4/").is_none());
    assert!(normalize_url("http://example.com]/").is_none());
}

#[test]
fn test_normalize_rejects_whitespace_in_host() {
    assert!(normalize_url("foo bar.com").is_none());
}

#[test]
fn test_is_ipv4_literal() {
    assert!(is_ipv4_literal("192.168.1.1"));
    assert!(is_ipv4_literal("999.1.1.1"));
    assert!(!is_ipv4_literal("1.2.3"));
    assert!(!is_ipv4_literal("1.2.3.4.5"));
    assert!(!is_ipv4_literal("1.2.3.abc"));
    assert!(!is_ipv4_literal("1234.1.1.1"));
    assert!(!is_ipv4_literal("example.com"));
}

#[test]
fn test_registrable_domain_basic() {
    assert_eq!(registrable_domain("www.example.com"), Some("example.com"));
    assert_eq!(registrable_domain("example.com"), Some("example.com"));
    assert_eq!(registrable_domain("a.b.example.co.uk"), Some("example.co.uk"));
}

#[test]
fn test_registrable_domain_ip_literal() {
    assert_eq!(registrable_domain("10.0.0.1"), None);
}

#[test]
fn test_subdomain_labels() {
    assert!(subdomain_labels("example.com").is_empty());
    assert_eq!(subdomain_labels("www.example.com"), vec!["www"]);
    assert_eq!(subdomain_labels("a.b.example.com"), vec!["a", "b"]);
    assert_eq!(subdomain_labels("secure.bank.example.co.uk"), vec!["secure", "bank"]);
}

#[test]
fn test_subdomain_labels_ip_literal() {
    assert!(subdomain_labels("192.168.1.1").is_empty());
}
