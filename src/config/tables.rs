//! Curated lookup tables.
//!
//! Process-wide immutable data shared by the lexical signals and the strict
//! heuristic. Nothing here is mutated after startup.

use std::sync::LazyLock;

use regex::Regex;

/// Keywords commonly found in credential-harvesting URLs.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "secure",
    "account",
    "update",
    "verify",
    "login",
    "signin",
    "bank",
    "payment",
    "invoice",
    "paypal",
    "amazon",
    "gift",
    "free",
    "claim",
    "urgent",
    "alert",
    "verification",
];

/// Top-level domains with a high abuse rate (without the leading dot).
pub const SUSPICIOUS_TLDS: &[&str] = &[
    "xyz", "top", "online", "shop", "buzz", "cyou", "click", "zip", "cam", "gq", "ml", "ga", "tk",
    "cf", "work", "rest",
];

/// Alternation of known URL-shortener services, matched as a substring.
pub const SHORTENER_PATTERN: &str =
    r"(bit\.ly|goo\.gl|tinyurl|t\.co|ow\.ly|is\.gd|buff\.ly|rebrand\.ly|cutt\.ly)";

/// Compiled [`SHORTENER_PATTERN`].
pub static SHORTENER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SHORTENER_PATTERN).expect("shortener pattern is a valid regex"));

/// A brand frequently impersonated in phishing URLs, with the domains it legitimately owns.
#[derive(Debug, Clone, Copy)]
pub struct Brand {
    /// Token searched for in the lowercased URL
    pub name: &'static str,
    /// Hostname suffixes that belong to the brand
    pub legitimate_suffixes: &'static [&'static str],
}

/// Brands checked by the impersonation rule.
pub const BRANDS: &[Brand] = &[
    Brand {
        name: "paypal",
        legitimate_suffixes: &["paypal.com"],
    },
    Brand {
        name: "google",
        legitimate_suffixes: &["google.com"],
    },
    Brand {
        name: "amazon",
        legitimate_suffixes: &["amazon.com"],
    },
    Brand {
        name: "microsoft",
        legitimate_suffixes: &["microsoft.com", "live.com", "outlook.com"],
    },
    Brand {
        name: "facebook",
        legitimate_suffixes: &["facebook.com", "fb.com"],
    },
    Brand {
        name: "sbi",
        legitimate_suffixes: &["sbi.co.in", "onlinesbi.com"],
    },
    Brand {
        name: "hdfc",
        legitimate_suffixes: &["hdfcbank.com"],
    },
    Brand {
        name: "axis",
        legitimate_suffixes: &["axisbank.com"],
    },
];

/// Returns true if the lowercased URL contains any of [`SUSPICIOUS_KEYWORDS`].
pub fn contains_suspicious_keyword(lower_url: &str) -> bool {
    SUSPICIOUS_KEYWORDS.iter().any(|k| lower_url.contains(k))
}

/// Returns true if the hostname ends with `.` followed by one of [`SUSPICIOUS_TLDS`].
pub fn has_suspicious_tld(hostname: &str) -> bool {
    SUSPICIOUS_TLDS.iter().any(|tld| {
        hostname
            .strip_suffix(tld)
            .is_some_and(|rest| rest.ends_with('.'))
    })
}
