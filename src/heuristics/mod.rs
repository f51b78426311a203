//! Strict-mode heuristic risk scoring.
//!
//! A URL is declared phishing outright when the weighted sum of a curated set
//! of rules reaches [`STRICT_THRESHOLD`]. Rules are evaluated in a fixed order
//! and always summed in full, so adding a matching signal can only raise the
//! score.

mod entropy;

pub use entropy::entropy;

use serde::Serialize;

use crate::config::{
    contains_suspicious_keyword, has_suspicious_tld, BRANDS, HOSTNAME_DIGIT_THRESHOLD,
    HOSTNAME_ENTROPY_THRESHOLD, SHORTENER_RE, STRICT_THRESHOLD,
};
use crate::domain::{is_ipv4_literal, NormalizedUrl};

/// Input shared by every rule: the normalized URL and its lowercased form.
pub struct RiskInput<'a> {
    /// Normalized URL under assessment
    pub url: &'a NormalizedUrl,
    /// `url.url` lowercased
    pub lower_url: String,
}

impl<'a> RiskInput<'a> {
    /// Prepares the rule input for a normalized URL.
    pub fn new(url: &'a NormalizedUrl) -> Self {
        Self {
            url,
            lower_url: url.url.to_lowercase(),
        }
    }
}

/// A weighted heuristic rule.
///
/// `hits` returns how many times the rule fires; the contribution to the score
/// is `weight * hits`. Only the brand rule can fire more than once.
pub struct RiskRule {
    /// Stable rule name, reported in [`RiskAssessment::matched`]
    pub name: &'static str,
    /// Score added per hit
    pub weight: u32,
    /// Number of hits for the given input
    pub hits: fn(&RiskInput<'_>) -> u32,
}

/// The strict-mode rules, in evaluation order.
pub const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        name: "shortener",
        weight: 2,
        hits: shortener_hits,
    },
    RiskRule {
        name: "ip_literal_host",
        weight: 3,
        hits: ip_literal_hits,
    },
    RiskRule {
        name: "brand_impersonation",
        weight: 3,
        hits: brand_impersonation_hits,
    },
    RiskRule {
        name: "suspicious_tld",
        weight: 2,
        hits: suspicious_tld_hits,
    },
    RiskRule {
        name: "hostname_entropy",
        weight: 2,
        hits: hostname_entropy_hits,
    },
    RiskRule {
        name: "hostname_digits",
        weight: 1,
        hits: hostname_digit_hits,
    },
    RiskRule {
        name: "suspicious_keyword",
        weight: 2,
        hits: suspicious_keyword_hits,
    },
];

fn hit(condition: bool) -> u32 {
    u32::from(condition)
}

fn shortener_hits(input: &RiskInput<'_>) -> u32 {
    hit(SHORTENER_RE.is_match(&input.lower_url))
}

fn ip_literal_hits(input: &RiskInput<'_>) -> u32 {
    hit(is_ipv4_literal(&input.url.hostname))
}

/// One hit per brand named in the URL whose legitimate domains the host does not belong to.
fn brand_impersonation_hits(input: &RiskInput<'_>) -> u32 {
    let host = &input.url.hostname;
    BRANDS
        .iter()
        .filter(|brand| input.lower_url.contains(brand.name))
        .filter(|brand| {
            !brand
                .legitimate_suffixes
                .iter()
                .any(|suffix| host.ends_with(suffix))
        })
        .count() as u32
}

fn suspicious_tld_hits(input: &RiskInput<'_>) -> u32 {
    hit(has_suspicious_tld(&input.url.hostname))
}

fn hostname_entropy_hits(input: &RiskInput<'_>) -> u32 {
    hit(entropy(&input.url.hostname) > HOSTNAME_ENTROPY_THRESHOLD)
}

fn hostname_digit_hits(input: &RiskInput<'_>) -> u32 {
    let digits = input
        .url
        .hostname
        .chars()
        .filter(|c| c.is_ascii_digit())
        .count();
    hit(digits > HOSTNAME_DIGIT_THRESHOLD)
}

fn suspicious_keyword_hits(input: &RiskInput<'_>) -> u32 {
    hit(contains_suspicious_keyword(&input.lower_url))
}

/// Result of running every rule against a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    /// Sum of all rule contributions
    pub score: u32,
    /// `(rule name, contribution)` for every rule that fired, in evaluation order
    pub matched: Vec<(&'static str, u32)>,
}

impl RiskAssessment {
    /// True when the score reaches the strict threshold.
    pub fn is_strict_phishing(&self) -> bool {
        self.score >= STRICT_THRESHOLD
    }
}

/// Runs every rule in [`RISK_RULES`] and records what fired.
pub fn assess(url: &NormalizedUrl) -> RiskAssessment {
    let input = RiskInput::new(url);
    let mut score = 0;
    let mut matched = Vec::new();
    for rule in RISK_RULES {
        let contribution = rule.weight * (rule.hits)(&input);
        if contribution > 0 {
            matched.push((rule.name, contribution));
        }
        score += contribution;
    }
    RiskAssessment { score, matched }
}

/// Computes the risk score of a normalized URL.
pub fn risk_score(url: &NormalizedUrl) -> u32 {
    assess(url).score
}

/// Returns true if the URL scores at or above [`STRICT_THRESHOLD`].
pub fn is_strict_phishing(url: &NormalizedUrl) -> bool {
    assess(url).is_strict_phishing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize_url;

    fn normalized(raw: &str) -> NormalizedUrl {
        normalize_url(raw).expect("test URL should normalize")
    }

    fn contribution(assessment: &RiskAssessment, rule: &str) -> u32 {
        assessment
            .matched
            .iter()
            .find(|(name, _)| *name == rule)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    #[test]
    fn test_benign_url_scores_zero() {
        let assessment = assess(&normalized("http://example.com"));
        assert_eq!(assessment.score, 0);
        assert!(assessment.matched.is_empty());
        assert!(!assessment.is_strict_phishing());
    }

    #[test]
    fn test_legitimate_brand_domain_has_no_brand_penalty() {
        let assessment = assess(&normalized("http://paypal.com/login"));
        assert_eq!(contribution(&assessment, "brand_impersonation"), 0);
        // "paypal" and "login" are both keywords; the keyword rule fires once
        assert_eq!(contribution(&assessment, "suspicious_keyword"), 2);
        assert_eq!(assessment.score, 2);
        assert!(!assessment.is_strict_phishing());
    }

    #[test]
    fn test_brand_impersonation_is_strict_phishing() {
        let assessment = assess(&normalized("http://paypal.verify-account.xyz"));
        assert_eq!(contribution(&assessment, "brand_impersonation"), 3);
        assert_eq!(contribution(&assessment, "suspicious_tld"), 2);
        assert_eq!(contribution(&assessment, "suspicious_keyword"), 2);
        assert_eq!(contribution(&assessment, "hostname_entropy"), 2);
        assert_eq!(assessment.score, 9);
        assert!(assessment.is_strict_phishing());
    }

    #[test]
    fn test_brand_penalty_repeats_per_brand() {
        let assessment = assess(&normalized("http://paypal-google.example.net"));
        assert_eq!(contribution(&assessment, "brand_impersonation"), 6);
        assert_eq!(assessment.score, 8);
    }

    #[test]
    fn test_ip_literal_host() {
        let assessment = assess(&normalized("http://192.168.1.1/login"));
        assert_eq!(contribution(&assessment, "ip_literal_host"), 3);
        assert_eq!(contribution(&assessment, "hostname_digits"), 1);
        assert_eq!(contribution(&assessment, "suspicious_keyword"), 2);
        assert_eq!(assessment.score, 6);
        assert!(is_strict_phishing(&normalized("http://192.168.1.1/login")));
    }

    #[test]
    fn test_bare_ip_reaches_threshold_exactly() {
        // 3 (IP) + 1 (eight digits) == threshold
        assert_eq!(risk_score(&normalized("http://192.168.1.1")), STRICT_THRESHOLD);
        assert!(is_strict_phishing(&normalized("http://192.168.1.1")));
    }

    #[test]
    fn test_shortener_alone_is_below_threshold() {
        let assessment = assess(&normalized("http://bit.ly/abc"));
        assert_eq!(assessment.matched, vec![("shortener", 2)]);
        assert!(!assessment.is_strict_phishing());
    }

    #[test]
    fn test_high_entropy_and_digits() {
        let assessment = assess(&normalized("http://a1b2c3d4e5f6.com"));
        assert_eq!(contribution(&assessment, "hostname_entropy"), 2);
        assert_eq!(contribution(&assessment, "hostname_digits"), 1);
        assert_eq!(assessment.score, 3);
    }

    #[test]
    fn test_suspicious_tld_only() {
        assert_eq!(risk_score(&normalized("http://shop.example.xyz")), 2);
    }

    #[test]
    fn test_score_is_monotonic_when_adding_signals() {
        let base = risk_score(&normalized("http://example.com/home"));
        let with_keyword = risk_score(&normalized("http://example.com/home/login"));
        let with_shortener = risk_score(&normalized("http://example.com/home/login/bit.ly"));
        assert!(with_keyword >= base);
        assert!(with_shortener >= with_keyword);
        assert_eq!(with_shortener, base + 4);
    }

    #[test]
    fn test_matched_rules_follow_rule_order() {
        let assessment = assess(&normalized("http://paypal.verify-account.xyz"));
        let order: Vec<&str> = assessment.matched.iter().map(|(n, _)| *n).collect();
        let expected: Vec<&str> = RISK_RULES
            .iter()
            .map(|r| r.name)
            .filter(|n| order.contains(n))
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_score_equals_sum_of_contributions() {
        for raw in [
            "http://paypal.verify-account.xyz",
            "http://192.168.1.1/login",
            "http://bit.ly/abc",
            "https://github.com/rust-lang/rust",
        ] {
            let assessment = assess(&normalized(raw));
            let sum: u32 = assessment.matched.iter().map(|(_, c)| c).sum();
            assert_eq!(assessment.score, sum, "{raw}");
        }
    }
}
