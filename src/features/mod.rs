//! Feature vector assembly.
//!
//! [`FeatureExtractor::extract`] is a three-way decision:
//!
//! 1. the URL does not normalize: [`Extraction::Invalid`]
//! 2. the strict heuristic fires: [`Extraction::StrictPhishing`] with every value `-1`
//! 3. otherwise every signal runs and the full [`FeatureVector`] is returned

use std::sync::Arc;

use log::{debug, info};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::domain::{normalize_url, registrable_domain, NormalizedUrl};
use crate::error_handling::{ExtractionStats, OutcomeKind};
use crate::heuristics::assess;
use crate::lookup::Collaborators;
use crate::signals::external::{ExternalSignals, SignalTimeouts};
use crate::signals::{Feature, SignalValue, FEATURE_COUNT};

/// One value per [`Feature`], in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector {
    values: [SignalValue; FEATURE_COUNT],
}

impl FeatureVector {
    /// Builds a vector by evaluating `value` for every feature in column order.
    pub fn from_fn(mut value: impl FnMut(Feature) -> SignalValue) -> Self {
        let mut values = [SignalValue::NEUTRAL; FEATURE_COUNT];
        for feature in Feature::iter() {
            values[feature.index()] = value(feature);
        }
        Self { values }
    }

    /// The vector returned for strict-mode phishing: every feature suspicious.
    pub fn all_suspicious() -> Self {
        Self {
            values: [SignalValue::SUSPICIOUS; FEATURE_COUNT],
        }
    }

    /// Value of one feature.
    pub fn get(&self, feature: Feature) -> SignalValue {
        self.values[feature.index()]
    }

    /// Looks up a value by model column name.
    pub fn get_by_name(&self, name: &str) -> Option<SignalValue> {
        Feature::iter()
            .find(|f| f.name() == name)
            .map(|f| self.get(f))
    }

    /// `(feature, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, SignalValue)> + '_ {
        Feature::iter().map(move |f| (f, self.get(f)))
    }

    /// Raw values in column order.
    pub fn to_values(&self) -> Vec<i8> {
        self.values.iter().map(|v| v.value()).collect()
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    /// Always false; a vector carries every feature.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.name(), &value)?;
        }
        map.end()
    }
}

/// Outcome of one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The URL has no usable hostname
    Invalid,
    /// The strict heuristic declared the URL phishing; the vector is all `-1`
    StrictPhishing(FeatureVector),
    /// Every signal was evaluated
    Features(FeatureVector),
}

impl Extraction {
    /// The feature vector, unless the URL was invalid.
    pub fn vector(&self) -> Option<&FeatureVector> {
        match self {
            Extraction::Invalid => None,
            Extraction::StrictPhishing(v) | Extraction::Features(v) => Some(v),
        }
    }

    /// True for [`Extraction::Invalid`].
    pub fn is_invalid(&self) -> bool {
        matches!(self, Extraction::Invalid)
    }

    /// Counting category of this outcome.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Extraction::Invalid => OutcomeKind::Invalid,
            Extraction::StrictPhishing(_) => OutcomeKind::StrictPhishing,
            Extraction::Features(_) => OutcomeKind::Features,
        }
    }
}

/// `"INVALID"` for invalid URLs, otherwise the vector as an ordered object.
impl Serialize for Extraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.vector() {
            None => serializer.serialize_str("INVALID"),
            Some(vector) => vector.serialize(serializer),
        }
    }
}

/// Turns URLs into feature vectors using a fixed set of collaborators.
///
/// Cheap to clone; clones share collaborators and statistics.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    collaborators: Collaborators,
    stats: Arc<ExtractionStats>,
    timeouts: SignalTimeouts,
}

impl FeatureExtractor {
    /// Creates an extractor with fresh statistics.
    pub fn new(collaborators: Collaborators) -> Self {
        Self::with_stats(collaborators, Arc::new(ExtractionStats::new()))
    }

    /// Creates an extractor that records into existing statistics.
    pub fn with_stats(collaborators: Collaborators, stats: Arc<ExtractionStats>) -> Self {
        Self {
            collaborators,
            stats,
            timeouts: SignalTimeouts::default(),
        }
    }

    /// Replaces the per-signal time budgets.
    pub fn with_timeouts(mut self, timeouts: SignalTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Statistics recorded by this extractor.
    pub fn stats(&self) -> &Arc<ExtractionStats> {
        &self.stats
    }

    /// Extracts the feature vector for a raw URL.
    ///
    /// Never fails: unparseable input becomes [`Extraction::Invalid`] and lookup
    /// failures become fallback values.
    pub async fn extract(&self, raw_url: &str) -> Extraction {
        let extraction = match normalize_url(raw_url) {
            None => {
                debug!("Rejecting unparseable URL: {raw_url:?}");
                Extraction::Invalid
            }
            Some(url) => {
                let assessment = assess(&url);
                if assessment.is_strict_phishing() {
                    info!(
                        "Strict phishing verdict for {} (score {}: {:?})",
                        url.url, assessment.score, assessment.matched
                    );
                    Extraction::StrictPhishing(FeatureVector::all_suspicious())
                } else {
                    debug!("Risk score {} for {}, extracting all signals", assessment.score, url.url);
                    Extraction::Features(self.extract_signals(&url).await)
                }
            }
        };
        self.stats.increment_outcome(extraction.kind());
        extraction
    }

    /// Evaluates every signal for a normalized URL.
    async fn extract_signals(&self, url: &NormalizedUrl) -> FeatureVector {
        let external = ExternalSignals::new(&self.collaborators, &self.stats, self.timeouts);
        let whois_domain = registrable_domain(&url.hostname).unwrap_or(&url.hostname);

        let (registry, favicon, redirect, dns_record) = tokio::join!(
            external.registry(whois_domain),
            external.favicon(&url.url),
            external.redirect(&url.url),
            external.dns_record(&url.hostname),
        );

        FeatureVector::from_fn(|feature| {
            if let Some(signal) = feature.url_signal() {
                return signal(url);
            }
            match feature {
                Feature::DomainRegistrationLength => registry.registration_length,
                Feature::AgeOfDomain => registry.age_of_domain,
                Feature::Favicon => favicon,
                Feature::Redirect => redirect,
                Feature::DnsRecord => dns_record,
                // Every other feature has a URL signal
                _ => SignalValue::SUSPICIOUS,
            }
        })
    }
}
