//! Extraction statistics tracking.
//!
//! This module provides thread-safe counters for extraction outcomes and for
//! the lookup failures that were absorbed into fallback values.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{LookupErrorKind, OutcomeKind};

/// Thread-safe extraction statistics tracker.
///
/// Tracks outcomes and lookup failures using atomic counters, allowing
/// concurrent access from multiple tasks. All categories are initialized to
/// zero on creation.
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across multiple tasks using `Arc`.
#[derive(Debug)]
pub struct ExtractionStats {
    outcomes: HashMap<OutcomeKind, AtomicUsize>,
    lookup_failures: HashMap<LookupErrorKind, AtomicUsize>,
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in OutcomeKind::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }

        let mut lookup_failures = HashMap::new();
        for kind in LookupErrorKind::iter() {
            lookup_failures.insert(kind, AtomicUsize::new(0));
        }

        ExtractionStats {
            outcomes,
            lookup_failures,
        }
    }

    /// Increment an outcome counter.
    pub fn increment_outcome(&self, outcome: OutcomeKind) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment outcome counter for {:?} which is not in the map. \
                 This indicates a bug in ExtractionStats initialization.",
                outcome
            );
        }
    }

    /// Increment a lookup failure counter.
    pub fn increment_lookup_failure(&self, kind: LookupErrorKind) {
        if let Some(counter) = self.lookup_failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment lookup failure counter for {:?} which is not in the map. \
                 This indicates a bug in ExtractionStats initialization.",
                kind
            );
        }
    }

    /// Get the count for an outcome.
    pub fn get_outcome_count(&self, outcome: OutcomeKind) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a lookup failure kind.
    pub fn get_lookup_failure_count(&self, kind: LookupErrorKind) -> usize {
        self.lookup_failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the number of extractions recorded across all outcomes.
    pub fn total_extractions(&self) -> usize {
        OutcomeKind::iter().map(|o| self.get_outcome_count(o)).sum()
    }

    /// Get total lookup failures across all kinds.
    pub fn total_lookup_failures(&self) -> usize {
        LookupErrorKind::iter()
            .map(|k| self.get_lookup_failure_count(k))
            .sum()
    }

    /// Logs a summary of outcomes and non-zero lookup failure counters.
    pub fn log_summary(&self) {
        log::info!(
            "Extracted {} URL(s): {} invalid, {} strict phishing, {} full vectors",
            self.total_extractions(),
            self.get_outcome_count(OutcomeKind::Invalid),
            self.get_outcome_count(OutcomeKind::StrictPhishing),
            self.get_outcome_count(OutcomeKind::Features),
        );
        let failures = self.total_lookup_failures();
        if failures == 0 {
            return;
        }
        log::info!("Lookup failures absorbed as fallbacks: {failures}");
        for kind in LookupErrorKind::iter() {
            let count = self.get_lookup_failure_count(kind);
            if count > 0 {
                log::info!("   {}: {}", kind.as_ref(), count);
            }
        }
    }
}
