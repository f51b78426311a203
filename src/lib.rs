//! phishing_features library: URL feature extraction for phishing classification
//!
//! This library turns a raw URL into the fixed-width numeric feature vector
//! consumed by a downstream phishing classifier. A strict heuristic runs
//! first and can declare a URL phishing outright, in which case every
//! feature is reported as suspicious without any network access.
//!
//! # Example
//!
//! ```no_run
//! use phishing_features::{Collaborators, Extraction, FeatureExtractor};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let extractor = FeatureExtractor::new(Collaborators::offline());
//! match extractor.extract("http://paypal.verify-account.xyz").await {
//!     Extraction::Invalid => println!("not a URL"),
//!     Extraction::StrictPhishing(_) => println!("phishing"),
//!     Extraction::Features(vector) => println!("{:?}", vector.to_values()),
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod features;
pub mod fetch;
pub mod heuristics;
pub mod initialization;
pub mod lookup;
pub mod signals;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use domain::{normalize_url, NormalizedUrl};
pub use error_handling::{ExtractionStats, InitializationError, LookupError};
pub use features::{Extraction, FeatureExtractor, FeatureVector};
pub use heuristics::{assess, entropy, is_strict_phishing, risk_score, RiskAssessment};
pub use lookup::{Clock, Collaborators, DnsLookup, HttpProbe, WhoisLookup};
pub use signals::{Feature, SignalValue, FEATURE_COUNT};

/// Extracts the feature vector for one URL using live WHOIS, DNS and HTTP lookups.
///
/// Builds a fresh set of collaborators on every call; to extract many URLs,
/// create one [`FeatureExtractor`] and reuse it.
///
/// # Errors
///
/// Only collaborator initialization can fail. Unparseable URLs yield
/// [`Extraction::Invalid`] and lookup failures yield fallback values.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> Result<(), phishing_features::InitializationError> {
/// let extraction = phishing_features::extract_features("example.com").await?;
/// assert!(!extraction.is_invalid());
/// # Ok(())
/// # }
/// ```
pub async fn extract_features(url: &str) -> Result<Extraction, InitializationError> {
    let config = Config::default();
    let collaborators = initialization::init_collaborators(&config)?;
    let extractor = FeatureExtractor::new(collaborators).with_timeouts(config.signal_timeouts());
    Ok(extractor.extract(url).await)
}
