//! Error handling and extraction statistics.
//!
//! This module provides:
//! - Error type definitions (initialization and lookup failures)
//! - Lookup error categorization and the shared timeout wrapper
//! - Extraction statistics (outcomes and absorbed lookup failures)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, with_timeout};
pub use stats::ExtractionStats;
pub use types::{InitializationError, LookupError, LookupErrorKind, OutcomeKind};
