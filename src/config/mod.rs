//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, thresholds, limits)
//! - The curated lookup tables used by the lexical signals and the risk scorer
//! - CLI option types and parsing

mod constants;
mod tables;
mod types;

// Re-export all constants
pub use constants::*;
pub use tables::*;
pub use types::{Config, LogFormat, LogLevel};
