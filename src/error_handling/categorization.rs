//! Error categorization.
//!
//! Maps errors raised by the HTTP client onto [`LookupError`] so that timeouts
//! are counted as timeouts regardless of which layer noticed them.

use std::time::Duration;

use super::types::LookupError;

/// Converts a `reqwest::Error` into a [`LookupError`].
///
/// Client-side timeouts become [`LookupError::Timeout`] tagged with the
/// operation name; everything else is kept as [`LookupError::Http`].
pub fn categorize_reqwest_error(
    operation: &'static str,
    timeout: Duration,
    error: reqwest::Error,
) -> LookupError {
    if error.is_timeout() {
        LookupError::Timeout {
            operation,
            after: timeout,
        }
    } else {
        LookupError::Http(error)
    }
}

/// Awaits `future`, failing with [`LookupError::Timeout`] once `after` elapses.
///
/// Every external signal goes through this wrapper so the time budget holds
/// even when a collaborator ignores its own timeout.
pub async fn with_timeout<T, F>(
    operation: &'static str,
    after: Duration,
    future: F,
) -> Result<T, LookupError>
where
    F: std::future::Future<Output = Result<T, LookupError>>,
{
    match tokio::time::timeout(after, future).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout { operation, after }),
    }
}
