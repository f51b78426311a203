//! HTTP redirect chain resolution.
//!
//! This module handles following redirect chains manually to record every hop
//! from the initial URL to the final response.

use std::time::Duration;

use reqwest::Url;

use crate::error_handling::{categorize_reqwest_error, LookupError};

/// Returns true for the status codes that carry a `Location` to follow.
fn is_redirect_status(status_code: u16) -> bool {
    matches!(status_code, 301 | 302 | 303 | 307 | 308)
}

/// Follows the redirect chain for a URL, up to `max_hops` redirects.
///
/// # Arguments
///
/// * `client` - HTTP client with redirects disabled (for manual tracking)
/// * `start_url` - The initial URL to start from
/// * `max_hops` - Maximum number of redirect hops to follow
/// * `timeout` - Per-request timeout
///
/// # Returns
///
/// The final (non-redirect) response and the URLs that answered with a
/// redirect, in order.
///
/// # Errors
///
/// Returns an error if a request fails, a `Location` header cannot be resolved,
/// or the chain is longer than `max_hops`.
pub(crate) async fn follow_redirects(
    client: &reqwest::Client,
    start_url: &str,
    max_hops: usize,
    timeout: Duration,
) -> Result<(reqwest::Response, Vec<String>), LookupError> {
    let mut redirects: Vec<String> = Vec::new();
    let mut current = start_url.to_string();

    loop {
        let resp = client
            .get(&current)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error("HTTP GET", timeout, e))?;

        let status_code = resp.status().as_u16();
        if !is_redirect_status(status_code) {
            return Ok((resp, redirects));
        }

        let Some(loc) = resp.headers().get(reqwest::header::LOCATION) else {
            // Redirect status but no Location header; treat this response as final
            log::warn!(
                "Redirect status {} for {} but no Location header",
                status_code,
                current
            );
            return Ok((resp, redirects));
        };

        if redirects.len() >= max_hops {
            return Err(LookupError::InvalidRedirect(format!(
                "more than {max_hops} redirects starting at {start_url}"
            )));
        }

        let loc = loc.to_str().unwrap_or("").to_string();
        let next = Url::parse(&loc)
            .or_else(|_| Url::parse(&current).and_then(|base| base.join(&loc)))
            .map_err(|e| LookupError::InvalidRedirect(format!("{loc:?}: {e}")))?;

        redirects.push(current);
        current = next.to_string();
    }
}
