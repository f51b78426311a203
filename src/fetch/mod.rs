//! Live HTTP probe.
//!
//! Backs the `Favicon` and `Redirect` signals: a GET that follows redirects
//! manually (so each hop is recorded) and reads a size-capped body.

mod redirects;

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::config::{MAX_REDIRECT_HOPS, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{categorize_reqwest_error, LookupError};
use crate::lookup::{HttpProbe, HttpSnapshot};

pub(crate) use redirects::follow_redirects;

/// Live HTTP probe backed by `reqwest`.
///
/// The client must have automatic redirects disabled
/// (see [`crate::initialization::init_redirect_client`]).
#[derive(Clone)]
pub struct ReqwestProbe {
    client: Arc<reqwest::Client>,
}

impl ReqwestProbe {
    /// Wraps a client with redirects disabled.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    async fn fetch(&self, url: &str, timeout: Duration) -> Result<HttpSnapshot, LookupError> {
        let (response, redirects) =
            follow_redirects(&self.client, url, MAX_REDIRECT_HOPS, timeout).await?;
        let final_url = response.url().to_string();
        log::trace!(
            "GET {} -> {} ({} redirect(s))",
            url,
            final_url,
            redirects.len()
        );
        let body = read_body_with_limit(response, MAX_RESPONSE_BODY_SIZE, timeout).await?;
        Ok(HttpSnapshot {
            final_url,
            redirects,
            body,
        })
    }
}

impl HttpProbe for ReqwestProbe {
    fn get<'a>(
        &'a self,
        url: &'a str,
        timeout: Duration,
    ) -> BoxFuture<'a, Result<HttpSnapshot, LookupError>> {
        self.fetch(url, timeout).boxed()
    }
}

/// Reads the response body, keeping at most `max_size` bytes.
///
/// Bodies larger than the cap are truncated rather than rejected; invalid
/// UTF-8 is replaced.
async fn read_body_with_limit(
    mut response: reqwest::Response,
    max_size: usize,
    timeout: Duration,
) -> Result<String, LookupError> {
    let mut buf: Vec<u8> = Vec::with_capacity(max_size.min(16 * 1024));
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| categorize_reqwest_error("HTTP body", timeout, e))?
    {
        let remaining = max_size - buf.len();
        if chunk.len() >= remaining {
            buf.extend_from_slice(&chunk[..remaining]);
            log::debug!(
                "Body exceeds {}KB limit for {}, truncating",
                max_size / 1024,
                response.url()
            );
            break;
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
