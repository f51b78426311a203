//! Batch extraction for the CLI.
//!
//! Reads URLs from the command line, a file or stdin, extracts each one, and
//! writes one JSON line per URL in input order.

pub mod input;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::features::{Extraction, FeatureExtractor};

pub use input::{is_overlong, parse_input_line, read_urls_from, read_urls_from_file};

/// One output line.
#[derive(Debug, Serialize)]
pub struct ExtractionRecord<'a> {
    /// Input exactly as read
    pub url: &'a str,
    /// `"INVALID"` or the feature object
    pub result: &'a Extraction,
}

/// Collects the URLs named by `config`: positional arguments, then `--file`.
///
/// A positional `-` reads URLs from stdin.
pub fn collect_urls(config: &Config) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for arg in &config.urls {
        if arg == "-" {
            let stdin = std::io::stdin();
            urls.extend(read_urls_from(stdin.lock())?);
        } else if let Some(url) = parse_input_line(arg) {
            urls.push(url.to_string());
        }
    }
    if let Some(path) = &config.file {
        urls.extend(read_urls_from_file(path)?);
    }
    Ok(urls)
}

/// Extracts every URL and writes one JSON line per URL to `out`, in input order.
///
/// Each URL runs in its own task; a semaphore keeps at most `max_concurrency`
/// extractions in flight.
pub async fn extract_all<W: Write>(
    extractor: &FeatureExtractor,
    urls: &[String],
    max_concurrency: usize,
    out: &mut W,
) -> Result<()> {
    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));

    let handles: Vec<JoinHandle<Extraction>> = urls
        .iter()
        .map(|url| {
            let extractor = extractor.clone();
            let semaphore = Arc::clone(&semaphore);
            let url = url.clone();
            tokio::spawn(async move {
                // The semaphore is never closed
                let _permit = semaphore.acquire_owned().await.ok();
                is_overlong(&url);
                extractor.extract(&url).await
            })
        })
        .collect();

    for (url, handle) in urls.iter().zip(handles) {
        let extraction = handle
            .await
            .with_context(|| format!("Extraction task for {url} failed"))?;
        let record = ExtractionRecord {
            url,
            result: &extraction,
        };
        serde_json::to_writer(&mut *out, &record).context("Failed to serialize result")?;
        writeln!(out).context("Failed to write result")?;
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}
