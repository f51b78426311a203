//! URL input handling for the CLI.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Returns the URL on an input line, or `None` for blank lines and `#` comments.
pub fn parse_input_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed)
    }
}

/// Returns true (and logs a warning) for URLs longer than [`MAX_URL_LENGTH`].
///
/// Over-long URLs are still extracted; the warning only flags unusual input.
pub fn is_overlong(url: &str) -> bool {
    if url.len() > MAX_URL_LENGTH {
        let preview: String = url.chars().take(50).collect();
        warn!(
            "URL exceeds expected maximum length ({} > {}), extracting anyway: {}...",
            url.len(),
            MAX_URL_LENGTH,
            preview
        );
        return true;
    }
    false
}

/// Reads URLs from any buffered reader, one per line.
pub fn read_urls_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        if let Some(url) = parse_input_line(&line) {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

/// Reads URLs from a file, one per line.
pub fn read_urls_from_file(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    read_urls_from(std::io::BufReader::new(file))
}
