//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phishing_features` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing one JSON line per URL to stdout
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use phishing_features::app::{collect_urls, extract_all};
use phishing_features::initialization::{init_collaborators, init_logger_with};
use phishing_features::{Config, FeatureExtractor};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(&config).await {
        eprintln!("phishing_features error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(config: &Config) -> Result<()> {
    let urls = collect_urls(config)?;
    if urls.is_empty() {
        anyhow::bail!("No URLs given (pass URLs as arguments, --file, or - for stdin)");
    }

    let collaborators =
        init_collaborators(config).context("Failed to initialize network collaborators")?;
    let extractor = FeatureExtractor::new(collaborators).with_timeouts(config.signal_timeouts());

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    extract_all(&extractor, &urls, config.max_concurrency, &mut out).await?;

    if config.show_stats {
        extractor.stats().log_summary();
    }
    Ok(())
}
