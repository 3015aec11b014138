//! Dualcam CLI library.
//!
//! Argument parsing, logging setup and console reports for the
//! `dualcam-collect` and `dualcam-enrich` binaries.

pub mod cli;
pub mod output;

pub use cli::{CollectArgs, EnrichArgs};
pub use output::Formatter;

use anyhow::Context;
use dualcam_research::ResearchConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialise logging to stderr; `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ResearchConfig> {
    ResearchConfig::load(path).with_context(|| match path {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load default config".to_string(),
    })
}

/// Run the collector and return the console report.
pub async fn run_collect(args: &CollectArgs) -> anyhow::Result<String> {
    let config = load_config(args.config.as_deref())?;
    let report = dualcam_research::collect(&config, args.output.as_deref())
        .await
        .context("Collection failed")?;

    Ok(Formatter::new(!args.no_color).collect_summary(&report))
}

/// Run the enricher and return the console report.
pub async fn run_enrich(args: &EnrichArgs) -> anyhow::Result<String> {
    let config = load_config(args.config.as_deref())?;
    let report = dualcam_research::enrich(&config, args.input.as_deref(), args.output.as_deref())
        .await
        .context("Enrichment failed")?;

    Ok(Formatter::new(!args.no_color).enrich_summary(&report))
}
