//! Dualcam Research
//!
//! The two pipelines of the dual-camera market research toolkit, and the
//! configuration and snapshot handling they share.
//!
//! # Overview
//!
//! - **Collector**: finds the target app, gathers and ranks competitors,
//!   surveys public discussion, and writes the first snapshot
//! - **Enricher**: reads that snapshot, classifies the target's recent
//!   reviews, merges the reference taxonomies, and writes the enriched snapshot
//!
//! Both stages talk to the network through the [`AppStore`] and
//! [`DiscussionSource`] traits. A failed request never stops a stage; it is
//! counted in [`RunStats`] and treated as an empty result.
//!
//! # Usage
//!
//! ```no_run
//! use dualcam_research::ResearchConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ResearchConfig::default();
//!
//!     let collected = dualcam_research::collect(&config, None).await?;
//!     println!("{}", collected.stats.summary());
//!
//!     let enriched = dualcam_research::enrich(&config, None, None).await?;
//!     println!("Wrote {}", enriched.output.display());
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! research_date = "October 24, 2025"
//!
//! [collector]
//! target_app_id = 1478000000
//! search_delay_ms = 250
//!
//! [enricher]
//! review_pages = 3
//!
//! [paths]
//! data_dir = "/var/lib/dualcam"
//! ```
//!
//! [`AppStore`]: dualcam_domain::traits::AppStore
//! [`DiscussionSource`]: dualcam_domain::traits::DiscussionSource

#![warn(missing_docs)]

pub mod catalog;
mod collector;
mod config;
mod enricher;
mod error;
pub mod snapshot;
pub mod stats;

pub use collector::Collector;
pub use config::{
    CollectorConfig, EnricherConfig, PathsConfig, ResearchConfig, DEFAULT_DATA_DIR_NAME,
    DEFAULT_ENRICHED_FILE, DEFAULT_SNAPSHOT_FILE,
};
pub use enricher::Enricher;
pub use error::{ResearchError, Result};
pub use stats::{RequestKind, RunStats};

use dualcam_client::{DiscussionClient, StoreClient};
use dualcam_domain::traits::{AppStore, DiscussionSource};
use dualcam_domain::ResearchDocument;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Document that was written
    pub document: ResearchDocument,

    /// Requests made during the run
    pub stats: RunStats,

    /// Where the document was written
    pub output: PathBuf,
}

/// Sleep between requests; a zero delay returns immediately
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Run the collector against the live APIs and write its snapshot
///
/// `output` overrides the configured snapshot path.
pub async fn collect(config: &ResearchConfig, output: Option<&Path>) -> Result<PipelineReport> {
    let store = StoreClient::new(config.client.clone())?;
    let discussions = DiscussionClient::new(config.client.clone())?;
    collect_with(store, discussions, config, output).await
}

/// Run the collector over the given collaborators and write its snapshot
pub async fn collect_with<S, D>(
    store: S,
    discussions: D,
    config: &ResearchConfig,
    output: Option<&Path>,
) -> Result<PipelineReport>
where
    S: AppStore,
    D: DiscussionSource,
{
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.paths.snapshot_path());

    let mut collector = Collector::new(store, discussions, config.collector.clone());
    let document = collector.run(config.research_date()).await;

    snapshot::save(&output, &document)?;
    info!("Saved snapshot to {}", output.display());

    Ok(PipelineReport {
        document,
        stats: collector.stats().clone(),
        output,
    })
}

/// Run the enricher against the live APIs and write the enriched snapshot
///
/// `input` and `output` override the configured paths.
pub async fn enrich(
    config: &ResearchConfig,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<PipelineReport> {
    let store = StoreClient::new(config.client.clone())?;
    enrich_with(store, config, input, output).await
}

/// Run the enricher over the given store and write the enriched snapshot
pub async fn enrich_with<S: AppStore>(
    store: S,
    config: &ResearchConfig,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<PipelineReport> {
    let input = input
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.paths.snapshot_path());
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.paths.enriched_path());

    let loaded = snapshot::load(&input)?;
    info!("Loaded snapshot from {}", input.display());

    let mut enricher = Enricher::new(store, config.enricher.clone(), config.classifier.clone());
    let document = enricher.run(loaded).await?;

    snapshot::save(&output, &document)?;
    info!("Saved enriched research to {}", output.display());

    Ok(PipelineReport {
        document,
        stats: enricher.stats().clone(),
        output,
    })
}
