//! Command-line arguments for the two binaries.

use clap::Parser;
use std::path::PathBuf;

/// Collect app-store and discussion data for dual-camera apps.
#[derive(Debug, Parser)]
#[command(name = "dualcam-collect")]
#[command(version, about, long_about = None)]
pub struct CollectArgs {
    /// Configuration file (TOML); compiled-in defaults when absent
    #[arg(short, long, env = "DUALCAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Enrich a collected snapshot with review analysis and market taxonomies.
#[derive(Debug, Parser)]
#[command(name = "dualcam-enrich")]
#[command(version, about, long_about = None)]
pub struct EnrichArgs {
    /// Configuration file (TOML); compiled-in defaults when absent
    #[arg(short, long, env = "DUALCAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot to enrich
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Enriched output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
