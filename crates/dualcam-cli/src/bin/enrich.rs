//! Dualcam enricher - add review analysis and market taxonomies to a snapshot.

use clap::Parser;
use dualcam_cli::{init_logging, run_enrich, EnrichArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = EnrichArgs::parse();
    init_logging();

    match run_enrich(&args).await {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
