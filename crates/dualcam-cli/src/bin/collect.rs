//! Dualcam collector - gather app-store and discussion data for dual-camera apps.

use clap::Parser;
use dualcam_cli::{init_logging, run_collect, CollectArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CollectArgs::parse();
    init_logging();

    match run_collect(&args).await {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
