use clap::Parser;

mod aggregator;
mod config;
mod discovery;
mod io;
mod models;
mod utils;

use crate::aggregator::aggregate;
use crate::config::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    println!("📸 Building project snapshot...");

    if let Err(e) = aggregate(&args.output).await {
        eprintln!("💥 File operation error: {}", e);
    }
}
