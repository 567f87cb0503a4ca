//! # Sentinel
//!
//! Entry point for the intrusion detection simulator. With no flags it runs
//! 1000 steps with a three-agent ensemble and prints one line per step
//! followed by the accuracy and per-cloud summary.

use anyhow::Result;
use clap::Parser;
use runtime::{app, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run(&cli)
}
