//! # Sentinel Application Logic
//!
//! Ties the simulator, the policies and the reporting together for the
//! `sentinel` binary. Per-step lines and the summary go to stdout; all
//! diagnostics go through `tracing` to stderr so stdout stays parseable.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use crate::config::Cli;
use crate::drive;
use crate::record::FileRecordWriter;
use crate::report;

/// Run the simulation described by `cli`.
///
/// # Errors
///
/// Returns an error for invalid parameters (negative step budget, empty
/// ensemble) or when stdout or the record file cannot be written.
pub fn run(cli: &Cli) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = cli.run_config();
    tracing::info!(seed = config.seed, agents = config.agents, policy = ?config.policy, "initializing simulation");

    let (mut drive, budget) = drive::build(&config).context("invalid run configuration")?;
    let mut records = cli.records.as_deref().map(FileRecordWriter::create).transpose()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_initial_state(&mut out, &drive.state())?;

    let stats = drive.run(budget, |record| {
        writeln!(out, "{record}")?;
        if let Some(writer) = records.as_mut() {
            writer.write(record)?;
        }
        Ok(())
    })?;

    report::write_summary(&mut out, &stats)?;
    out.flush()?;

    if let Some(writer) = records {
        writer.finish()?;
        if let Some(path) = &cli.records {
            tracing::info!("step records written to {}", path.display());
        }
    }
    Ok(())
}
