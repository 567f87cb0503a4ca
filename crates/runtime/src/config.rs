use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which policy drives the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PolicyKind {
    /// Plurality vote over epsilon-greedy agents.
    #[default]
    Ensemble,
    /// Fixed threshold table of the live monitoring dashboard.
    LiveDashboard,
}

/// Command line for the `sentinel` binary.
#[derive(Debug, Parser)]
#[command(name = "sentinel", about = "Simulate multi-agent intrusion detection over synthetic multi-cloud traffic")]
pub struct Cli {
    /// Number of simulation steps.
    #[arg(long, default_value_t = 1000, allow_hyphen_values = true)]
    pub steps: i64,

    /// Seed for every random source in the run. Drawn at startup when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of agents in the ensemble.
    #[arg(long, default_value_t = agents::DEFAULT_AGENTS)]
    pub agents: usize,

    #[arg(long, value_enum, default_value_t = PolicyKind::Ensemble)]
    pub policy: PolicyKind,

    /// Write the step record stream as JSON lines to this file.
    #[arg(long)]
    pub records: Option<PathBuf>,
}

/// Fully resolved run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub steps: i64,
    pub seed: u64,
    pub agents: usize,
    pub policy: PolicyKind,
}

impl RunConfig {
    /// Default run with an explicit seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { steps: 1000, seed, agents: agents::DEFAULT_AGENTS, policy: PolicyKind::Ensemble }
    }
}

impl Cli {
    /// Resolves the seed, drawing one if none was given.
    #[must_use]
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            steps: self.steps,
            seed: self.seed.unwrap_or_else(|| fastrand::u64(..)),
            agents: self.agents,
            policy: self.policy,
        }
    }
}
