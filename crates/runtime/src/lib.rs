#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Sentinel Runtime
//!
//! Drive loop and reporting for the Sentinel intrusion detection
//! simulator.
//!
//! [`DriveLoop`] connects any [`agents::Policy`] to any [`sim::Env`]. Every
//! step produces a [`StepRecord`], the row shape the monitoring dashboard
//! consumes, and updates a [`RunStatistics`]. The `sentinel` binary prints
//! one line per record and a summary at the end.

pub mod app;
pub mod config;
pub mod drive;
pub mod record;
pub mod report;
pub mod stats;

pub use config::{Cli, PolicyKind, RunConfig};
pub use drive::{build, run_system, DriveLoop, StepBudget};
pub use record::{FileRecordWriter, RecordWriter, StepRecord};
pub use stats::{CloudCounts, RunStatistics};
