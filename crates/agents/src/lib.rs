#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Sentinel Agents
//!
//! Decision policies for the Sentinel intrusion detection loop.
//!
//! -   [`AgentPolicy`] is an epsilon-greedy agent. It explores with a
//!     decaying probability and otherwise applies a fixed anomaly-score
//!     threshold rule.
//! -   [`Ensemble`] holds a fixed population of policies and returns the
//!     plurality of their votes. Ties resolve to the least severe action.
//! -   [`LiveDashboardPolicy`] is the deterministic threshold table the live
//!     monitoring view uses.
//!
//! All of them implement [`Policy`], which is what the drive loop runs.

pub mod agent;
pub mod ensemble;
pub mod live;
pub mod policy;

pub use agent::{exploit_action, AgentPolicy, ExplorationSchedule, ALERT_THRESHOLD, BLOCK_THRESHOLD};
pub use ensemble::{Ensemble, Tally, DEFAULT_AGENTS};
pub use live::LiveDashboardPolicy;
pub use policy::Policy;
