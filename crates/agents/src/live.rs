use sim::{Action, State};

use crate::policy::Policy;

/// Cut points used by the live monitoring view, most severe first.
pub const LIVE_ISOLATE_THRESHOLD: f32 = 0.75;
pub const LIVE_BLOCK_THRESHOLD: f32 = 0.6;
pub const LIVE_ALERT_THRESHOLD: f32 = 0.4;

/// Deterministic threshold table used by the live monitoring dashboard.
///
/// Unlike [`crate::AgentPolicy`] it never explores and can reach
/// [`Action::Isolate`]. The two tables are kept separate on purpose; they
/// disagree at several cut points.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveDashboardPolicy;

impl LiveDashboardPolicy {
    #[must_use]
    pub fn action_for(state: &State) -> Action {
        let score = state.anomaly_score;
        if score > LIVE_ISOLATE_THRESHOLD {
            Action::Isolate
        } else if score > LIVE_BLOCK_THRESHOLD {
            Action::Block
        } else if score > LIVE_ALERT_THRESHOLD {
            Action::Alert
        } else {
            Action::Allow
        }
    }
}

impl Policy for LiveDashboardPolicy {
    fn decide(&mut self, state: &State) -> Action {
        Self::action_for(state)
    }

    fn name(&self) -> &'static str {
        "live-dashboard"
    }
}
