use serde::Serialize;
use sim::{Action, CloudProvider, StepOutcome};

/// Traffic seen from one provider during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CloudCounts {
    pub total: u64,
    pub attacks: u64,
}

/// Counters accumulated over a single drive-loop run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    steps: u64,
    correct: u64,
    clouds: [CloudCounts; CloudProvider::COUNT],
    actions: [u64; Action::COUNT],
}

impl RunStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one step into the counters.
    pub fn record(&mut self, action: Action, outcome: &StepOutcome) {
        self.steps += 1;
        self.actions[action.index()] += 1;
        if outcome.reward > 0 {
            self.correct += 1;
        }
        let cloud = &mut self.clouds[outcome.info.cloud.index()];
        cloud.total += 1;
        if outcome.info.is_attack {
            cloud.attacks += 1;
        }
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Steps whose reward was positive.
    #[must_use]
    pub fn correct(&self) -> u64 {
        self.correct
    }

    /// Percentage of correct decisions. A run with no steps reports `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        if self.steps == 0 {
            return 0.0;
        }
        self.correct as f64 / self.steps as f64 * 100.0
    }

    #[must_use]
    pub fn cloud(&self, cloud: CloudProvider) -> CloudCounts {
        self.clouds[cloud.index()]
    }

    /// Per-provider counts in reporting order.
    pub fn clouds(&self) -> impl Iterator<Item = (CloudProvider, CloudCounts)> + '_ {
        CloudProvider::ALL.into_iter().map(move |c| (c, self.cloud(c)))
    }

    #[must_use]
    pub fn action_count(&self, action: Action) -> u64 {
        self.actions[action.index()]
    }

    /// Steps where traffic was let through.
    #[must_use]
    pub fn normal(&self) -> u64 {
        self.action_count(Action::Allow)
    }

    /// Steps where any mitigation was applied.
    #[must_use]
    pub fn threats(&self) -> u64 {
        self.steps - self.normal()
    }

    /// Steps where the traffic was isolated.
    #[must_use]
    pub fn critical(&self) -> u64 {
        self.action_count(Action::Isolate)
    }
}
