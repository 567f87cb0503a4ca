use sim::{Action, SimError, State};

use crate::policy::Policy;

/// Anomaly score above which an exploiting agent blocks.
pub const BLOCK_THRESHOLD: f32 = 0.65;
/// Anomaly score above which an exploiting agent alerts.
pub const ALERT_THRESHOLD: f32 = 0.45;

/// Exploration rate parameters for an [`AgentPolicy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorationSchedule {
    pub initial: f32,
    pub floor: f32,
    pub decay: f32,
}

impl Default for ExplorationSchedule {
    fn default() -> Self {
        Self { initial: 1.0, floor: 0.05, decay: 0.99 }
    }
}

impl ExplorationSchedule {
    /// Never explores.
    #[must_use]
    pub const fn greedy() -> Self {
        Self { initial: 0.0, floor: 0.0, decay: 1.0 }
    }

    /// One decay step applied to `rate`.
    ///
    /// Rates at or below the floor are left untouched.
    #[must_use]
    pub fn next(&self, rate: f32) -> f32 {
        if rate > self.floor {
            (rate * self.decay).max(self.floor)
        } else {
            rate
        }
    }
}

/// Threshold rule used when an agent exploits.
///
/// `Isolate` is never returned here; only exploration reaches it.
#[must_use]
pub fn exploit_action(state: &State) -> Action {
    let score = state.anomaly_score;
    if score > BLOCK_THRESHOLD {
        Action::Block
    } else if score > ALERT_THRESHOLD {
        Action::Alert
    } else {
        Action::Allow
    }
}

/// Epsilon-greedy agent over the threshold rule.
///
/// Each agent owns its exploration rate and random source. The rate only ever
/// shrinks, one multiplicative step per [`Policy::decay_step`].
#[derive(Debug, Clone)]
pub struct AgentPolicy {
    rng: fastrand::Rng,
    epsilon: f32,
    schedule: ExplorationSchedule,
    action_count: usize,
}

impl AgentPolicy {
    /// Agent with the default schedule exploring the full action space.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_schedule(ExplorationSchedule::default(), seed)
    }

    #[must_use]
    pub fn with_schedule(schedule: ExplorationSchedule, seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            epsilon: schedule.initial,
            schedule,
            action_count: Action::COUNT,
        }
    }

    /// Restricts exploration to the first `count` actions.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidActionCount`] if `count` is zero or larger
    /// than the action space.
    pub fn with_action_count(mut self, count: usize) -> Result<Self, SimError> {
        if count == 0 || count > Action::COUNT {
            return Err(SimError::InvalidActionCount(count));
        }
        self.action_count = count;
        Ok(self)
    }

    #[must_use]
    pub fn schedule(&self) -> ExplorationSchedule {
        self.schedule
    }

    #[must_use]
    pub fn action_count(&self) -> usize {
        self.action_count
    }

    fn explore(&mut self) -> Action {
        Action::ALL[self.rng.usize(..self.action_count)]
    }
}

impl Policy for AgentPolicy {
    fn decide(&mut self, state: &State) -> Action {
        if self.rng.f32() < self.epsilon {
            self.explore()
        } else {
            exploit_action(state)
        }
    }

    fn decay_step(&mut self) {
        self.epsilon = self.schedule.next(self.epsilon);
    }

    fn exploration_rate(&self) -> f32 {
        self.epsilon
    }

    fn name(&self) -> &'static str {
        "agent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_is_sticky() {
        let s = ExplorationSchedule::default();
        assert_eq!(s.next(0.05), 0.05);
        assert_eq!(s.next(0.0505), 0.05);
    }

    #[test]
    fn cut_points_are_exclusive() {
        assert_eq!(exploit_action(&State::with_anomaly(0.65)), Action::Alert);
        assert_eq!(exploit_action(&State::with_anomaly(0.45)), Action::Allow);
    }
}
