use agents::{Ensemble, LiveDashboardPolicy, Policy};
use anyhow::Result;
use sim::{Env, IdsEnv, SimError, State};
use tracing::{debug, info, warn};

use crate::config::{PolicyKind, RunConfig};
use crate::record::StepRecord;
use crate::stats::RunStatistics;

/// Number of steps a drive loop is allowed to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBudget(u64);

impl StepBudget {
    /// # Errors
    ///
    /// Returns [`SimError::InvalidStepBudget`] for negative counts.
    pub fn new(steps: i64) -> Result<Self, SimError> {
        u64::try_from(steps).map(Self).map_err(|_| SimError::InvalidStepBudget(steps))
    }

    #[must_use]
    pub fn steps(self) -> u64 {
        self.0
    }
}

impl From<u64> for StepBudget {
    fn from(steps: u64) -> Self {
        Self(steps)
    }
}

/// Closed loop between a policy and an environment.
///
/// Each iteration asks the policy for an action, decays the policy once,
/// applies the action and folds the outcome into [`RunStatistics`]. Decay
/// happens every step regardless of the action or reward.
pub struct DriveLoop<E: Env, P: Policy> {
    env: E,
    policy: P,
    state: State,
}

impl<E: Env, P: Policy> DriveLoop<E, P> {
    /// Resets `env` and wires it to `policy`.
    pub fn new(mut env: E, policy: P) -> Self {
        let state = env.reset();
        Self { env, policy, state }
    }

    /// State the next decision will be made on.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Runs `budget` steps, handing each step's record to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `sink`; statistics gathered so
    /// far are dropped.
    pub fn run<F>(&mut self, budget: StepBudget, mut sink: F) -> Result<RunStatistics>
    where
        F: FnMut(&StepRecord) -> Result<()>,
    {
        let mut stats = RunStatistics::new();
        if budget.steps() == 0 {
            warn!("step budget is zero, nothing to simulate");
        }

        info!(steps = budget.steps(), policy = self.policy.name(), "starting drive loop");
        for step in 1..=budget.steps() {
            let state = self.state;
            let action = self.policy.decide(&state);
            self.policy.decay_step();
            let outcome = self.env.step(action);

            stats.record(action, &outcome);
            debug!(
                step,
                action = action.label(),
                reward = outcome.reward,
                exploration = self.policy.exploration_rate(),
                "step complete"
            );
            sink(&StepRecord::new(step, state, action, &outcome))?;

            self.state = outcome.next_state;
        }

        info!(
            steps = stats.steps(),
            correct = stats.correct(),
            accuracy = stats.accuracy(),
            exploration = self.policy.exploration_rate(),
            "drive loop finished"
        );
        Ok(stats)
    }
}

/// Builds the environment and policy described by `config`.
///
/// One seed feeds every random source: the environment and the policy each
/// get their own stream derived from it.
///
/// # Errors
///
/// Returns [`SimError::InvalidStepBudget`] for a negative step count and
/// [`SimError::EmptyEnsemble`] for an ensemble of zero agents.
pub fn build(config: &RunConfig) -> Result<(DriveLoop<IdsEnv, Box<dyn Policy>>, StepBudget), SimError> {
    let budget = StepBudget::new(config.steps)?;
    let seeder = fastrand::Rng::with_seed(config.seed);
    let env = IdsEnv::new(seeder.u64(..));
    let policy: Box<dyn Policy> = match config.policy {
        PolicyKind::Ensemble => Box::new(Ensemble::new(config.agents, seeder.u64(..))?),
        PolicyKind::LiveDashboard => Box::new(LiveDashboardPolicy),
    };
    Ok((DriveLoop::new(env, policy), budget))
}

/// Builds and runs a simulation, discarding the record stream.
///
/// # Errors
///
/// See [`build`].
pub fn run_system(config: &RunConfig) -> Result<RunStatistics> {
    let (mut drive, budget) = build(config)?;
    drive.run(budget, |_| Ok(()))
}
