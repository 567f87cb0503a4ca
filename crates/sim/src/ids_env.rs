use tracing::trace;

use crate::env::Env;
use crate::types::{Action, CloudProvider, State, StepInfo, StepOutcome};

/// Anomaly score above which a state counts as an attack.
pub const ATTACK_THRESHOLD: f32 = 0.6;

/// Reward for mitigating an attack.
pub const REWARD_MITIGATED: i32 = 10;
/// Reward for letting an attack through.
pub const REWARD_MISSED: i32 = -10;
/// Reward for letting normal traffic through.
pub const REWARD_PASSED: i32 = 5;
/// Reward for acting on normal traffic.
pub const REWARD_FALSE_POSITIVE: i32 = -5;

/// Ground truth for a state.
#[must_use]
pub fn is_attack(state: &State) -> bool {
    state.anomaly_score > ATTACK_THRESHOLD
}

/// Reward table, evaluated in precedence order.
#[must_use]
pub fn reward_for(attack: bool, action: Action) -> i32 {
    match (attack, action) {
        (true, a) if a.is_mitigation() => REWARD_MITIGATED,
        (true, _) => REWARD_MISSED,
        (false, Action::Allow) => REWARD_PASSED,
        (false, _) => REWARD_FALSE_POSITIVE,
    }
}

/// Synthetic intrusion-detection environment.
///
/// Every state and cloud attribution is drawn fresh from the owned random
/// source; nothing carries over between steps except the current sample.
pub struct IdsEnv {
    rng: fastrand::Rng,
    state: State,
    cloud: CloudProvider,
}

impl IdsEnv {
    /// Creates an environment seeded with `seed` and samples its first state.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let state = State::sample(&mut rng);
        let cloud = CloudProvider::sample(&mut rng);
        Self { rng, state, cloud }
    }

    /// Forces the current sample. Useful for scoring a known state.
    pub fn set_state(&mut self, state: State, cloud: CloudProvider) {
        self.state = state;
        self.cloud = cloud;
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Provider the current state is attributed to.
    #[must_use]
    pub fn cloud(&self) -> CloudProvider {
        self.cloud
    }

    fn resample(&mut self) {
        self.state = State::sample(&mut self.rng);
        self.cloud = CloudProvider::sample(&mut self.rng);
    }
}

impl Env for IdsEnv {
    fn step(&mut self, action: Action) -> StepOutcome {
        let attack = is_attack(&self.state);
        let reward = reward_for(attack, action);
        trace!(
            anomaly_score = self.state.anomaly_score,
            attack,
            action = action.label(),
            reward,
            "scored step"
        );

        self.resample();

        StepOutcome {
            next_state: self.state,
            reward,
            terminal: false,
            info: StepInfo { cloud: self.cloud, is_attack: attack },
        }
    }

    fn reset(&mut self) -> State {
        self.resample();
        self.state
    }
}
