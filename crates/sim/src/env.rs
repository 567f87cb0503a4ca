use crate::error::SimError;
use crate::types::{Action, State, StepOutcome};

/// Reinforcement learning environment trait.
///
/// Modelled after the classic Gym interface with a discrete action space.
/// Each call to [`step`] scores one action against the current state,
/// samples the next state and returns both.
///
/// [`step`]: Env::step
pub trait Env {
    /// Apply `action` to the current state and advance to the next one.
    fn step(&mut self, action: Action) -> StepOutcome;

    /// Resample the environment and return the new initial state.
    fn reset(&mut self) -> State;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize {
        State::LEN
    }

    /// Number of discrete actions.
    fn action_size(&self) -> usize {
        Action::COUNT
    }

    /// Like [`Env::step`] but takes a raw ordinal, rejecting anything outside
    /// the action space.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAction`] when `ordinal` is not a valid action.
    fn step_ordinal(&mut self, ordinal: i64) -> Result<StepOutcome, SimError> {
        let action = Action::try_from(ordinal)?;
        Ok(self.step(action))
    }
}
