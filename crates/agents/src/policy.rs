use sim::{Action, State};

/// A decision unit that maps a traffic state to an action.
///
/// Implementations may keep private mutable state (an exploration rate, a
/// random source) but never share it with other policies.
pub trait Policy {
    /// Choose an action for `state`.
    fn decide(&mut self, state: &State) -> Action;

    /// Advance the policy's learning schedule by one step.
    fn decay_step(&mut self) {}

    /// Probability that [`Policy::decide`] ignores the state.
    fn exploration_rate(&self) -> f32 {
        0.0
    }

    /// Short name used in logs and run summaries.
    fn name(&self) -> &'static str;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn decide(&mut self, state: &State) -> Action {
        (**self).decide(state)
    }

    fn decay_step(&mut self) {
        (**self).decay_step();
    }

    fn exploration_rate(&self) -> f32 {
        (**self).exploration_rate()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
