use sim::{Action, SimError, State};
use tracing::debug;

use crate::agent::AgentPolicy;
use crate::policy::Policy;

/// Population size used when none is configured.
pub const DEFAULT_AGENTS: usize = 3;

/// Vote counts per action for a single decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [usize; Action::COUNT],
}

impl Tally {
    #[must_use]
    pub fn from_votes<I: IntoIterator<Item = Action>>(votes: I) -> Self {
        let mut tally = Self::default();
        for action in votes {
            tally.add(action);
        }
        tally
    }

    pub fn add(&mut self, action: Action) {
        self.counts[action.index()] += 1;
    }

    #[must_use]
    pub fn count(&self, action: Action) -> usize {
        self.counts[action.index()]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Action with the most votes, or `None` when nothing was counted.
    ///
    /// Ties go to the lowest ordinal, i.e. the least severe action.
    #[must_use]
    pub fn winner(&self) -> Option<Action> {
        let mut best: Option<(Action, usize)> = None;
        for action in Action::ALL {
            let count = self.count(action);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((action, count)),
            }
        }
        best.map(|(action, _)| action)
    }
}

/// Fixed population of independent policies combined by plurality vote.
///
/// Every member sees the same state on each decision and keeps its own
/// exploration schedule; nothing is shared between members.
pub struct Ensemble<P: Policy = AgentPolicy> {
    members: Vec<P>,
}

impl Ensemble<AgentPolicy> {
    /// Builds `size` default agents. Member seeds are drawn from `seed` so
    /// the whole population is reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::EmptyEnsemble`] when `size` is zero.
    pub fn new(size: usize, seed: u64) -> Result<Self, SimError> {
        let seeder = fastrand::Rng::with_seed(seed);
        let members = (0..size).map(|_| AgentPolicy::new(seeder.u64(..))).collect();
        Self::from_members(members)
    }
}

impl<P: Policy> Ensemble<P> {
    /// # Errors
    ///
    /// Returns [`SimError::EmptyEnsemble`] when `members` is empty.
    pub fn from_members(members: Vec<P>) -> Result<Self, SimError> {
        if members.is_empty() {
            return Err(SimError::EmptyEnsemble);
        }
        Ok(Self { members })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn members(&self) -> &[P] {
        &self.members
    }

    /// Collects one vote from every member for `state`.
    pub fn vote(&mut self, state: &State) -> Tally {
        Tally::from_votes(self.members.iter_mut().map(|m| m.decide(state)))
    }
}

impl<P: Policy> Policy for Ensemble<P> {
    fn decide(&mut self, state: &State) -> Action {
        let tally = self.vote(state);
        // members is never empty, so there is always a winner
        let action = tally.winner().unwrap_or(Action::Allow);
        debug!(?tally, action = action.label(), "ensemble vote");
        action
    }

    fn decay_step(&mut self) {
        for member in &mut self.members {
            member.decay_step();
        }
    }

    /// Mean exploration rate across members.
    #[allow(clippy::cast_precision_loss)]
    fn exploration_rate(&self) -> f32 {
        let sum: f32 = self.members.iter().map(Policy::exploration_rate).sum();
        sum / self.members.len() as f32
    }

    fn name(&self) -> &'static str {
        "ensemble"
    }
}
