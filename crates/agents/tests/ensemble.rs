use agents::{Ensemble, LiveDashboardPolicy, Policy, Tally, DEFAULT_AGENTS};
use sim::{Action, SimError, State};

/// Member that always casts the same vote.
struct Fixed(Action);

impl Policy for Fixed {
    fn decide(&mut self, _state: &State) -> Action {
        self.0
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Member that only records how often it was decayed.
#[derive(Default)]
struct Counting {
    decays: usize,
}

impl Policy for Counting {
    fn decide(&mut self, _state: &State) -> Action {
        Action::Allow
    }

    fn decay_step(&mut self) {
        self.decays += 1;
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

fn fixed(votes: &[Action]) -> Ensemble<Fixed> {
    Ensemble::from_members(votes.iter().copied().map(Fixed).collect()).unwrap()
}

#[test]
fn plurality_wins() {
    let mut ensemble = fixed(&[Action::Block, Action::Block, Action::Allow]);
    assert_eq!(ensemble.decide(&State::with_anomaly(0.3)), Action::Block);
}

#[test]
fn three_way_tie_goes_to_least_severe() {
    let mut ensemble = fixed(&[Action::Block, Action::Alert, Action::Allow]);
    assert_eq!(ensemble.decide(&State::with_anomaly(0.3)), Action::Allow);
}

#[test]
fn tie_break_ignores_vote_order() {
    let mut a = fixed(&[Action::Isolate, Action::Block, Action::Block, Action::Isolate]);
    let mut b = fixed(&[Action::Block, Action::Isolate, Action::Isolate, Action::Block]);
    let state = State::default();
    assert_eq!(a.decide(&state), Action::Block);
    assert_eq!(b.decide(&state), Action::Block);
}

#[test]
fn tally_counts_every_vote() {
    let tally = Tally::from_votes([Action::Alert, Action::Alert, Action::Isolate]);
    assert_eq!(tally.count(Action::Alert), 2);
    assert_eq!(tally.count(Action::Isolate), 1);
    assert_eq!(tally.count(Action::Allow), 0);
    assert_eq!(tally.total(), 3);
    assert_eq!(tally.winner(), Some(Action::Alert));
}

#[test]
fn decay_reaches_every_member() {
    let mut ensemble = Ensemble::from_members(vec![Counting::default(), Counting::default()]).unwrap();
    for _ in 0..5 {
        ensemble.decay_step();
    }
    assert!(ensemble.members().iter().all(|m| m.decays == 5));
}

#[test]
fn default_population_has_three_agents() {
    let ensemble = Ensemble::new(DEFAULT_AGENTS, 1).unwrap();
    assert_eq!(ensemble.len(), 3);
    assert_eq!(ensemble.exploration_rate(), 1.0);
}

#[test]
fn empty_population_is_rejected() {
    assert_eq!(Ensemble::new(0, 1).err(), Some(SimError::EmptyEnsemble));
}

#[test]
fn members_decay_together_but_explore_independently() {
    let mut ensemble = Ensemble::new(3, 99).unwrap();
    for _ in 0..10 {
        ensemble.decay_step();
    }
    let rates: Vec<f32> = ensemble.members().iter().map(Policy::exploration_rate).collect();
    assert!(rates.windows(2).all(|w| w[0] == w[1]));

    // with every member fully exploring, votes should not all be identical
    let mut fresh = Ensemble::new(3, 5).unwrap();
    let state = State::with_anomaly(0.2);
    let split = (0..100).any(|_| {
        let tally = fresh.vote(&state);
        Action::ALL.iter().all(|a| tally.count(*a) < 3)
    });
    assert!(split, "independent members never disagreed");
}

#[test]
fn live_dashboard_table() {
    let cases = [
        (0.9, Action::Isolate),
        (0.75, Action::Block),
        (0.61, Action::Block),
        (0.6, Action::Alert),
        (0.41, Action::Alert),
        (0.4, Action::Allow),
    ];
    let mut policy = LiveDashboardPolicy;
    for (score, expected) in cases {
        assert_eq!(policy.decide(&State::with_anomaly(score)), expected, "score {score}");
    }
    policy.decay_step();
    assert_eq!(policy.exploration_rate(), 0.0);
}
