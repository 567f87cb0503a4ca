use agents::{Ensemble, Policy};
use runtime::{build, run_system, DriveLoop, PolicyKind, RunConfig, RunStatistics, StepBudget, StepRecord};
use sim::{Action, CloudProvider, Env, IdsEnv, SimError, State, StepInfo, StepOutcome};

/// Environment replaying a fixed list of anomaly scores, all attributed to AWS.
struct Scripted {
    scores: Vec<f32>,
    cursor: usize,
}

impl Scripted {
    fn new(scores: &[f32]) -> Self {
        Self { scores: scores.to_vec(), cursor: 0 }
    }

    fn current(&self) -> State {
        State::with_anomaly(self.scores[self.cursor % self.scores.len()])
    }
}

impl Env for Scripted {
    fn step(&mut self, action: Action) -> StepOutcome {
        let attack = sim::is_attack(&self.current());
        let reward = sim::reward_for(attack, action);
        self.cursor += 1;
        StepOutcome {
            next_state: self.current(),
            reward,
            terminal: false,
            info: StepInfo { cloud: CloudProvider::Aws, is_attack: attack },
        }
    }

    fn reset(&mut self) -> State {
        self.cursor = 0;
        self.current()
    }
}

/// Always-allow policy counting its decay calls.
#[derive(Default)]
struct AllowAll {
    decays: usize,
}

impl Policy for AllowAll {
    fn decide(&mut self, _state: &State) -> Action {
        Action::Allow
    }

    fn decay_step(&mut self) {
        self.decays += 1;
    }

    fn name(&self) -> &'static str {
        "allow-all"
    }
}

fn collect(drive: &mut DriveLoop<impl Env, impl Policy>, steps: u64) -> (RunStatistics, Vec<StepRecord>) {
    let mut records = Vec::new();
    let stats = drive
        .run(StepBudget::from(steps), |r| {
            records.push(r.clone());
            Ok(())
        })
        .unwrap();
    (stats, records)
}

#[test]
fn thousand_seeded_steps_account_for_every_step() {
    let stats = run_system(&RunConfig::seeded(42)).unwrap();
    let total: u64 = stats.clouds().map(|(_, c)| c.total).sum();
    assert_eq!(total, 1000);
    assert_eq!(stats.steps(), 1000);
    assert!((0.0..=100.0).contains(&stats.accuracy()));
    for (cloud, counts) in stats.clouds() {
        assert!(counts.attacks <= counts.total, "{cloud}");
        assert!(counts.total > 0, "{cloud} never sampled");
    }
}

#[test]
fn equal_seeds_give_equal_runs() {
    let a = run_system(&RunConfig::seeded(2024)).unwrap();
    let b = run_system(&RunConfig::seeded(2024)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn ensemble_improves_once_exploration_decays() {
    // after ~300 steps all agents sit at the 5% floor and mostly exploit
    let config = RunConfig { steps: 5000, ..RunConfig::seeded(8) };
    let stats = run_system(&config).unwrap();
    assert!(stats.accuracy() > 70.0, "accuracy {}", stats.accuracy());
}

#[test]
fn zero_steps_is_a_defined_empty_run() {
    let config = RunConfig { steps: 0, ..RunConfig::seeded(1) };
    let stats = run_system(&config).unwrap();
    assert_eq!(stats.accuracy(), 0.0);
    assert_eq!(stats.steps(), 0);
    assert!(stats.clouds().all(|(_, c)| c.total == 0 && c.attacks == 0));
}

#[test]
fn negative_budget_is_rejected() {
    let config = RunConfig { steps: -1, ..RunConfig::seeded(1) };
    assert_eq!(build(&config).err(), Some(SimError::InvalidStepBudget(-1)));

    let err = run_system(&config).unwrap_err();
    assert_eq!(err.downcast_ref::<SimError>(), Some(&SimError::InvalidStepBudget(-1)));
}

#[test]
fn empty_ensemble_is_rejected() {
    let config = RunConfig { agents: 0, ..RunConfig::seeded(1) };
    assert_eq!(build(&config).err(), Some(SimError::EmptyEnsemble));
}

#[test]
fn decay_runs_once_per_step() {
    let mut drive = DriveLoop::new(Scripted::new(&[0.9, 0.1]), AllowAll::default());
    collect(&mut drive, 7);
    assert_eq!(drive.policy().decays, 7);
}

#[test]
fn statistics_follow_rewards() {
    // allow-all is right on every normal sample and wrong on every attack
    let mut drive = DriveLoop::new(Scripted::new(&[0.9, 0.1, 0.2, 0.7]), AllowAll::default());
    let (stats, records) = collect(&mut drive, 4);
    assert_eq!(stats.correct(), 2);
    assert_eq!(stats.accuracy(), 50.0);
    assert_eq!(stats.cloud(CloudProvider::Aws).total, 4);
    assert_eq!(stats.cloud(CloudProvider::Aws).attacks, 2);
    let rewards: Vec<i32> = records.iter().map(|r| r.reward).collect();
    assert_eq!(rewards, [-10, 5, 5, -10]);
}

#[test]
fn records_describe_the_state_decided_on() {
    let mut drive = DriveLoop::new(Scripted::new(&[0.3, 0.8]), AllowAll::default());
    let (_, records) = collect(&mut drive, 3);
    let steps: Vec<u64> = records.iter().map(|r| r.step).collect();
    assert_eq!(steps, [1, 2, 3]);
    assert_eq!(records[0].state.anomaly_score, 0.3);
    assert_eq!(records[1].state.anomaly_score, 0.8);
    assert!(records[1].is_attack);
    assert_eq!(records[0].decision, "Allow");
    assert_eq!(records[0].to_string(), "Step 1 | Cloud: AWS | Action: 0 | Reward: 5");
}

#[test]
fn sink_errors_abort_the_run() {
    let mut drive = DriveLoop::new(IdsEnv::new(3), Ensemble::new(3, 3).unwrap());
    let mut seen = 0;
    let result = drive.run(StepBudget::from(10), |_| {
        seen += 1;
        if seen == 4 {
            anyhow::bail!("sink full");
        }
        Ok(())
    });
    assert!(result.is_err());
    assert_eq!(seen, 4);
}

#[test]
fn live_dashboard_policy_drives_a_run() {
    let config = RunConfig { policy: PolicyKind::LiveDashboard, ..RunConfig::seeded(5) };
    let (mut drive, budget) = build(&config).unwrap();
    let (stats, records) = {
        let mut records = Vec::new();
        let stats = drive
            .run(budget, |r| {
                records.push(r.clone());
                Ok(())
            })
            .unwrap();
        (stats, records)
    };
    assert_eq!(drive.policy().name(), "live-dashboard");
    assert_eq!(stats.steps(), 1000);
    // the live table isolates anything above 0.75, so isolation shows up
    assert!(stats.critical() > 0);
    for r in &records {
        let expected = agents::LiveDashboardPolicy::action_for(&r.state);
        assert_eq!(r.action, expected);
    }
}
