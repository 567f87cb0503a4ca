use agents::{Ensemble, Policy, DEFAULT_AGENTS};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sim::{Env, IdsEnv};

fn bench_ensemble_cycle(c: &mut Criterion) {
    c.bench_function("ensemble_decide_decay_step", |b| {
        let mut env = IdsEnv::new(7);
        let mut ensemble = Ensemble::new(DEFAULT_AGENTS, 7).unwrap();
        let mut state = env.reset();
        b.iter(|| {
            let action = ensemble.decide(black_box(&state));
            ensemble.decay_step();
            state = env.step(action).next_state;
        });
    });
}

criterion_group!(benches, bench_ensemble_cycle);
criterion_main!(benches);
