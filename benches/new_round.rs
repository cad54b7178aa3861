//! Round construction benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_match::cards::ThemeRegistry;
use memory_match::core::{GameRng, GridSize};
use memory_match::rules::RoundEngine;

fn bench_new_round(c: &mut Criterion) {
    let engine = RoundEngine::default();
    let registry = ThemeRegistry::builtin();
    let theme = registry.get("animals").expect("builtin theme");
    let mut rng = GameRng::new(42);

    for grid in [GridSize::EASY, GridSize::HARD] {
        c.bench_function(&format!("new_round {}", grid), |b| {
            b.iter(|| engine.new_round(black_box(grid), theme, &mut rng))
        });
    }
}

fn bench_state_clone(c: &mut Criterion) {
    let engine = RoundEngine::default();
    let registry = ThemeRegistry::builtin();
    let theme = registry.get("food").expect("builtin theme");
    let state = engine
        .new_round(GridSize::HARD, theme, &mut GameRng::new(7))
        .expect("enough symbols");

    c.bench_function("round_state clone", |b| b.iter(|| black_box(&state).clone()));
}

criterion_group!(benches, bench_new_round, bench_state_clone);
criterion_main!(benches);
