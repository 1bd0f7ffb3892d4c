use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spider_engine::core::{GameRng, GameState};
use spider_engine::rules::{init_game, RulesEngine, SpiderRules};

fn bench_new_game(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("init_game", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            init_game(&mut GameRng::new(black_box(seed)))
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let rules = SpiderRules::new();
    let state = GameState::new(12345);

    c.bench_function("legal_moves", |b| {
        b.iter(|| rules.legal_moves(black_box(&state)))
    });
}

fn bench_playout(c: &mut Criterion) {
    let rules = SpiderRules::new();

    c.bench_function("playout_200_moves", |b| {
        b.iter(|| {
            let mut state = GameState::new(777);
            // Always take the last legal move. Deal is listed last, so the
            // stock goes first and runs follow.
            for _ in 0..200 {
                let Some(mv) = rules.legal_moves(&state).pop() else {
                    break;
                };
                if rules.apply_move(&mut state, &mv).is_err() {
                    break;
                }
            }
            state
        })
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let state = GameState::new(42);

    c.bench_function("state_clone", |b| b.iter(|| black_box(&state).clone()));
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves,
    bench_playout,
    bench_state_clone
);
criterion_main!(benches);
