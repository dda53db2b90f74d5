//! Chess Engine Benchmarks
//!
//! Cost of generation, threat analysis and one heuristic selection, using Criterion.

use chess_engine::board::Position;
use chess_engine::config::EngineConfig;
use chess_engine::constants::{COLOR_BLACK, COLOR_WHITE};
use chess_engine::move_gen::{count_defenders, generate_pseudo_legal_moves, is_in_check};
use chess_engine::search::MoveSelector;
use chess_engine::types::Move;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A few developing moves in so pieces can see each other
fn middlegame() -> Position {
    let mut position = Position::starting();
    for mv in [
        Move::new(1, 4, 2, 4),
        Move::new(6, 4, 5, 4),
        Move::new(0, 6, 2, 5),
        Move::new(7, 6, 5, 5),
        Move::new(0, 5, 3, 2),
        Move::new(7, 5, 4, 2),
    ] {
        position.apply_move(&mv);
    }
    position
}

fn bench_move_generation_starting(c: &mut Criterion) {
    let position = Position::starting();

    c.bench_function("generate_moves_starting_position", |b| {
        b.iter(|| black_box(generate_pseudo_legal_moves(&position, COLOR_WHITE)))
    });
}

fn bench_move_generation_both_colors(c: &mut Criterion) {
    let position = middlegame();

    c.bench_function("generate_moves_both_colors", |b| {
        b.iter(|| {
            let white = generate_pseudo_legal_moves(&position, COLOR_WHITE);
            let black = generate_pseudo_legal_moves(&position, COLOR_BLACK);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_threat_queries(c: &mut Criterion) {
    let position = middlegame();

    c.bench_function("check_and_defenders", |b| {
        b.iter(|| {
            let check = is_in_check(&position, COLOR_WHITE);
            let defenders = count_defenders(&position, 2, 5, COLOR_WHITE);
            black_box((check, defenders))
        })
    });
}

fn bench_heuristic_selection(c: &mut Criterion) {
    let position = middlegame();
    let config = EngineConfig {
        opening_ply_limit: 0,
        ..EngineConfig::seeded(1)
    };

    c.bench_function("select_move_middlegame", |b| {
        b.iter(|| {
            let mut selector = MoveSelector::new(config.clone());
            black_box(selector.select_move(&position, COLOR_WHITE))
        })
    });
}

criterion_group!(
    benches,
    bench_move_generation_starting,
    bench_move_generation_both_colors,
    bench_threat_queries,
    bench_heuristic_selection,
);
criterion_main!(benches);
