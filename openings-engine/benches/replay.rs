use criterion::{black_box, criterion_group, criterion_main, Criterion};

use openings_engine::*;

const NAJDORF: &str = "1. e4 c5 2. Nf3 d6 3. d4 cxd4 4. Nxd4 Nf6 5. Nc3 a6 6. Be3 e5 \
                       7. Nb3 Be6 8. f3 Be7 9. Qd2 O-O 10. O-O-O Nbd7 11. g4 b5";

pub fn criterion_parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse: najdorf", |b| {
        b.iter(|| MoveSequence::parse(black_box(NAJDORF)))
    });
}

/// Stepping through every ply of a line, as a viewer does, with and without the cache.
pub fn criterion_scrub_benchmark(c: &mut Criterion) {
    // Setup
    let engine = PositionEngine::standard();
    let moves = MoveSequence::parse(NAJDORF);
    let final_fen = engine.final_position(&moves).fen;
    let plies: Vec<PlyIndex> = (START_PLY..=moves.last_ply()).collect();

    // Benchmarks
    c.bench_function("scrub: engine", |b| {
        b.iter(|| {
            for ply in &plies {
                let fen = engine.position_at_ply(black_box(&moves), *ply, &final_fen);
                black_box(fen.unwrap());
            }
        })
    });

    c.bench_function("scrub: cache", |b| {
        b.iter(|| {
            let mut cache = PositionCache::standard();
            for ply in &plies {
                let fen = cache.position_at_ply(black_box(&moves), *ply, &final_fen);
                black_box(fen.unwrap());
            }
        })
    });

    c.bench_function("replay: final position", |b| {
        b.iter(|| engine.final_position(black_box(&moves)))
    });
}

criterion_group! {
    name = replay_benches;
    config = Criterion::default().without_plots();
    targets = criterion_parse_benchmark, criterion_scrub_benchmark
}
criterion_main!(replay_benches);
