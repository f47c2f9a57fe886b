use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_rules::game_state::game::Game;
use plum_rules::game_state::game_options::GameOptions;

const POSITIONS: &[(&str, &str)] = &[
    (
        "start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn bench_legal_move_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_move_list");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for (name, fen) in POSITIONS {
        let game = Game::from_fen(fen, GameOptions::default()).expect("benchmark FEN should parse");
        group.bench_with_input(BenchmarkId::from_parameter(name), &game, |b, game| {
            b.iter(|| black_box(game.legal_move_list().len()));
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = Game::new_game(GameOptions::default());
    game.start();
    c.bench_function("snapshot_start", |b| {
        b.iter(|| black_box(game.snapshot().pieces.len()));
    });
}

criterion_group!(legal_move_benches, bench_legal_move_list, bench_snapshot);
criterion_main!(legal_move_benches);
