use criterion::{black_box, criterion_group, criterion_main, Criterion};

use loa_engine::coretypes::Side;
use loa_engine::fen::Fen;
use loa_engine::*;

/// Number of positions reachable in exactly `depth` moves, stopping at finished games.
fn count_leaves(board: Board, depth: u32) -> u64 {
    if depth == 0 || board.game_over() {
        return 1;
    }
    board
        .legal_moves()
        .into_iter()
        .map(|move_| count_leaves(board.make_move(move_), depth - 1))
        .sum()
}

pub fn criterion_movegen_benchmark(c: &mut Criterion) {
    // Setup
    let start = Board::start_position();
    let middle = Board::parse_fen("1b2bb2/w1b4w/w3w2w/2wb1b1w/w2b3w/1w3w2/3b3w/1b2b3 b 14").unwrap();

    // Benchmarks

    c.bench_function("start_position: legal_moves", |b| {
        b.iter(|| {
            let moves = black_box(start).legal_moves();
            assert_eq!(moves.len(), 36);
        })
    });

    c.bench_function("start_position: count_leaves(2)", |b| {
        b.iter(|| count_leaves(black_box(start), black_box(2)))
    });

    c.bench_function("middle_game: count_leaves(2)", |b| {
        b.iter(|| count_leaves(black_box(middle), black_box(2)))
    });

    c.bench_function("middle_game: region_sizes", |b| {
        b.iter(|| {
            let board = black_box(middle);
            (board.region_sizes(Side::Black), board.region_sizes(Side::White))
        })
    });
}

criterion_group! {
    name = movegen_benches;
    config = Criterion::default().without_plots().sample_size(30);
    targets = criterion_movegen_benchmark
}

criterion_main!(movegen_benches);
