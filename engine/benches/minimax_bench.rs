use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{Board, Difficulty, Player, evaluate, search, select_move_for};

fn bench_hard_vs_hard_game() {
    let mut board = Board::new();
    let mut mover = Player::X;
    let mut rng = SessionRng::new(42);

    while !evaluate(&board).is_finished() {
        let Some(index) = select_move_for(&board, Difficulty::Hard, mover, &mut rng) else {
            break;
        };
        board = board.with_move(index, mover).expect("search returned an empty cell");
        mover = mover.opponent();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    let empty = Board::new();
    group.bench_function("search_empty", |b| {
        b.iter(|| search(black_box(&empty), true))
    });

    let mid_game: Board = "X.. .O. ..X".parse().expect("valid board");
    group.bench_function("search_mid_game", |b| {
        b.iter(|| search(black_box(&mid_game), true))
    });

    group.bench_function("hard_vs_hard_game", |b| {
        b.iter(bench_hard_vs_hard_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
