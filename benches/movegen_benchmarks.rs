//! Benchmarks for move generation and position encoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::{Board, BoardBuilder};
use chess_core::{Color, Piece, Square};

fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square notation")
}

/// Open middlegame-like position with both sides castle-ready.
fn castling_position() -> Board {
    BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("h1"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .piece(sq("a8"), Color::Black, Piece::Rook)
        .piece(sq("h8"), Color::Black, Piece::Rook)
        .castle_kingside(Color::White)
        .castle_queenside(Color::White)
        .castle_kingside(Color::Black)
        .castle_queenside(Color::Black)
        .build()
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let open = castling_position();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("castling", depth), &depth, |b, &depth| {
            b.iter(|| open.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves().count()))
    });

    let open = castling_position();
    group.bench_function("castling_position", |b| {
        b.iter(|| black_box(open.legal_moves().count()))
    });

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("attempt_move/e2e4", |b| {
        b.iter(|| black_box(board.attempt_move(sq("e2"), sq("e4"), None)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("to_tensor/startpos", |b| {
        b.iter(|| black_box(board.to_tensor()))
    });
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_validation,
    bench_encode
);
criterion_main!(benches);
