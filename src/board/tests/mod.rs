//! Board test suite.
//!
//! Unit tests for the value types live next to their modules; everything
//! here exercises the board as a whole through the public API, mostly on
//! positions built with [`BoardBuilder`].

use std::str::FromStr;

use super::{Board, BoardBuilder, Color, Move, MoveError, Piece, Square};

mod perft;

/// Parse an algebraic square, panicking on bad test input.
fn sq(notation: &str) -> Square {
    Square::from_str(notation).unwrap()
}

/// Apply a sequence of moves given as `"e2e4"` strings, panicking if any
/// is rejected. Promotion letters are not supported; promotion tests pass
/// the piece explicitly.
fn play(board: &mut Board, moves: &[&str]) {
    for mv in moves {
        let (from, to) = mv.split_at(2);
        board
            .submit_move(sq(from), sq(to), None)
            .unwrap_or_else(|err| panic!("move {mv} rejected: {err}"));
    }
}

/// A bare-kings position with extra pieces, White to move.
fn kings_and(pieces: &[(&str, Color, Piece)]) -> Board {
    let mut builder = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e8"), Color::Black, Piece::King);
    for &(square, color, piece) in pieces {
        builder = builder.piece(sq(square), color, piece);
    }
    builder.build()
}
