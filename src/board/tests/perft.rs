//! Perft node counts against published reference values.

use super::{sq, Board, BoardBuilder, Color, Piece};

/// Both sides castle-ready with empty middle ranks, White to move.
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

/// Promotion-heavy position: both sides have three pawns one step from
/// promoting, with knights guarding the corners. Black to move.
fn promotion_position() -> Board {
    BoardBuilder::new()
        .piece(sq("a8"), Color::Black, Piece::Knight)
        .piece(sq("c8"), Color::Black, Piece::Knight)
        .piece(sq("a7"), Color::White, Piece::Pawn)
        .piece(sq("b7"), Color::White, Piece::Pawn)
        .piece(sq("c7"), Color::White, Piece::Pawn)
        .piece(sq("d7"), Color::Black, Piece::King)
        .piece(sq("e2"), Color::White, Piece::King)
        .piece(sq("f2"), Color::Black, Piece::Pawn)
        .piece(sq("g2"), Color::Black, Piece::Pawn)
        .piece(sq("h2"), Color::Black, Piece::Pawn)
        .piece(sq("f1"), Color::White, Piece::Knight)
        .piece(sq("h1"), Color::White, Piece::Knight)
        .side_to_move(Color::Black)
        .build()
}

#[test]
fn perft_zero_is_one() {
    assert_eq!(Board::new().perft(0), 1);
}

#[test]
fn perft_starting_position_shallow() {
    let board = Board::new();
    assert_eq!(board.perft(1), 20);
    assert_eq!(board.perft(2), 400);
    assert_eq!(board.perft(3), 8_902);
}

#[test]
fn perft_starting_position_depth_four() {
    assert_eq!(Board::new().perft(4), 197_281);
}

#[test]
fn perft_castling_position() {
    let board = castling_position();
    assert_eq!(board.perft(1), 26);
    assert_eq!(board.perft(2), 568);
    assert_eq!(board.perft(3), 13_744);
}

#[test]
fn perft_promotion_position() {
    let board = promotion_position();
    assert_eq!(board.perft(1), 24);
    assert_eq!(board.perft(2), 496);
    assert_eq!(board.perft(3), 9_483);
}
