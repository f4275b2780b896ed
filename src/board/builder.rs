//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, mostly for tests and adapters
//! that need something other than the starting position.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Option<Color>,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    move_counter: u32,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: None,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            move_counter: 0,
        }
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = Some(color);
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the ply counter.
    #[must_use]
    pub const fn move_counter(mut self, count: u32) -> Self {
        self.move_counter = count;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }

        board.white_to_move = self.side_to_move.unwrap_or(Color::White) == Color::White;
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.move_counter = self.move_counter;
        board.sync_occupancy();

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_from_builder() {
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut builder = BoardBuilder::new().castling(CastlingRights::all());
        for (file, &piece) in back_rank.iter().enumerate() {
            builder = builder
                .piece(Square(0, file), Color::White, piece)
                .piece(Square(7, file), Color::Black, piece)
                .piece(Square(1, file), Color::White, Piece::Pawn)
                .piece(Square(6, file), Color::Black, Piece::Pawn);
        }

        assert_eq!(builder.build(), Board::new());
    }

    #[test]
    fn test_empty_board_with_kings() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .build();

        assert_eq!(board.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 4)), Some((Color::Black, Piece::King)));
        assert!(board.piece_at(Square(0, 0)).is_none());
        assert_eq!(board.occupied().popcount(), 2);
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, Piece::Queen)
            .piece(Square(3, 3), Color::Black, Piece::Knight)
            .build();

        assert_eq!(
            board.piece_at(Square(3, 3)),
            Some((Color::Black, Piece::Knight))
        );
    }

    #[test]
    fn test_side_to_move() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .build();

        assert!(!board.white_to_move());
    }

    #[test]
    fn test_castling_rights() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(0, 7), Color::White, Piece::Rook)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .castle_kingside(Color::White)
            .build();

        assert!(board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(!board.castling_rights().has(Color::Black, true));
    }
}
