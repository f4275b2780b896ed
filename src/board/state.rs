//! The board state: bitboards, side to move, castling rights, en passant.

use super::{bit_for_square, Bitboard, CastlingRights, Color, MoveError, Piece, Square};

/// A chess position.
///
/// One `Board` is owned per game session and mutated only through
/// [`Board::submit_move`] (or [`Board::apply_move`] with a descriptor from
/// [`Board::attempt_move`]). It holds no global state and is cheap to clone,
/// which the legality engine relies on for move simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Piece bitboards indexed by `[color][piece]`
    pub(crate) pieces: [[Bitboard; 6]; 2],
    /// Union of each color's piece bitboards
    pub(crate) occupied: [Bitboard; 2],
    /// Union of both colors' occupancy
    pub(crate) all_occupied: Bitboard,
    pub(crate) white_to_move: bool,
    pub(crate) castling_rights: CastlingRights,
    /// The square skipped by the immediately preceding double pawn push
    pub(crate) en_passant_target: Option<Square>,
    /// Plies applied since the game started
    pub(crate) move_counter: u32,
}

impl Board {
    /// Create a board in the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
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
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board.sync_occupancy();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            white_to_move: true,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            move_counter: 0,
        }
    }

    /// Validate and apply a move in one step.
    ///
    /// On success the board is mutated in place (side to move flips) and the
    /// captured piece, if any, is returned. On failure the board is left
    /// bit-identical and the rejection reason is returned.
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Option<Piece>, MoveError> {
        match self.attempt_move(from, to, promotion) {
            Ok(mv) => Ok(self.apply_move(&mv)),
            Err(err) => {
                #[cfg(feature = "logging")]
                log::debug!("rejected move {from}{to}: {err}");
                Err(err)
            }
        }
    }

    /// The color whose turn it is
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// True if it is White's turn
    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// Current castling rights
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The en passant target square, if the last move was a double pawn push
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Number of plies applied since the game started
    #[inline]
    #[must_use]
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    /// Bitboard of a color's pieces of one type
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// Bitboard of all of a color's pieces
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// Bitboard of all pieces on the board
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()].0 |= bit_for_square(sq).0;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()].0 &= !bit_for_square(sq).0;
    }

    /// Recompute the occupancy aggregates from the piece bitboards.
    ///
    /// Must be called after any batch of `set_piece`/`remove_piece` edits;
    /// every query assumes the aggregates are in sync.
    pub(crate) fn sync_occupancy(&mut self) {
        for color in Color::BOTH {
            let c_idx = color.index();
            let mut occ = Bitboard::EMPTY;
            for bb in &self.pieces[c_idx] {
                occ.0 |= bb.0;
            }
            self.occupied[c_idx] = occ;
        }
        self.all_occupied = self.occupied[0].or(self.occupied[1]);
    }

    /// The piece and color on a square, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = bit_for_square(sq).0;
        if self.all_occupied.0 & bit == 0 {
            return None;
        }

        let color = if self.occupied[0].0 & bit != 0 {
            Color::White
        } else {
            Color::Black
        };
        for piece in Piece::ALL {
            if self.pieces[color.index()][piece.index()].0 & bit != 0 {
                return Some((color, piece));
            }
        }

        None
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub(crate) fn is_empty_square(&self, sq: Square) -> bool {
        self.all_occupied.0 & bit_for_square(sq).0 == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
