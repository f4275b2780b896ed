//! Validated move descriptor.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A move that has passed legality validation.
///
/// Only `Board::attempt_move` constructs these; `Board::apply_move` trusts
/// the descriptor and performs no further checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// Origin square
    pub from: Square,
    /// Destination square
    pub to: Square,
    /// The piece being moved
    pub piece: Piece,
    /// Resolved promotion piece, present only for pawns reaching the last rank
    pub promotion: Option<Piece>,
    /// True if this move is a castle (king two files toward a rook)
    pub is_castling: bool,
    /// True if this move captures a pawn en passant
    pub is_en_passant: bool,
}

impl fmt::Display for Move {
    /// Long algebraic form: origin, destination, optional promotion letter
    /// (e.g. `e2e4`, `e7e8q`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
