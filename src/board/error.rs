//! Error types for chess board operations.

use std::fmt;

/// Reasons a proposed move can be rejected.
///
/// All variants are local and recoverable; a rejected move leaves the board
/// completely unchanged. Adapters translate these into their own responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The start square holds no piece belonging to the side to move
    NoPieceAtStart,
    /// The destination is not in the piece's reachable set for this position
    NotAReachableSquare,
    /// The move would leave (or keep) the mover's own king attacked
    WouldLeaveKingInCheck,
    /// A pawn reached the last rank but no promotion piece was supplied
    MissingPromotion,
    /// A promotion piece was supplied for a move that is not a promotion,
    /// or the supplied piece is not a legal promotion target
    UnexpectedPromotion,
    /// The castling path is blocked, attacked, or the right was forfeited
    InvalidCastlingPath,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtStart => {
                write!(f, "No piece of the side to move on the start square")
            }
            MoveError::NotAReachableSquare => {
                write!(f, "The piece cannot reach the destination square")
            }
            MoveError::WouldLeaveKingInCheck => {
                write!(f, "The move would leave the king in check")
            }
            MoveError::MissingPromotion => {
                write!(f, "A promotion piece is required for this move")
            }
            MoveError::UnexpectedPromotion => {
                write!(f, "Invalid promotion piece for this move")
            }
            MoveError::InvalidCastlingPath => {
                write!(f, "Castling is not available on that side")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
