//! Chess board representation and rules.
//!
//! Uses bitboards for move generation and legality checking. Supports the
//! full movement rules including castling, en passant, and promotions;
//! game-termination detection (mate, draws) is left to callers, who can
//! combine [`Board::legal_moves`] with [`Board::is_in_check`].
//!
//! # Example
//! ```
//! use chess_core::board::Board;
//!
//! let board = Board::new();
//! println!("Starting position has {} legal moves", board.legal_moves().count());
//! ```

mod apply;
mod attack_tables;
mod builder;
mod encode;
mod error;
mod movegen;
mod render;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use encode::{FeatureTensor, PLANE_COUNT};
pub use error::{MoveError, SquareError};
pub use movegen::LegalMoves;
pub use render::render_bitboard;
pub use state::Board;
pub use types::{Bitboard, CastlingRights, Color, Move, Piece, Square};

pub(crate) use types::bit_for_square;
