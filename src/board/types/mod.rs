//! Core chess types.
//!
//! The fundamental types used throughout the crate:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - board square with algebraic-notation parsing
//! - `Bitboard` - 64-bit board representation
//! - `Move` - validated move descriptor
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use bitboard::Bitboard;
pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use bitboard::{bit_for_square, pop_lsb};
