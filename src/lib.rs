//! Bitboard chess position representation with move legality and application.
//!
//! The crate owns the rules of the game and nothing else: adapters (HTTP,
//! terminal, FFI, feature encoders) construct a [`Board`] per game session
//! and drive it through [`Board::submit_move`].

pub mod board;

pub use board::{Board, BoardBuilder, Color, Move, MoveError, Piece, Square, SquareError};
