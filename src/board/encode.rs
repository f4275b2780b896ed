//! Feature-plane encoding for neural network input.

use super::{Board, Color, Piece, Square};

/// Number of feature planes per square.
pub const PLANE_COUNT: usize = 19;

/// An 8x8 board of [`PLANE_COUNT`]-deep feature vectors, indexed
/// `[rank][file][plane]`.
pub type FeatureTensor = [[[f32; PLANE_COUNT]; 8]; 8];

/// Plane indices. Piece planes 0..12 are relative to the side to move, so
/// the same network sees the same encoding regardless of color.
const PLANE_OWN_PIECES: usize = 0;
const PLANE_OPPONENT_PIECES: usize = 6;
const PLANE_SIDE_TO_MOVE: usize = 12;
const PLANE_CASTLING: usize = 13;
const PLANE_EN_PASSANT: usize = 17;
const PLANE_MOVE_COUNTER: usize = 18;

impl Board {
    /// Encode the position as a fixed-shape feature tensor.
    ///
    /// - Planes 0-5: side-to-move pieces, one plane per type in
    ///   pawn/knight/bishop/rook/queen/king order.
    /// - Planes 6-11: opponent pieces, same order.
    /// - Plane 12: 1.0 everywhere if White is to move, else 0.0.
    /// - Planes 13-16: castling rights (white kingside, white queenside,
    ///   black kingside, black queenside), each filled with 1.0 only while
    ///   the right is held.
    /// - Plane 17: 1.0 on the en passant target square, if one exists.
    /// - Plane 18: plies played divided by 100, everywhere.
    #[must_use]
    pub fn to_tensor(&self) -> FeatureTensor {
        let mut tensor = [[[0.0; PLANE_COUNT]; 8]; 8];

        let mover = self.side_to_move();
        let opponent = mover.opponent();
        for piece in Piece::ALL {
            for idx in self.pieces_of(mover, piece).iter() {
                let sq = Square::from_index(idx);
                tensor[sq.rank()][sq.file()][PLANE_OWN_PIECES + piece.index()] = 1.0;
            }
            for idx in self.pieces_of(opponent, piece).iter() {
                let sq = Square::from_index(idx);
                tensor[sq.rank()][sq.file()][PLANE_OPPONENT_PIECES + piece.index()] = 1.0;
            }
        }

        let side_value = if self.white_to_move() { 1.0 } else { 0.0 };
        let rights = self.castling_rights();
        let right_values = [
            rights.has(Color::White, true),
            rights.has(Color::White, false),
            rights.has(Color::Black, true),
            rights.has(Color::Black, false),
        ];
        let counter_value = self.move_counter() as f32 / 100.0;

        for row in &mut tensor {
            for features in row.iter_mut() {
                features[PLANE_SIDE_TO_MOVE] = side_value;
                for (offset, held) in right_values.iter().enumerate() {
                    if *held {
                        features[PLANE_CASTLING + offset] = 1.0;
                    }
                }
                features[PLANE_MOVE_COUNTER] = counter_value;
            }
        }

        if let Some(ep) = self.en_passant_target() {
            tensor[ep.rank()][ep.file()][PLANE_EN_PASSANT] = 1.0;
        }

        tensor
    }
}
