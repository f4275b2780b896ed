use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, Color, Piece, Square};

impl Board {
    /// Sliding-piece destination set: ray attacks over the current occupancy
    /// minus own pieces. The first blocker on each ray is included, so an
    /// opponent blocker remains as a capture.
    pub(crate) fn slider_destinations(&self, from: Square, piece: Piece, color: Color) -> Bitboard {
        let from_idx = from.index().as_usize();
        let occ = self.all_occupied.0;
        let raw = match piece {
            Piece::Bishop => bishop_attacks(from_idx, occ),
            Piece::Rook => rook_attacks(from_idx, occ),
            _ => queen_attacks(from_idx, occ),
        };
        Bitboard(raw & !self.occupied[color.index()].0)
    }
}
