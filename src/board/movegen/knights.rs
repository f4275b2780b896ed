use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Color, Square};

impl Board {
    /// Knight destination set: the fixed jump pattern minus own pieces.
    pub(crate) fn knight_destinations(&self, from: Square, color: Color) -> Bitboard {
        let own = self.occupied[color.index()].0;
        Bitboard(KNIGHT_ATTACKS[from.index().as_usize()] & !own)
    }
}
