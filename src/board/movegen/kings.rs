use super::super::attack_tables::{
    bishop_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::super::{bit_for_square, Bitboard, Board, Color, Piece, Square};

impl Board {
    /// King destination set: the one-step pattern minus own pieces.
    /// Castling destinations are handled separately.
    pub(crate) fn king_destinations(&self, from: Square, color: Color) -> Bitboard {
        let own = self.occupied[color.index()].0;
        Bitboard(KING_ATTACKS[from.index().as_usize()] & !own)
    }

    /// Castling destination squares currently available to `color`.
    ///
    /// A side contributes its destination (g-file or c-file on the back rank)
    /// only if the right is still held, the rook sits on its home square,
    /// every square strictly between king and rook is empty, and no square
    /// the king transits (start, intermediate, landing) is attacked.
    pub(crate) fn castling_destinations(&self, color: Color) -> Bitboard {
        let back = color.back_rank();
        let king_home = Square(back, 4);
        if !self
            .pieces_of(color, Piece::King)
            .contains(king_home)
        {
            return Bitboard::EMPTY;
        }

        let opponent = color.opponent();
        let mut dests = Bitboard::EMPTY;

        if self.castling_rights.has(color, true)
            && self.is_empty_square(Square(back, 5))
            && self.is_empty_square(Square(back, 6))
            && self.piece_at(Square(back, 7)) == Some((color, Piece::Rook))
            && !self.is_square_attacked(king_home, opponent)
            && !self.is_square_attacked(Square(back, 5), opponent)
            && !self.is_square_attacked(Square(back, 6), opponent)
        {
            dests.0 |= bit_for_square(Square(back, 6)).0;
        }

        if self.castling_rights.has(color, false)
            && self.is_empty_square(Square(back, 1))
            && self.is_empty_square(Square(back, 2))
            && self.is_empty_square(Square(back, 3))
            && self.piece_at(Square(back, 0)) == Some((color, Piece::Rook))
            && !self.is_square_attacked(king_home, opponent)
            && !self.is_square_attacked(Square(back, 3), opponent)
            && !self.is_square_attacked(Square(back, 2), opponent)
        {
            dests.0 |= bit_for_square(Square(back, 2)).0;
        }

        dests
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        let kings = self.pieces_of(color, Piece::King);
        kings.iter().next().map(Square::from_index)
    }

    /// True if any piece of `attacker_color` attacks `square`.
    ///
    /// Works backwards from the target: a pawn/knight/king attacks it when
    /// the reverse pattern from the target hits one, and a slider attacks it
    /// when a ray from the target over the full occupancy reaches one.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        let target_idx = square.index().as_usize();
        let c_idx = attacker_color.index();

        let pawn_sources = PAWN_ATTACKS[attacker_color.opponent().index()][target_idx];
        if self.pieces[c_idx][Piece::Pawn.index()].0 & pawn_sources != 0 {
            return true;
        }

        if self.pieces[c_idx][Piece::Knight.index()].0 & KNIGHT_ATTACKS[target_idx] != 0 {
            return true;
        }

        if self.pieces[c_idx][Piece::King.index()].0 & KING_ATTACKS[target_idx] != 0 {
            return true;
        }

        let queens = self.pieces[c_idx][Piece::Queen.index()].0;
        let rook_like = self.pieces[c_idx][Piece::Rook.index()].0 | queens;
        let bishop_like = self.pieces[c_idx][Piece::Bishop.index()].0 | queens;

        if rook_attacks(target_idx, self.all_occupied.0) & rook_like != 0 {
            return true;
        }
        if bishop_attacks(target_idx, self.all_occupied.0) & bishop_like != 0 {
            return true;
        }

        false
    }

    /// True if `color`'s king is attacked by the opponent.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
