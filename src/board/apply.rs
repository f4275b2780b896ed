//! Application of validated moves.

use super::{Board, Move, Piece, Square};

impl Board {
    /// Apply a validated move, returning the captured piece if any.
    ///
    /// The descriptor must come from [`Board::attempt_move`] (or
    /// [`Board::legal_moves`]); `apply_move` trusts it completely and has no
    /// failure path. All effects land as one logical unit: capture removal,
    /// mover relocation (or promotion substitution), castling rook
    /// relocation, castling-right forfeiture, en passant bookkeeping,
    /// occupancy recomputation, counter increment, and side flip.
    pub fn apply_move(&mut self, mv: &Move) -> Option<Piece> {
        let color = self.side_to_move();
        let opponent = color.opponent();

        let captured = if mv.is_en_passant {
            // The captured pawn sits directly behind the target square.
            let behind_rank = (mv.to.rank() as isize - color.pawn_direction()) as usize;
            self.remove_piece(Square(behind_rank, mv.to.file()), opponent, Piece::Pawn);
            Some(Piece::Pawn)
        } else if let Some((victim_color, victim)) = self.piece_at(mv.to) {
            self.remove_piece(mv.to, victim_color, victim);
            Some(victim)
        } else {
            None
        };

        self.remove_piece(mv.from, color, mv.piece);
        self.set_piece(mv.to, color, mv.promotion.unwrap_or(mv.piece));

        if mv.is_castling {
            let back = color.back_rank();
            let (rook_from, rook_to) = if mv.to.file() == 6 {
                (Square(back, 7), Square(back, 5))
            } else {
                (Square(back, 0), Square(back, 3))
            };
            self.remove_piece(rook_from, color, Piece::Rook);
            self.set_piece(rook_to, color, Piece::Rook);
        }

        // Rights are forfeited permanently, never restored.
        match mv.piece {
            Piece::King => self.castling_rights.remove_both(color),
            Piece::Rook => {
                let back = color.back_rank();
                if mv.from == Square(back, 0) {
                    self.castling_rights.remove(color, false);
                } else if mv.from == Square(back, 7) {
                    self.castling_rights.remove(color, true);
                }
            }
            _ => {}
        }
        if captured == Some(Piece::Rook) {
            let opp_back = opponent.back_rank();
            if mv.to == Square(opp_back, 0) {
                self.castling_rights.remove(opponent, false);
            } else if mv.to == Square(opp_back, 7) {
                self.castling_rights.remove(opponent, true);
            }
        }

        self.en_passant_target =
            if mv.piece == Piece::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
                Some(Square(
                    (mv.from.rank() + mv.to.rank()) / 2,
                    mv.from.file(),
                ))
            } else {
                None
            };

        self.sync_occupancy();
        self.move_counter += 1;
        self.white_to_move = !self.white_to_move;

        captured
    }
}
