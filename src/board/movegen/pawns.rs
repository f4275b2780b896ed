use super::super::{bit_for_square, Bitboard, Board, Color, Square};

impl Board {
    /// All squares a pawn on `from` may move to in this position.
    ///
    /// Forward pushes require empty squares (the double push additionally
    /// requires the intermediate square empty and the pawn on its starting
    /// rank); diagonal captures require an opponent piece or the en passant
    /// target. Own pieces can never appear in the result.
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color) -> Bitboard {
        let pawn = bit_for_square(from).0;
        let empty = !self.all_occupied.0;
        let mut capturable = self.occupied[color.opponent().index()].0;
        if let Some(ep) = self.en_passant_target {
            capturable |= bit_for_square(ep).0;
        }

        let moves = match color {
            Color::White => {
                let push = (pawn << 8) & empty;
                let double = ((push & Bitboard::RANK_3.0) << 8) & empty;
                let captures = (((pawn << 7) & !Bitboard::FILE_H.0)
                    | ((pawn << 9) & !Bitboard::FILE_A.0))
                    & capturable;
                push | double | captures
            }
            Color::Black => {
                let push = (pawn >> 8) & empty;
                let double = ((push & Bitboard::RANK_6.0) >> 8) & empty;
                let captures = (((pawn >> 9) & !Bitboard::FILE_H.0)
                    | ((pawn >> 7) & !Bitboard::FILE_A.0))
                    & capturable;
                push | double | captures
            }
        };
        Bitboard(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{Board, BoardBuilder, Color, Piece, Square};

    #[test]
    fn test_initial_pawn_has_single_and_double_push() {
        let board = Board::new();
        let dests = board.pawn_destinations(Square(1, 4), Color::White);
        assert!(dests.contains(Square(2, 4))); // e3
        assert!(dests.contains(Square(3, 4))); // e4
        assert_eq!(dests.popcount(), 2);
    }

    #[test]
    fn test_double_push_blocked_by_intermediate_piece() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .piece(Square(1, 4), Color::White, Piece::Pawn)
            .piece(Square(2, 4), Color::Black, Piece::Knight)
            .build();
        let dests = board.pawn_destinations(Square(1, 4), Color::White);
        assert!(dests.is_empty());
    }

    #[test]
    fn test_captures_do_not_wrap_files() {
        // A white pawn on h4 must not "capture" onto a5.
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .piece(Square(3, 7), Color::White, Piece::Pawn)
            .piece(Square(4, 0), Color::Black, Piece::Pawn)
            .build();
        let dests = board.pawn_destinations(Square(3, 7), Color::White);
        assert!(!dests.contains(Square(4, 0)));
        assert_eq!(dests.popcount(), 1); // h5 push only
    }

    #[test]
    fn test_en_passant_target_is_capturable() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .piece(Square(4, 4), Color::White, Piece::Pawn)
            .piece(Square(4, 3), Color::Black, Piece::Pawn)
            .en_passant(Square(5, 3))
            .build();
        let dests = board.pawn_destinations(Square(4, 4), Color::White);
        assert!(dests.contains(Square(5, 3))); // d6 en passant
        assert!(dests.contains(Square(5, 4))); // e6 push
    }
}
