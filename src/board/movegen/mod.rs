//! Move legality: per-piece destination sets, the validation pipeline, and
//! the lazy legal-move iterator.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::pop_lsb;
use super::{Bitboard, Board, Color, Move, MoveError, Piece, Square};

const NO_PROMOTION: [Option<Piece>; 1] = [None];
const PROMOTION_CHOICES: [Option<Piece>; 4] = [
    Some(Piece::Queen),
    Some(Piece::Rook),
    Some(Piece::Bishop),
    Some(Piece::Knight),
];

impl Board {
    /// Validate a proposed move without applying it.
    ///
    /// Returns the validated descriptor on success. Every rule is checked
    /// here, including post-move king safety: the candidate is simulated on
    /// a scratch copy and rejected if the mover's own king ends up attacked.
    /// Pins and discovered checks therefore need no special casing.
    pub fn attempt_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        let color = self.side_to_move();
        let piece = match self.piece_at(from) {
            Some((c, p)) if c == color => p,
            _ => return Err(MoveError::NoPieceAtStart),
        };

        // A pawn or king can never be promoted to.
        if promotion.is_some_and(|p| !p.is_promotable_to()) {
            return Err(MoveError::UnexpectedPromotion);
        }

        let back = color.back_rank();
        let is_castling = piece == Piece::King
            && from == Square(back, 4)
            && (to == Square(back, 6) || to == Square(back, 2));

        if is_castling {
            if !self.castling_destinations(color).contains(to) {
                return Err(MoveError::InvalidCastlingPath);
            }
        } else if !self.destinations(from, piece, color).contains(to) {
            return Err(MoveError::NotAReachableSquare);
        }

        let is_promotion = piece == Piece::Pawn && to.rank() == color.pawn_promotion_rank();
        if is_promotion && promotion.is_none() {
            return Err(MoveError::MissingPromotion);
        }
        if !is_promotion && promotion.is_some() {
            return Err(MoveError::UnexpectedPromotion);
        }

        let is_en_passant =
            piece == Piece::Pawn && Some(to) == self.en_passant_target && to.file() != from.file();

        let mv = Move {
            from,
            to,
            piece,
            promotion,
            is_castling,
            is_en_passant,
        };

        let mut scratch = self.clone();
        scratch.apply_move(&mv);
        if scratch.is_in_check(color) {
            return Err(MoveError::WouldLeaveKingInCheck);
        }

        Ok(mv)
    }

    /// Pseudo-legal destination set for a piece of `color` on `from`,
    /// already intersected with "not occupied by own side". Castling is
    /// excluded; it has its own path rules.
    pub(crate) fn destinations(&self, from: Square, piece: Piece, color: Color) -> Bitboard {
        match piece {
            Piece::Pawn => self.pawn_destinations(from, color),
            Piece::Knight => self.knight_destinations(from, color),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.slider_destinations(from, piece, color)
            }
            Piece::King => self.king_destinations(from, color),
        }
    }

    /// Lazy iterator over every legal move for the side to move.
    ///
    /// Finite and restartable: each call returns a fresh iterator over the
    /// same set as long as the board is not mutated in between. Candidates
    /// are validated through [`Board::attempt_move`], so the yielded
    /// descriptors can be fed straight to [`Board::apply_move`].
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        let color = self.side_to_move();
        LegalMoves {
            board: self,
            color,
            origins: self.occupied[color.index()],
            current: None,
            targets: Bitboard::EMPTY,
            pending: None,
            promotions: [].iter(),
        }
    }

    /// Count leaf nodes of the legal move tree at `depth`.
    ///
    /// The standard move-generator correctness check; expected node counts
    /// for known positions are tabulated in the test suite.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for mv in self.legal_moves() {
            if depth == 1 {
                nodes += 1;
            } else {
                let mut child = self.clone();
                child.apply_move(&mv);
                nodes += child.perft(depth - 1);
            }
        }
        nodes
    }
}

/// Iterator over the legal moves of one position. See [`Board::legal_moves`].
pub struct LegalMoves<'a> {
    board: &'a Board,
    color: Color,
    /// Origin squares not yet expanded
    origins: Bitboard,
    /// Origin currently being expanded
    current: Option<(Square, Piece)>,
    /// Remaining destinations of the current origin
    targets: Bitboard,
    /// Candidate pair whose promotion choices are being tried
    pending: Option<(Square, Square)>,
    promotions: std::slice::Iter<'static, Option<Piece>>,
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            // Try the remaining promotion choices of the current candidate.
            if let Some((from, to)) = self.pending {
                for &promo in self.promotions.by_ref() {
                    if let Ok(mv) = self.board.attempt_move(from, to, promo) {
                        return Some(mv);
                    }
                }
                self.pending = None;
            }

            // Advance to the next destination of the current origin.
            if let Some((from, piece)) = self.current {
                if !self.targets.is_empty() {
                    let to = Square::from_index(pop_lsb(&mut self.targets));
                    self.promotions =
                        if piece == Piece::Pawn && to.rank() == self.color.pawn_promotion_rank() {
                            PROMOTION_CHOICES.iter()
                        } else {
                            NO_PROMOTION.iter()
                        };
                    self.pending = Some((from, to));
                    continue;
                }
                self.current = None;
            }

            // Advance to the next origin square.
            if self.origins.is_empty() {
                return None;
            }
            let from = Square::from_index(pop_lsb(&mut self.origins));
            let (_, piece) = self.board.piece_at(from)?;
            self.targets = self.candidate_targets(from, piece);
            self.current = Some((from, piece));
        }
    }
}

impl LegalMoves<'_> {
    fn candidate_targets(&self, from: Square, piece: Piece) -> Bitboard {
        let mut targets = self.board.destinations(from, piece, self.color);
        if piece == Piece::King && from == Square(self.color.back_rank(), 4) {
            targets = targets.or(self.board.castling_destinations(self.color));
        }
        targets
    }
}
