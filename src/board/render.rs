//! Text rendering for terminal display and debugging.

use super::{Bitboard, Board, Square};

impl Board {
    /// Render the position as an 8-line text diagram plus a file legend.
    ///
    /// Rank 8 is printed first so White reads bottom-up, as on a physical
    /// board. White pieces are uppercase, black lowercase, empty squares `.`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(8 * 19 + 18);
        for rank in (0..8).rev() {
            out.push(char::from(b'1' + rank as u8));
            out.push(' ');
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => out.push(piece.to_symbol(color)),
                    None => out.push('.'),
                }
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}

/// Render a bitboard in the same orientation as [`Board::render`], marking
/// set squares with `x`. Debugging aid.
#[must_use]
pub fn render_bitboard(bb: Bitboard) -> String {
    let mut out = String::with_capacity(8 * 19 + 18);
    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');
        for file in 0..8 {
            out.push(if bb.contains(Square(rank, file)) {
                'x'
            } else {
                '.'
            });
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}
