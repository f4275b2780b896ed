//! Attack generation for move legality.
//!
//! Leaper pieces (knight, king, pawn captures) use precomputed per-square
//! tables. Sliding pieces walk each ray one square at a time, stopping after
//! the first occupied square; the occupant itself is included, so the caller
//! decides whether it is a capture or a blocked square by masking with its
//! own occupancy.

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

/// Rook ray directions as (rank, file) deltas.
const ORTHOGONAL_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop ray directions as (rank, file) deltas.
const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk outward from `square` along each direction, accumulating squares
/// until (and including) the first occupied one.
fn ray_attacks(square: usize, occupancy: u64, directions: &[(isize, isize)]) -> u64 {
    let rank = (square / 8) as isize;
    let file = (square % 8) as isize;
    let mut attacks = 0u64;

    for &(dr, df) in directions {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << (r * 8 + f);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Get bishop attacks (diagonals only)
#[inline]
pub(crate) fn bishop_attacks(square: usize, occupancy: u64) -> u64 {
    ray_attacks(square, occupancy, &DIAGONAL_DIRS)
}

/// Get rook attacks (ranks and files only)
#[inline]
pub(crate) fn rook_attacks(square: usize, occupancy: u64) -> u64 {
    ray_attacks(square, occupancy, &ORTHOGONAL_DIRS)
}

/// Get queen attacks (all 8 directions)
#[inline]
pub(crate) fn queen_attacks(square: usize, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}
