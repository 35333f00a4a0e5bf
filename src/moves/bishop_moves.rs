//! Bishop attack lookups.
//!
//! Thin wrappers over the shared slider tables plus the empty-board ray table
//! that pin detection uses to skip sliders which cannot reach the king.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::Square;
use crate::moves::slider_tables::slider_tables;

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

/// Squares a bishop on `square` attacks given `occupancy`; the first blocker
/// on each diagonal is included.
#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    slider_tables().bishop_attacks(square, occupancy)
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 1, 1);
        rays |= trace_ray_const(sq_i, -1, 1);
        rays |= trace_ray_const(sq_i, 1, -1);
        rays |= trace_ray_const(sq_i, -1, -1);

        table[sq] = rays;
        sq += 1;
    }

    table
}

pub(crate) const fn trace_ray_const(square: i32, file_step: i32, rank_step: i32) -> u64 {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
        let target = (rank * 8 + file) as usize;
        attacks |= 1u64 << target;
        file += file_step;
        rank += rank_step;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::{bishop_attacks, BISHOP_RAYS};
    use crate::game_state::bitboard::Bitboard;

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        let d4 = 27u8;
        assert_eq!(BISHOP_RAYS[d4 as usize].count_ones(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let c1 = 2u8;
        let blocker_on_e3 = Bitboard::from_square(20);
        let attacks = bishop_attacks(c1, blocker_on_e3);

        assert!(attacks.contains(20));
        assert!(!attacks.contains(29));
    }

    #[test]
    fn empty_board_attacks_equal_rays() {
        for square in 0..64u8 {
            assert_eq!(bishop_attacks(square, Bitboard::EMPTY).0, BISHOP_RAYS[square as usize]);
        }
    }
}
