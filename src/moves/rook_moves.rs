use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::trace_ray_const;
use crate::moves::slider_tables::slider_tables;

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    slider_tables().rook_attacks(square, occupancy)
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 0, 1);
        rays |= trace_ray_const(sq_i, 0, -1);
        rays |= trace_ray_const(sq_i, 1, 0);
        rays |= trace_ray_const(sq_i, -1, 0);

        table[sq] = rays;
        sq += 1;
    }

    table
}
