//! King attack bitboard generation utilities.
//!
//! The table is built at compile time by shifting a one-hot board in all
//! eight directions, masking off the files a sideways shift would wrap into.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::Square;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[square as usize])
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let king = 1u64 << sq;
        let sideways = ((king << 1) & !Bitboard::FILE_A.0) | ((king >> 1) & !Bitboard::FILE_H.0);
        let row = king | sideways;
        table[sq] = sideways | (row << 8) | (row >> 8);
        sq += 1;
    }

    table
}
