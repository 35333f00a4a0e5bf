use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::Square;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[square as usize])
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let knight = 1u64 << sq;
        let one_file = ((knight >> 1) & !Bitboard::FILE_H.0) | ((knight << 1) & !Bitboard::FILE_A.0);
        let two_files = ((knight >> 2) & !Bitboard::FILE_GH.0) | ((knight << 2) & !Bitboard::FILE_AB.0);
        table[sq] = (one_file << 16) | (one_file >> 16) | (two_files << 8) | (two_files >> 8);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{knight_attacks, KNIGHT_ATTACKS};

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(KNIGHT_ATTACKS[d4 as usize].count_ones(), 8);
        assert_eq!(knight_attacks(d4).popcount(), 8);
    }

    #[test]
    fn knight_attacks_from_corners_do_not_wrap() {
        let a1 = 0u8;
        assert_eq!(knight_attacks(a1).0, (1u64 << 10) | (1u64 << 17));
        let h8 = 63u8;
        assert_eq!(knight_attacks(h8).0, (1u64 << 53) | (1u64 << 46));
        let g2 = 14u8;
        assert_eq!(knight_attacks(g2).popcount(), 4);
    }
}
