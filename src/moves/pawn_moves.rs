//! Pawn capture tables, one 64-entry table per colour.
//!
//! Pushes are not tabled; the generators shift whole pawn sets instead.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::{Color, Square};

pub const PAWN_ATTACKS: [[u64; 64]; 2] = [generate_light_pawn_attacks(), generate_dark_pawn_attacks()];

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS[color.index()][square as usize])
}

const fn generate_light_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let pawn = 1u64 << sq;
        table[sq] = ((pawn << 7) & !Bitboard::FILE_H.0) | ((pawn << 9) & !Bitboard::FILE_A.0);
        sq += 1;
    }

    table
}

const fn generate_dark_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let pawn = 1u64 << sq;
        table[sq] = ((pawn >> 9) & !Bitboard::FILE_H.0) | ((pawn >> 7) & !Bitboard::FILE_A.0);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, PAWN_ATTACKS};
    use crate::game_state::chess_types::Color;

    #[test]
    fn light_pawn_attacks_from_e2() {
        let e2 = 12u8;
        let expected = (1u64 << 19) | (1u64 << 21);
        assert_eq!(PAWN_ATTACKS[0][e2 as usize], expected);
        assert_eq!(pawn_attacks(Color::Light, e2).0, expected);
    }

    #[test]
    fn dark_pawn_attacks_from_e7() {
        let e7 = 52u8;
        let expected = (1u64 << 43) | (1u64 << 45);
        assert_eq!(pawn_attacks(Color::Dark, e7).0, expected);
    }

    #[test]
    fn edge_pawns_attack_one_square() {
        assert_eq!(pawn_attacks(Color::Light, 8).0, 1u64 << 17);
        assert_eq!(pawn_attacks(Color::Light, 15).0, 1u64 << 22);
        assert_eq!(pawn_attacks(Color::Dark, 48).0, 1u64 << 41);
        assert_eq!(pawn_attacks(Color::Dark, 55).0, 1u64 << 46);
    }
}
