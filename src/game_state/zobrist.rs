//! Zobrist hashing support for fast position identity and repetition tracking.
//!
//! The seed table is generated at compile time from a fixed splitmix64 seed,
//! so hashes are deterministic across runs and builds. Layout of the 793
//! seeds: 768 piece-square terms (`(piece + 6 * color) * 64 + square`), one
//! side-to-move term, 16 castle-rights terms and 8 en-passant file terms.
//!
//! The board only keeps the piece-placement part incrementally. Side to move,
//! castle rights and en passant change on almost every move, so they are
//! folded in when the hash is read instead of being toggled in and out.

use crate::game_state::chess_types::*;

pub const SEED_COUNT: usize = 793;

const SIDE_TO_MOVE_OFFSET: usize = 768;
const CASTLE_RIGHTS_OFFSET: usize = 769;
const EN_PASSANT_OFFSET: usize = 785;

pub static SEEDS: [u64; SEED_COUNT] = generate_seeds();

const fn generate_seeds() -> [u64; SEED_COUNT] {
    let mut seeds = [0u64; SEED_COUNT];
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut i = 0;
    while i < SEED_COUNT {
        // splitmix64
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        seeds[i] = z ^ (z >> 31);
        i += 1;
    }
    seeds
}

/// Return the Zobrist key for a `(color, piece, square)` occupancy term.
#[inline]
pub fn piece_square_key(color: Color, piece: PieceKind, square: Square) -> u64 {
    SEEDS[(piece.index() + color.index() * 6) * 64 + square as usize]
}

/// Return the side-to-move toggle key (xor in when dark to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    SEEDS[SIDE_TO_MOVE_OFFSET]
}

/// Return the Zobrist key contribution for castling rights mask (`0..=15`).
#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    SEEDS[CASTLE_RIGHTS_OFFSET + (castling_rights & CASTLE_ALL) as usize]
}

/// Return the Zobrist key contribution for an en-passant square's file.
#[inline]
pub fn en_passant_file_key(square: Square) -> u64 {
    SEEDS[EN_PASSANT_OFFSET + square_file(square) as usize]
}

/// Incrementally maintained piece-placement hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ZobristHash(u64);

impl ZobristHash {
    /// Xor a piece term in or out; applying it twice is a no-op.
    #[inline]
    pub fn toggle_piece(&mut self, piece: PieceKind, color: Color, square: Square) {
        self.0 ^= piece_square_key(color, piece, square);
    }

    #[inline]
    pub const fn placement(self) -> u64 {
        self.0
    }

    /// Placement hash with the per-move state terms folded in.
    #[inline]
    pub fn folded(
        self,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
    ) -> u64 {
        let mut key = self.0 ^ castling_key(castling_rights);
        if side_to_move == Color::Dark {
            key ^= side_to_move_key();
        }
        if let Some(square) = en_passant_square {
            key ^= en_passant_file_key(square);
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeds_are_distinct_and_non_zero() {
        let unique: HashSet<u64> = SEEDS.iter().copied().collect();
        assert_eq!(unique.len(), SEED_COUNT);
        assert!(!unique.contains(&0));
    }

    #[test]
    fn toggling_twice_restores_the_hash() {
        let mut hash = ZobristHash::default();
        hash.toggle_piece(PieceKind::Queen, Color::Dark, 59);
        assert_ne!(hash.placement(), 0);
        hash.toggle_piece(PieceKind::Queen, Color::Dark, 59);
        assert_eq!(hash.placement(), 0);
    }

    #[test]
    fn folding_distinguishes_state_terms() {
        let hash = ZobristHash::default();
        let base = hash.folded(Color::Light, CASTLE_ALL, None);
        assert_ne!(base, hash.folded(Color::Dark, CASTLE_ALL, None));
        assert_ne!(base, hash.folded(Color::Light, 0, None));
        assert_ne!(base, hash.folded(Color::Light, CASTLE_ALL, Some(20)));
        assert_eq!(
            hash.folded(Color::Light, CASTLE_ALL, Some(20)),
            hash.folded(Color::Light, CASTLE_ALL, Some(44))
        );
    }
}
