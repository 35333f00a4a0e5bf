//! Square conversions for coordinate text such as `e4`.

use crate::chess_errors::ChessErrors;
use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::{make_square, square_file, square_rank, Square};

/// Parse a coordinate such as `"e4"` into a square index.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    Ok(make_square(rank - b'1', file - b'a'))
}

/// Coordinate text for a square. `square` must be `0..=63`.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    debug_assert!(square < 64);
    let file = char::from(b'a' + square_file(square));
    let rank = char::from(b'1' + square_rank(square));
    format!("{file}{rank}")
}

/// Coordinate text for a one-square bitboard.
pub fn bitboard_to_algebraic(bitboard: Bitboard) -> Result<String, ChessErrors> {
    if !bitboard.has_only_one_bit() {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "expected one square, got {}",
            bitboard.popcount()
        )));
    }
    Ok(square_to_algebraic(bitboard.lsb_square()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
        assert_eq!(square_to_algebraic(0), "a1");
        assert_eq!(square_to_algebraic(63), "h8");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "e", "e9", "i1", "e44", "E4"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidAlgebraic(bad.to_owned()))
            );
        }
    }

    #[test]
    fn bitboard_conversion_needs_a_single_square() {
        assert_eq!(
            bitboard_to_algebraic(Bitboard::from_square(28)).expect("one-hot bitboard should convert"),
            "e4"
        );
        assert!(bitboard_to_algebraic(Bitboard::EMPTY).is_err());
        assert!(bitboard_to_algebraic(Bitboard::RANK_1).is_err());
    }
}
