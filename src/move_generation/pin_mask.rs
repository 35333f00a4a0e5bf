//! Diagonal and orthogonal pin masks for one side's king.
//!
//! Each mask is the union, over every pinning slider, of the squares between
//! the king and the pinner plus the pinner's own square. A piece standing on
//! a mask square may only move within that mask.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::rays::ray;
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinMask {
    pub diagonal: Bitboard,
    pub orthogonal: Bitboard,
}

impl PinMask {
    pub fn new(board: &Board, defender: Color) -> Self {
        let king = board.king_square(defender);
        let own = board.occupancy(defender);
        let enemy = board.occupancy(defender.opposite());
        let occupancy = board.occupancy_all();
        let queens = board.piece_mask(PieceKind::Queen);

        // Only sliders on an empty-board line through the king can pin.
        let diagonal_sliders =
            (board.piece_mask(PieceKind::Bishop) | queens) & enemy & Bitboard(BISHOP_RAYS[king as usize]);
        let orthogonal_sliders =
            (board.piece_mask(PieceKind::Rook) | queens) & enemy & Bitboard(ROOK_RAYS[king as usize]);

        PinMask {
            diagonal: pin_lines(king, own, occupancy, diagonal_sliders, bishop_attacks),
            orthogonal: pin_lines(king, own, occupancy, orthogonal_sliders, rook_attacks),
        }
    }

    #[inline]
    pub fn all(&self) -> Bitboard {
        self.diagonal | self.orthogonal
    }
}

/// Attacks from the king, then again with the first layer of own blockers
/// removed; the difference exposes sliders sitting behind exactly one of them.
fn pin_lines(
    king: Square,
    own: Bitboard,
    occupancy: Bitboard,
    sliders: Bitboard,
    attacks: fn(Square, Bitboard) -> Bitboard,
) -> Bitboard {
    if sliders.is_empty() {
        return Bitboard::EMPTY;
    }

    let first = attacks(king, occupancy);
    let pinners = (first ^ attacks(king, occupancy ^ (first & own))) & sliders;

    let mut mask = Bitboard::EMPTY;
    for pinner in pinners {
        let line = ray(king, pinner);
        if (line & own).has_only_one_bit() {
            mask |= line;
        }
    }
    mask
}
