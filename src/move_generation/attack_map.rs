//! Attack map, checkers and square-attack queries.
//!
//! The full attack map is computed with the defending king lifted off the
//! board, so a king cannot "hide" from a slider by stepping further along the
//! checking line. Checker and single-square queries use real occupancy.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Every square attacked by the side opposing `defender`.
pub fn generate_attack_map(board: &Board, defender: Color) -> Bitboard {
    let attacker = defender.opposite();
    let occupancy = board.occupancy_all() ^ board.piece_mask_for(PieceKind::King, defender);
    let mut attacks = Bitboard::EMPTY;

    let pawns = board.piece_mask_for(PieceKind::Pawn, attacker);
    attacks |= match attacker {
        Color::Light => Bitboard(
            ((pawns.0 << 7) & !Bitboard::FILE_H.0) | ((pawns.0 << 9) & !Bitboard::FILE_A.0),
        ),
        Color::Dark => Bitboard(
            ((pawns.0 >> 9) & !Bitboard::FILE_H.0) | ((pawns.0 >> 7) & !Bitboard::FILE_A.0),
        ),
    };

    for square in board.piece_mask_for(PieceKind::Knight, attacker) {
        attacks |= knight_attacks(square);
    }

    for square in board.piece_mask_for(PieceKind::Bishop, attacker) {
        attacks |= bishop_attacks(square, occupancy);
    }
    for square in board.piece_mask_for(PieceKind::Rook, attacker) {
        attacks |= rook_attacks(square, occupancy);
    }
    for square in board.piece_mask_for(PieceKind::Queen, attacker) {
        attacks |= queen_attacks(square, occupancy);
    }

    attacks | king_attacks(board.king_square(attacker))
}

/// Pieces of the side opposing `defender` that attack `square`, given
/// `occupancy` as the blocker set.
pub fn all_attackers_to_square(
    board: &Board,
    square: Square,
    defender: Color,
    occupancy: Bitboard,
) -> Bitboard {
    let attacker = defender.opposite();
    let queens = board.piece_mask(PieceKind::Queen);

    let attackers = (pawn_attacks(defender, square) & board.piece_mask(PieceKind::Pawn))
        | (knight_attacks(square) & board.piece_mask(PieceKind::Knight))
        | (king_attacks(square) & board.piece_mask(PieceKind::King))
        | (bishop_attacks(square, occupancy) & (board.piece_mask(PieceKind::Bishop) | queens))
        | (rook_attacks(square, occupancy) & (board.piece_mask(PieceKind::Rook) | queens));

    attackers & board.occupancy(attacker)
}

/// Pieces giving check to `defender`'s king.
#[inline]
pub fn generate_checkers_mask(board: &Board, defender: Color) -> Bitboard {
    all_attackers_to_square(board, board.king_square(defender), defender, board.occupancy_all())
}

#[inline]
pub fn is_square_attacked_with_occupancy(
    board: &Board,
    square: Square,
    defender: Color,
    occupancy: Bitboard,
) -> bool {
    all_attackers_to_square(board, square, defender, occupancy).is_not_empty()
}

/// Whether the side opposing `defender` attacks `square`.
#[inline]
pub fn is_square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    is_square_attacked_with_occupancy(board, square, defender, board.occupancy_all())
}

#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square(color), color)
}
