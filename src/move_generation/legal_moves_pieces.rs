//! Knight, bishop, rook and queen moves.
//!
//! Pinned knights never move. A pinned slider keeps only the attacks that
//! stay on its pin line, and only when the line matches its movement: a
//! diagonally pinned rook is frozen, a diagonally pinned queen moves as a
//! bishop along the pin.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{MoveGenerator, Targets};
use crate::move_generation::move_list::MoveList;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::{Move, MoveFlag};
use crate::moves::rook_moves::rook_attacks;

pub(crate) fn generate_piece_moves(generator: &MoveGenerator, targets: Targets, list: &mut MoveList) {
    let board = generator.board;
    let us = generator.us;
    let pins = generator.pins;
    let occupancy = board.occupancy_all();
    let queens = board.piece_mask_for(PieceKind::Queen, us);

    for from in board.piece_mask_for(PieceKind::Knight, us) & !pins.all() {
        push_targets(list, from, knight_attacks(from), targets);
    }

    // Diagonal movers: bishops and queens, excluding anything pinned on a rank or file.
    for from in (board.piece_mask_for(PieceKind::Bishop, us) | queens) & !pins.orthogonal {
        let mut attacks = bishop_attacks(from, occupancy);
        if pins.diagonal.contains(from) {
            attacks &= pins.diagonal;
        }
        push_targets(list, from, attacks, targets);
    }

    // Orthogonal movers: rooks and queens, excluding anything pinned on a diagonal.
    for from in (board.piece_mask_for(PieceKind::Rook, us) | queens) & !pins.diagonal {
        let mut attacks = rook_attacks(from, occupancy);
        if pins.orthogonal.contains(from) {
            attacks &= pins.orthogonal;
        }
        push_targets(list, from, attacks, targets);
    }
}

#[inline]
fn push_targets(list: &mut MoveList, from: Square, attacks: Bitboard, targets: Targets) {
    for to in attacks & targets.quiet {
        list.push(Move::new(from, to, MoveFlag::Quiet));
    }
    for to in attacks & targets.capture {
        list.push(Move::new(from, to, MoveFlag::Capture));
    }
}
