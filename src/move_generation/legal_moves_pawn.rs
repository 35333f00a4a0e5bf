//! Pawn pushes, captures, promotions and en passant.
//!
//! A diagonally pinned pawn can never push and an orthogonally pinned pawn can
//! never capture; otherwise the destination just has to stay inside the pin
//! line. Pushes onto the promotion rank count as noisy moves.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::*;
use crate::move_generation::attack_map::is_in_check;
use crate::move_generation::legal_move_generator::{GenerationMode, MoveGenerator, Targets};
use crate::move_generation::move_list::MoveList;
use crate::moves::move_descriptions::{Move, MoveFlag, PROMOTION_PIECES};
use crate::moves::pawn_moves::pawn_attacks;

pub(crate) fn generate_pawn_moves(
    generator: &MoveGenerator,
    mode: GenerationMode,
    targets: Targets,
    list: &mut MoveList,
) {
    let board = generator.board;
    let us = generator.us;
    let pins = generator.pins;
    let empty = !board.occupancy_all();
    let promotion_rank = generator.promotion_rank();
    let (start_rank, step): (Bitboard, i8) = match us {
        Color::Light => (Bitboard::RANK_2, 8),
        Color::Dark => (Bitboard::RANK_7, -8),
    };

    for from in board.piece_mask_for(PieceKind::Pawn, us) {
        let diagonal_pin = pins.diagonal.contains(from);
        let orthogonal_pin = pins.orthogonal.contains(from);

        if !diagonal_pin {
            let line = if orthogonal_pin { pins.orthogonal } else { Bitboard::FULL };
            let single = (from as i8 + step) as Square;

            if empty.contains(single) {
                if targets.quiet.contains(single) && line.contains(single) {
                    if promotion_rank.contains(single) {
                        if mode.includes_noisy() {
                            push_promotions(list, from, single, false);
                        }
                    } else if mode.includes_quiet() {
                        list.push(Move::new(from, single, MoveFlag::Quiet));
                    }
                }

                if mode.includes_quiet() && start_rank.contains(from) {
                    let double = (single as i8 + step) as Square;
                    if empty.contains(double) && targets.quiet.contains(double) && line.contains(double) {
                        list.push(Move::new(from, double, MoveFlag::DoublePush));
                    }
                }
            }
        }

        if !orthogonal_pin && mode.includes_noisy() {
            let mut captures = pawn_attacks(us, from) & targets.capture;
            if diagonal_pin {
                captures &= pins.diagonal;
            }
            for to in captures {
                if promotion_rank.contains(to) {
                    push_promotions(list, from, to, true);
                } else {
                    list.push(Move::new(from, to, MoveFlag::Capture));
                }
            }
        }
    }
}

fn push_promotions(list: &mut MoveList, from: Square, to: Square, capture: bool) {
    for piece in PROMOTION_PIECES {
        list.push(Move::new(from, to, MoveFlag::promotion(piece, capture)));
    }
}

/// En passant is validated by playing it on a copy: removing two pawns from
/// one rank can uncover a slider that no pin mask accounts for.
pub(crate) fn generate_en_passant_moves(generator: &MoveGenerator, list: &mut MoveList) {
    let board = generator.board;
    let Some(target) = board.en_passant_square() else {
        return;
    };
    let us = generator.us;

    let candidates = pawn_attacks(us.opposite(), target) & board.piece_mask_for(PieceKind::Pawn, us);
    for from in candidates {
        let mv = Move::new(from, target, MoveFlag::EnPassant);
        let mut probe = board.clone();
        probe.make_move(mv, generator.rules);
        if !is_in_check(&probe, us) {
            list.push(mv);
        }
    }
}
