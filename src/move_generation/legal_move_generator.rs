//! Legal move generation.
//!
//! `MoveGenerator` snapshots everything that stays fixed while enumerating one
//! position's moves (king square, pins, enemy attack map, checkers and the
//! king's safe steps) and then branches on the number of checkers:
//!
//! - none: every piece moves, castling included;
//! - one: king steps, captures of the checker and interpositions only;
//! - two or more: king steps only.
//!
//! Legality is decided by masks everywhere except en passant, which is
//! checked by playing it on a copy of the board.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::board::Board;
use crate::game_state::castle_rules::CastleRules;
use crate::game_state::chess_types::*;
use crate::move_generation::attack_map::{generate_attack_map, generate_checkers_mask};
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_pawn::{generate_en_passant_moves, generate_pawn_moves};
use crate::move_generation::legal_moves_pieces::generate_piece_moves;
use crate::move_generation::move_list::MoveList;
use crate::move_generation::pin_mask::PinMask;
use crate::moves::king_moves::king_attacks;
use crate::moves::rays::ray_exclude_destination;

/// Which move classes to emit.
///
/// Noisy moves are captures (en passant included) and every promotion; all
/// other moves, castling included, are quiet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationMode {
    #[default]
    All,
    Noisy,
    Quiet,
}

impl GenerationMode {
    #[inline]
    pub const fn includes_quiet(self) -> bool {
        matches!(self, GenerationMode::All | GenerationMode::Quiet)
    }

    #[inline]
    pub const fn includes_noisy(self) -> bool {
        matches!(self, GenerationMode::All | GenerationMode::Noisy)
    }
}

/// Destination squares a non-king piece may use in the current check state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Targets {
    /// Empty squares a move may land on.
    pub quiet: Bitboard,
    /// Enemy pieces a move may capture.
    pub capture: Bitboard,
}

pub struct MoveGenerator<'a> {
    pub(crate) board: &'a Board,
    pub(crate) rules: &'a CastleRules,
    pub(crate) us: Color,
    pub(crate) king: Square,
    pub(crate) pins: PinMask,
    pub(crate) attack_map: Bitboard,
    pub(crate) checkers: Bitboard,
    pub(crate) king_moves: Bitboard,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(board: &'a Board, rules: &'a CastleRules) -> Self {
        let us = board.side_to_move();
        let king = board.king_square(us);
        let attack_map = generate_attack_map(board, us);

        let checkers = if attack_map.contains(king) {
            generate_checkers_mask(board, us)
        } else {
            Bitboard::EMPTY
        };

        MoveGenerator {
            board,
            rules,
            us,
            king,
            pins: PinMask::new(board, us),
            attack_map,
            checkers,
            king_moves: king_attacks(king) & !attack_map & !board.occupancy(us),
        }
    }

    #[inline]
    pub fn checkers(&self) -> Bitboard {
        self.checkers
    }

    #[inline]
    pub fn pin_mask(&self) -> PinMask {
        self.pins
    }

    #[inline]
    pub fn attack_map(&self) -> Bitboard {
        self.attack_map
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.checkers.is_not_empty()
    }

    /// Fill `list` with the legal moves of `mode` and return how many were
    /// written. Any previous contents of `list` are discarded.
    pub fn generate_moves(&self, mode: GenerationMode, list: &mut MoveList) -> usize {
        list.clear();

        let empty = !self.board.occupancy_all();
        let enemy = self.board.occupancy(self.us.opposite());

        let king_targets = self.filter(
            mode,
            Targets {
                quiet: self.king_moves & empty,
                capture: self.king_moves & enemy,
            },
        );
        generate_king_moves(self, king_targets, list);

        match self.checkers.popcount() {
            0 => {
                if mode.includes_quiet() {
                    generate_castling_moves(self, list);
                }
                self.generate_non_king_moves(
                    mode,
                    Targets {
                        quiet: empty,
                        capture: enemy,
                    },
                    list,
                );
            }
            1 => {
                let checker = self.checkers.lsb_square();
                self.generate_non_king_moves(
                    mode,
                    Targets {
                        quiet: ray_exclude_destination(self.king, checker),
                        capture: self.checkers,
                    },
                    list,
                );
            }
            _ => {}
        }

        list.len()
    }

    /// Pawns get the unfiltered targets since a promotion onto an empty
    /// square is still noisy.
    fn generate_non_king_moves(&self, mode: GenerationMode, targets: Targets, list: &mut MoveList) {
        generate_pawn_moves(self, mode, targets, list);
        if mode.includes_noisy() {
            generate_en_passant_moves(self, list);
        }
        generate_piece_moves(self, self.filter(mode, targets), list);
    }

    #[inline]
    fn filter(&self, mode: GenerationMode, targets: Targets) -> Targets {
        Targets {
            quiet: if mode.includes_quiet() { targets.quiet } else { Bitboard::EMPTY },
            capture: if mode.includes_noisy() { targets.capture } else { Bitboard::EMPTY },
        }
    }

    /// The rank our pawns promote on.
    #[inline]
    pub(crate) fn promotion_rank(&self) -> Bitboard {
        match self.us {
            Color::Light => Bitboard::RANK_8,
            Color::Dark => Bitboard::RANK_1,
        }
    }
}

/// Convenience wrapper generating every legal move of `board`.
pub fn generate_legal_moves(board: &Board, rules: &CastleRules, list: &mut MoveList) -> usize {
    MoveGenerator::new(board, rules).generate_moves(GenerationMode::All, list)
}
