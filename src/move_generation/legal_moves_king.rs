//! King steps and castling.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{MoveGenerator, Targets};
use crate::move_generation::move_list::MoveList;
use crate::moves::move_descriptions::{Move, MoveFlag};
use crate::moves::rays::ray;

/// King steps onto squares the enemy does not attack. `targets` is already
/// restricted to the king's safe destinations.
pub(crate) fn generate_king_moves(generator: &MoveGenerator, targets: Targets, list: &mut MoveList) {
    let from = generator.king;
    for to in targets.quiet {
        list.push(Move::new(from, to, MoveFlag::Quiet));
    }
    for to in targets.capture {
        list.push(Move::new(from, to, MoveFlag::Capture));
    }
}

/// Castling for standard and 960 layouts. Only called when not in check.
///
/// The king and rook are lifted off the board before checking that their
/// paths and the span between them are empty, so either may land on the
/// other's home square.
pub(crate) fn generate_castling_moves(generator: &MoveGenerator, list: &mut MoveList) {
    let board = generator.board;
    let us = generator.us;
    let king = generator.king;
    let home = us.home_rank();

    for side in [CastleSide::King, CastleSide::Queen] {
        if !board.can_castle(side, us) {
            continue;
        }
        let Some(rook) = generator.rules.rook_square(side, us) else {
            continue;
        };
        if generator.pins.orthogonal.contains(rook) {
            continue;
        }

        let king_to = make_square(home, side.king_destination_file());
        let rook_to = make_square(home, side.rook_destination_file());
        let others = board.occupancy_all() ^ Bitboard::from_square(king) ^ Bitboard::from_square(rook);

        let path = ray(king, king_to) | ray(rook, rook_to) | ray(king, rook);
        if (path & others).is_not_empty() {
            continue;
        }
        if (ray(king, king_to) & generator.attack_map).is_not_empty() {
            continue;
        }

        list.push(Move::new(king, rook, MoveFlag::castle(side)));
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::move_generation::legal_move_generator::{GenerationMode, MoveGenerator};
    use crate::move_generation::move_list::MoveList;

    fn castles(fen: &str) -> Vec<String> {
        let board = Board::from_fen(fen).expect("test FEN should parse");
        let rules = board.castle_rules();
        let generator = MoveGenerator::new(&board, &rules);
        let mut list = MoveList::new();
        generator.generate_moves(GenerationMode::Quiet, &mut list);
        let mut out: Vec<String> = list
            .iter()
            .filter(|mv| mv.is_castle())
            .map(|mv| mv.to_uci(board.is_chess960()))
            .collect();
        out.sort();
        out
    }

    #[test]
    fn standard_castles_both_colours() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec!["e1c1", "e1g1"]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec!["e8c8", "e8g8"]);
    }

    #[test]
    fn rights_gate_castling() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1"), vec!["e1g1"]);
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").is_empty());
    }

    #[test]
    fn king_destination_must_be_safe() {
        // g1 covered by the g8 rook.
        assert_eq!(castles("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["e1c1"]);
    }

    #[test]
    fn chess960_king_already_on_destination() {
        // King g1, rook h1: the rook hops to f1 and the king stays put.
        assert_eq!(castles("6k1/8/8/8/8/8/8/6KR w H - 0 1"), vec!["g1h1"]);
        // Something on f1 blocks the rook's landing square.
        assert!(castles("6k1/8/8/8/8/8/8/5NKR w H - 0 1").is_empty());
    }

    #[test]
    fn chess960_rook_crossing_the_king_path() {
        // King b1, rook a1: king travels to c1 and rook to d1.
        assert_eq!(castles("6k1/8/8/8/8/8/8/RK6 w A - 0 1"), vec!["b1a1"]);
        assert!(castles("6k1/8/8/8/8/8/8/RK1N4 w A - 0 1").is_empty());
    }
}
