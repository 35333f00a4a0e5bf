//! Perft node counting for move generator verification.
//!
//! Every descent copies the board and applies the move to the copy. With
//! bulk counting enabled the depth-1 layer returns the legal move count
//! directly instead of visiting each leaf.

use std::thread;

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::castle_rules::CastleRules;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_list::MoveList;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerftOptions {
    /// Count depth-1 nodes from the move list length.
    pub bulk: bool,
    /// Log the node count below every root move.
    pub split: bool,
}

impl Default for PerftOptions {
    fn default() -> Self {
        PerftOptions {
            bulk: true,
            split: false,
        }
    }
}

/// Leaf count at `depth` with bulk counting.
pub fn perft(board: &Board, rules: &CastleRules, depth: u8) -> u64 {
    perft_with_options(board, rules, depth, PerftOptions::default())
}

pub fn perft_with_options(board: &Board, rules: &CastleRules, depth: u8, options: PerftOptions) -> u64 {
    if options.split {
        return perft_divide_with_options(board, rules, depth, options)
            .iter()
            .map(|(_, nodes)| nodes)
            .sum();
    }
    perft_recurse(board, rules, depth, options.bulk)
}

/// Node count below each root move, in generation order.
pub fn perft_divide(board: &Board, rules: &CastleRules, depth: u8) -> Vec<(Move, u64)> {
    perft_divide_with_options(board, rules, depth, PerftOptions { split: true, ..PerftOptions::default() })
}

fn perft_divide_with_options(
    board: &Board,
    rules: &CastleRules,
    depth: u8,
    options: PerftOptions,
) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut list = MoveList::new();
    generate_legal_moves(board, rules, &mut list);

    list.iter()
        .map(|&mv| {
            let mut child = board.clone();
            child.make_move(mv, rules);
            let nodes = perft_recurse(&child, rules, depth - 1, options.bulk);
            debug!(mv = %mv.to_uci(board.is_chess960()), nodes, "perft split");
            (mv, nodes)
        })
        .collect()
}

/// Root-split perft with one thread and one board copy per root move.
pub fn perft_multi_threaded(board: &Board, rules: &CastleRules, depth: u8) -> Result<u64, ChessErrors> {
    if depth <= 1 {
        return Ok(perft(board, rules, depth));
    }

    let mut list = MoveList::new();
    generate_legal_moves(board, rules, &mut list);

    let mut handles = Vec::with_capacity(list.len());
    for &mv in list.iter() {
        let mut child = board.clone();
        child.make_move(mv, rules);
        let rules = rules.clone();
        handles.push(thread::spawn(move || perft_recurse(&child, &rules, depth - 1, true)));
    }

    let mut total = 0;
    for handle in handles {
        total += handle.join().map_err(|_| ChessErrors::PerftWorkerPanicked)?;
    }
    Ok(total)
}

fn perft_recurse(board: &Board, rules: &CastleRules, depth: u8, bulk: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut list = MoveList::new();
    let count = generate_legal_moves(board, rules, &mut list);
    if bulk && depth == 1 {
        return count as u64;
    }

    list.iter()
        .map(|&mv| {
            let mut child = board.clone();
            child.make_move(mv, rules);
            perft_recurse(&child, rules, depth - 1, bulk)
        })
        .sum()
}
