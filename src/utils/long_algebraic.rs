//! Long algebraic move text (`e2e4`, `e7e8q`) against a concrete position.
//!
//! Text is resolved by generating the legal moves and matching their printed
//! form, so flags (double push, en passant, castle) never have to be guessed
//! from the squares alone.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::castle_rules::CastleRules;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_list::MoveList;
use crate::moves::move_descriptions::Move;

/// Move text as printed for `board`; 960 positions print castles as
/// king-takes-rook.
#[inline]
pub fn move_to_long_algebraic(mv: Move, board: &Board) -> String {
    mv.to_uci(board.is_chess960())
}

/// Find the legal move of `board` whose text is `text`.
pub fn find_legal_move(board: &Board, rules: &CastleRules, text: &str) -> Result<Move, ChessErrors> {
    if !(4..=5).contains(&text.len()) {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    let mut list = MoveList::new();
    generate_legal_moves(board, rules, &mut list);

    list.iter()
        .copied()
        .find(|mv| move_to_long_algebraic(*mv, board) == text)
        .ok_or_else(|| ChessErrors::InvalidAlgebraic(text.to_owned()))
}

/// Play a sequence of move texts from `board`, returning the final position.
pub fn play_moves(board: &Board, rules: &CastleRules, line: &[&str]) -> Result<Board, ChessErrors> {
    let mut current = board.clone();
    for text in line {
        let mv = find_legal_move(&current, rules, text)?;
        current.make_move(mv, rules);
    }
    Ok(current)
}
