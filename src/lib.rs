//! Crate root module declarations for the Kitsune chess move-generation core.
//!
//! Exposes the board representation, the precomputed attack tables, the
//! legal move generator and the perft driver, plus FEN and move-text helpers
//! used by tests and external tooling.

pub mod chess_errors;

pub mod game_state {
    pub mod bitboard;
    pub mod board;
    pub mod castle_rules;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod zobrist;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
    pub mod slider_tables;
}

pub mod move_generation {
    pub mod attack_map;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_pieces;
    pub mod move_list;
    pub mod perft;
    pub mod pin_mask;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod long_algebraic;
}
