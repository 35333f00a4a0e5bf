//! Errors returned by the crate's fallible boundaries.
//!
//! Position construction and text parsing return `Result<_, ChessErrors>`.
//! Attack lookups, move generation and move application never fail; their
//! preconditions are documented on each function and only checked with
//! `debug_assert!`.

use thiserror::Error;

use crate::game_state::chess_types::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Wrong number of fields, or a field that is structurally unusable.
    #[error("invalid FEN string: {0}")]
    InvalidFenString(String),

    /// Unknown piece letter inside a rank string.
    #[error("invalid FEN piece token '{0}'")]
    InvalidFenToken(char),

    /// A rank string that does not describe exactly eight files.
    #[error("rank {rank} does not describe eight files: {text}")]
    InvalidRank { rank: u8, text: String },

    #[error("pawn on a back rank at {0}")]
    PawnOnBackRank(String),

    #[error("invalid side to move: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castle rights token '{0}'")]
    InvalidCastleRights(char),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid move counter: {0}")]
    InvalidCounter(String),

    #[error("invalid algebraic text: {0}")]
    InvalidAlgebraic(String),

    #[error("no {0:?} king on the board")]
    MissingKing(Color),

    #[error("more than one {0:?} king on the board")]
    TooManyKings(Color),

    /// The side that just moved has its king in check.
    #[error("illegal position: the side not to move is in check")]
    IllegalPosition,

    #[error("a perft worker thread panicked")]
    PerftWorkerPanicked,
}
