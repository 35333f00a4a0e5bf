//! Precomputed square-to-square rays.
//!
//! `ray(from, to)` walks from `from` (exclusive) towards `to` (inclusive)
//! when the two squares share a rank, file or diagonal, and is empty
//! otherwise. The table is directional: `ray(a, b)` and `ray(b, a)` cover the
//! same segment but include opposite endpoints.

use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::Square;

static RAYS: [[u64; 64]; 64] = generate_rays(false);
static XRAYS: [[u64; 64]; 64] = generate_rays(true);

/// Squares strictly after `from` up to and including `to`.
#[inline]
pub fn ray(from: Square, to: Square) -> Bitboard {
    Bitboard(RAYS[from as usize][to as usize])
}

/// Squares strictly between `from` and `to`.
#[inline]
pub fn ray_exclude_destination(from: Square, to: Square) -> Bitboard {
    Bitboard(RAYS[from as usize][to as usize] & !(1u64 << to))
}

/// Like [`ray`] but continuing past `to` to the board edge. A public line
/// query for callers looking behind a blocker; the generator itself only
/// needs [`ray`] and [`ray_exclude_destination`].
#[inline]
pub fn xray(from: Square, to: Square) -> Bitboard {
    Bitboard(XRAYS[from as usize][to as usize])
}

const fn sign(value: i32) -> i32 {
    if value > 0 {
        1
    } else if value < 0 {
        -1
    } else {
        0
    }
}

const fn generate_rays(extend_past_destination: bool) -> [[u64; 64]; 64] {
    let mut table = [[0u64; 64]; 64];
    let mut from = 0usize;

    while from < 64 {
        let mut to = 0usize;
        while to < 64 {
            let from_rank = (from / 8) as i32;
            let from_file = (from % 8) as i32;
            let rank_delta = (to / 8) as i32 - from_rank;
            let file_delta = (to % 8) as i32 - from_file;

            let straight = rank_delta == 0 || file_delta == 0;
            let diagonal = rank_delta == file_delta || rank_delta == -file_delta;

            if from != to && (straight || diagonal) {
                let rank_step = sign(rank_delta);
                let file_step = sign(file_delta);
                let mut rank = from_rank + rank_step;
                let mut file = from_file + file_step;
                let mut result = 0u64;
                let mut reached = false;

                while rank >= 0 && rank < 8 && file >= 0 && file < 8 {
                    if reached && !extend_past_destination {
                        break;
                    }
                    let square = (rank * 8 + file) as usize;
                    result |= 1u64 << square;
                    if square == to {
                        reached = true;
                    }
                    rank += rank_step;
                    file += file_step;
                }

                table[from][to] = result;
            }

            to += 1;
        }
        from += 1;
    }

    table
}
