//! Occupancy-indexed attack tables for bishops and rooks.
//!
//! Two indexing backends share one layout ("fancy" per-square slices):
//!
//! - **Magic**: `((occupancy & mask) * magic) >> shift`. Magics are searched
//!   once at start-up from a fixed-seed RNG, so every run builds identical
//!   tables.
//! - **PEXT**: the relevant occupancy bits are extracted with BMI2 `pext`
//!   into a dense index. Only selected when the CPU reports BMI2.
//!
//! When PEXT is selected the magic tables are still built and every
//! `(square, occupancy subset)` pair is cross-checked between the two
//! backends before the tables are published. A disagreement disables PEXT.
//!
//! Square arguments are not bounds-checked; callers guarantee `0..=63`.

use std::sync::OnceLock;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, error, warn};

use crate::game_state::bitboard::Bitboard;
use crate::game_state::chess_types::Square;

/// Environment variable consulted by [`SliderBackend::detect`].
pub const SLIDER_BACKEND_ENV: &str = "KITSUNE_SLIDER_BACKEND";

const BISHOP_MAGIC_SEED: u64 = 0x6B69_7473_756E_6562;
const ROOK_MAGIC_SEED: u64 = 0x6B69_7473_756E_6572;

/// How slider table indices are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderBackend {
    Magic,
    Pext,
}

impl SliderBackend {
    /// Pick a backend from `KITSUNE_SLIDER_BACKEND` (`magic`, `pext`, `auto`)
    /// and the running CPU. Unknown values behave like `auto`.
    pub fn detect() -> Self {
        let requested = std::env::var(SLIDER_BACKEND_ENV).ok();
        Self::resolve(requested.as_deref(), hardware_supports_pext())
    }

    fn resolve(requested: Option<&str>, has_pext: bool) -> Self {
        match requested.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("magic") => SliderBackend::Magic,
            Some(value) if value.eq_ignore_ascii_case("pext") && !has_pext => {
                warn!(
                    requested = value,
                    "pext slider backend requested but BMI2 is unavailable; using magic"
                );
                SliderBackend::Magic
            }
            _ if has_pext => SliderBackend::Pext,
            _ => SliderBackend::Magic,
        }
    }
}

/// Whether the running CPU can execute the BMI2 `pext` instruction.
pub fn hardware_supports_pext() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        std::arch::is_x86_feature_detected!("bmi2")
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}

/// Portable bit extract: gathers the bits of `value` selected by `mask`
/// into the low bits of the result, preserving order.
pub fn pext_software(value: u64, mut mask: u64) -> u64 {
    let mut result = 0u64;
    let mut out_bit = 0u32;
    while mask != 0 {
        let lowest = mask & mask.wrapping_neg();
        if value & lowest != 0 {
            result |= 1u64 << out_bit;
        }
        out_bit += 1;
        mask &= mask - 1;
    }
    result
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "bmi2")]
unsafe fn pext_bmi2(value: u64, mask: u64) -> u64 {
    core::arch::x86_64::_pext_u64(value, mask)
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn pext_hardware(value: u64, mask: u64) -> u64 {
    // SAFETY: the PEXT backend is only ever selected after
    // `hardware_supports_pext` confirmed BMI2 on this CPU.
    unsafe { pext_bmi2(value, mask) }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn pext_hardware(value: u64, mask: u64) -> u64 {
    pext_software(value, mask)
}

/// Attacks of a slider moving along `directions` from `square`, stopping on
/// (and including) the first occupied square of each ray.
pub fn sliding_attacks(square: Square, occupancy: Bitboard, directions: &[(i32, i32)]) -> Bitboard {
    let mut attacks = 0u64;

    for &(file_step, rank_step) in directions {
        let mut file = (square % 8) as i32 + file_step;
        let mut rank = (square / 8) as i32 + rank_step;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            let bit = 1u64 << (rank * 8 + file);
            attacks |= bit;

            if occupancy.0 & bit != 0 {
                break;
            }

            file += file_step;
            rank += rank_step;
        }
    }

    Bitboard(attacks)
}

/// Squares whose occupancy can change the attack set: the empty-board rays
/// without their final edge square.
pub fn relevant_occupancy_mask(square: Square, directions: &[(i32, i32)]) -> Bitboard {
    let rank = Bitboard::RANKS[(square / 8) as usize];
    let file = Bitboard::FILES[(square % 8) as usize];
    let edges = ((Bitboard::RANK_1 | Bitboard::RANK_8) & !rank)
        | ((Bitboard::FILE_A | Bitboard::FILE_H) & !file);
    sliding_attacks(square, Bitboard::EMPTY, directions) & !edges
}

/// Per-piece attack table for one slider kind.
#[derive(Debug)]
pub struct SliderTable {
    masks: [u64; 64],
    magics: [u64; 64],
    shifts: [u32; 64],
    offsets: [usize; 64],
    magic_attacks: Vec<u64>,
    pext_attacks: Vec<u64>,
    magic_attempts: u64,
}

impl SliderTable {
    fn build(directions: &[(i32, i32)], seed: u64, with_pext: bool) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut masks = [0u64; 64];
        let mut magics = [0u64; 64];
        let mut shifts = [0u32; 64];
        let mut offsets = [0usize; 64];
        let mut magic_attacks = Vec::new();
        let mut pext_attacks = Vec::new();
        let mut magic_attempts = 0u64;

        let mut occupancies = Vec::with_capacity(4096);
        let mut references = Vec::with_capacity(4096);
        let mut epoch = vec![0u64; 4096];
        let mut scratch = vec![0u64; 4096];

        for square in 0..64u8 {
            let sq = square as usize;
            let mask = relevant_occupancy_mask(square, directions).0;
            let bits = mask.count_ones();
            let size = 1usize << bits;

            masks[sq] = mask;
            shifts[sq] = 64 - bits;
            offsets[sq] = magic_attacks.len();

            // Carry-Rippler walk over every subset of the mask.
            occupancies.clear();
            references.clear();
            let mut subset = 0u64;
            loop {
                occupancies.push(subset);
                references.push(sliding_attacks(square, Bitboard(subset), directions).0);
                subset = subset.wrapping_sub(mask) & mask;
                if subset == 0 {
                    break;
                }
            }

            loop {
                let magic = rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>();
                if (mask.wrapping_mul(magic) >> 56).count_ones() < 6 {
                    continue;
                }

                magic_attempts += 1;
                let shift = shifts[sq];
                let mut fits = true;
                for (occupancy, reference) in occupancies.iter().zip(references.iter()) {
                    let index = ((occupancy & mask).wrapping_mul(magic) >> shift) as usize;
                    if epoch[index] < magic_attempts {
                        epoch[index] = magic_attempts;
                        scratch[index] = *reference;
                    } else if scratch[index] != *reference {
                        fits = false;
                        break;
                    }
                }

                if fits {
                    magics[sq] = magic;
                    magic_attacks.extend_from_slice(&scratch[..size]);
                    break;
                }
            }

            if with_pext {
                let start = pext_attacks.len();
                pext_attacks.resize(start + size, 0);
                for (occupancy, reference) in occupancies.iter().zip(references.iter()) {
                    pext_attacks[start + pext_software(*occupancy, mask) as usize] = *reference;
                }
            }
        }

        SliderTable {
            masks,
            magics,
            shifts,
            offsets,
            magic_attacks,
            pext_attacks,
            magic_attempts,
        }
    }

    #[inline]
    fn magic_lookup(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        let sq = square as usize;
        let index = ((occupancy.0 & self.masks[sq]).wrapping_mul(self.magics[sq]) >> self.shifts[sq]) as usize;
        Bitboard(self.magic_attacks[self.offsets[sq] + index])
    }

    #[inline]
    fn pext_lookup(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        let sq = square as usize;
        let index = pext_hardware(occupancy.0, self.masks[sq]) as usize;
        Bitboard(self.pext_attacks[self.offsets[sq] + index])
    }

    /// Check every occupancy subset of every square: hardware extract must
    /// agree with the portable one, and both backends must return the same
    /// attack set. Returns the first mismatching square.
    fn cross_validate(&self) -> Result<(), Square> {
        for square in 0..64u8 {
            let mask = self.masks[square as usize];
            let mut subset = 0u64;
            loop {
                if pext_hardware(subset, mask) != pext_software(subset, mask) {
                    return Err(square);
                }
                let occupancy = Bitboard(subset);
                if self.magic_lookup(square, occupancy) != self.pext_lookup(square, occupancy) {
                    return Err(square);
                }
                subset = subset.wrapping_sub(mask) & mask;
                if subset == 0 {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Relevant-occupancy mask of a square.
    #[inline]
    pub fn mask(&self, square: Square) -> Bitboard {
        Bitboard(self.masks[square as usize])
    }

    /// Number of candidate magics tried while building the table.
    #[inline]
    pub fn magic_attempts(&self) -> u64 {
        self.magic_attempts
    }
}

/// Bishop and rook tables plus the backend used for lookups.
#[derive(Debug)]
pub struct SliderTables {
    bishop: SliderTable,
    rook: SliderTable,
    backend: SliderBackend,
}

impl SliderTables {
    /// Build both tables. A PEXT request is downgraded to magic when the CPU
    /// lacks BMI2 or the two backends disagree.
    pub fn build(requested: SliderBackend) -> Self {
        let with_pext = requested == SliderBackend::Pext && hardware_supports_pext();

        let bishop = SliderTable::build(&BISHOP_DIRECTIONS, BISHOP_MAGIC_SEED, with_pext);
        let rook = SliderTable::build(&ROOK_DIRECTIONS, ROOK_MAGIC_SEED, with_pext);

        let mut backend = if with_pext { SliderBackend::Pext } else { SliderBackend::Magic };
        if backend == SliderBackend::Pext {
            for (name, table) in [("bishop", &bishop), ("rook", &rook)] {
                if let Err(square) = table.cross_validate() {
                    error!(piece = name, square, "magic and pext slider tables disagree; disabling pext");
                    backend = SliderBackend::Magic;
                }
            }
        }

        debug!(
            ?backend,
            bishop_attempts = bishop.magic_attempts,
            rook_attempts = rook.magic_attempts,
            bishop_entries = bishop.magic_attacks.len(),
            rook_entries = rook.magic_attacks.len(),
            "slider attack tables built"
        );

        SliderTables { bishop, rook, backend }
    }

    #[inline]
    pub fn backend(&self) -> SliderBackend {
        self.backend
    }

    #[inline]
    pub fn bishop(&self) -> &SliderTable {
        &self.bishop
    }

    #[inline]
    pub fn rook(&self) -> &SliderTable {
        &self.rook
    }

    #[inline]
    pub fn bishop_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        match self.backend {
            SliderBackend::Magic => self.bishop.magic_lookup(square, occupancy),
            SliderBackend::Pext => self.bishop.pext_lookup(square, occupancy),
        }
    }

    #[inline]
    pub fn rook_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        match self.backend {
            SliderBackend::Magic => self.rook.magic_lookup(square, occupancy),
            SliderBackend::Pext => self.rook.pext_lookup(square, occupancy),
        }
    }
}

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

static TABLES: OnceLock<SliderTables> = OnceLock::new();

/// Process-wide tables, built on first use and immutable afterwards.
#[inline]
pub fn slider_tables() -> &'static SliderTables {
    TABLES.get_or_init(|| SliderTables::build(SliderBackend::detect()))
}
