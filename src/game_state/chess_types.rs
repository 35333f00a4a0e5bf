//! Primitive chess value types shared by every subsystem.
//!
//! Squares are plain `u8` indices (`rank * 8 + file`, a1 = 0, h8 = 63) so the
//! hot paths can index tables directly. Colour and piece kind are small enums
//! whose `index()` matches the layout of the board's bitboard arrays.

/// Board square index (`0..=63`).
pub type Square = u8;

/// Sentinel meaning "no square". Prefer `Option<Square>` in new code.
pub const NULL_SQUARE: Square = 64;

/// Theoretical maximum number of legal moves in a single chess position.
pub const MAX_MOVES: usize = 218;

#[inline]
pub const fn make_square(rank: u8, file: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn square_rank(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % 8
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank the colour's king and rooks start on.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Contribution to the game-phase counter.
    #[inline]
    pub const fn phase_weight(self) -> u8 {
        PHASE_VALUES[self.index()]
    }
}

/// Phase weight per piece kind; the starting position sums to 24.
pub const PHASE_VALUES: [u8; 6] = [0, 1, 1, 2, 4, 0];

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0b1111;

/// Which wing of the board a castle goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// Slot in the rook home registry; equals the bit position of the right.
    #[inline]
    pub const fn registry_index(self, color: Color) -> usize {
        let wing = match self {
            CastleSide::King => 0,
            CastleSide::Queen => 1,
        };
        color.index() * 2 + wing
    }

    #[inline]
    pub const fn right(self, color: Color) -> CastlingRights {
        1 << self.registry_index(color)
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_destination_file(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// File the rook lands on.
    #[inline]
    pub const fn rook_destination_file(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }
}
