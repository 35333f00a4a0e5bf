//! Packed 16-bit move encoding.
//!
//! Layout: bits 0-5 origin square, bits 6-9 flag, bits 10-15 destination.
//! Castling is encoded as king origin -> castling rook's home square so the
//! same encoding covers standard chess and 960 layouts.

use std::fmt;

use crate::game_state::chess_types::{CastleSide, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

const FROM_SHIFT: u16 = 0;
const FLAG_SHIFT: u16 = 6;
const TO_SHIFT: u16 = 10;

const SQUARE_MASK: u16 = 0x3F;
const FLAG_MASK: u16 = 0xF;

const CAPTURE_BIT: u16 = 0b0100;
const PROMOTION_BIT: u16 = 0b1000;

/// Move kind, stored in the 4-bit flag field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveFlag {
    Quiet = 0,
    DoublePush = 1,
    KingSideCastle = 2,
    QueenSideCastle = 3,
    Capture = 4,
    EnPassant = 5,
    KnightPromotion = 8,
    BishopPromotion = 9,
    RookPromotion = 10,
    QueenPromotion = 11,
    KnightPromotionCapture = 12,
    BishopPromotionCapture = 13,
    RookPromotionCapture = 14,
    QueenPromotionCapture = 15,
}

impl MoveFlag {
    /// Decode a 4-bit flag value; 6 and 7 are unassigned.
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0 => MoveFlag::Quiet,
            1 => MoveFlag::DoublePush,
            2 => MoveFlag::KingSideCastle,
            3 => MoveFlag::QueenSideCastle,
            4 => MoveFlag::Capture,
            5 => MoveFlag::EnPassant,
            8 => MoveFlag::KnightPromotion,
            9 => MoveFlag::BishopPromotion,
            10 => MoveFlag::RookPromotion,
            11 => MoveFlag::QueenPromotion,
            12 => MoveFlag::KnightPromotionCapture,
            13 => MoveFlag::BishopPromotionCapture,
            14 => MoveFlag::RookPromotionCapture,
            15 => MoveFlag::QueenPromotionCapture,
            _ => return None,
        })
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Promotion flag for `piece`; `piece` must be knight, bishop, rook or queen.
    #[inline]
    pub const fn promotion(piece: PieceKind, capture: bool) -> Self {
        let base = match piece {
            PieceKind::Knight => 8,
            PieceKind::Bishop => 9,
            PieceKind::Rook => 10,
            _ => 11,
        };
        let bits = if capture { base | CAPTURE_BIT as u8 } else { base };
        match MoveFlag::from_bits(bits) {
            Some(flag) => flag,
            None => MoveFlag::QueenPromotion,
        }
    }

    #[inline]
    pub const fn castle(side: CastleSide) -> Self {
        match side {
            CastleSide::King => MoveFlag::KingSideCastle,
            CastleSide::Queen => MoveFlag::QueenSideCastle,
        }
    }
}

/// Promotion pieces in flag order.
pub const PROMOTION_PIECES: [PieceKind; 4] =
    [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// The all-zero value, used as an empty buffer slot.
    pub const NULL: Move = Move(0);

    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Move(
            ((from as u16 & SQUARE_MASK) << FROM_SHIFT)
                | ((flag as u16) << FLAG_SHIFT)
                | ((to as u16 & SQUARE_MASK) << TO_SHIFT),
        )
    }

    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Move(value)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn from_square(self) -> Square {
        ((self.0 >> FROM_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub const fn to_square(self) -> Square {
        ((self.0 >> TO_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub const fn flag_bits(self) -> u8 {
        ((self.0 >> FLAG_SHIFT) & FLAG_MASK) as u8
    }

    /// Decoded flag, `None` for the two unassigned flag values.
    #[inline]
    pub const fn flag(self) -> Option<MoveFlag> {
        MoveFlag::from_bits(self.flag_bits())
    }

    /// `(from, to, flag)` triple, `None` when the flag field is unassigned.
    #[inline]
    pub const fn decode(self) -> Option<(Square, Square, MoveFlag)> {
        match self.flag() {
            Some(flag) => Some((self.from_square(), self.to_square(), flag)),
            None => None,
        }
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Captures include en passant and capturing promotions.
    #[inline]
    pub const fn is_capture(self) -> bool {
        (self.0 >> FLAG_SHIFT) & CAPTURE_BIT != 0
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.flag_bits() == MoveFlag::EnPassant as u8
    }

    #[inline]
    pub const fn is_double_push(self) -> bool {
        self.flag_bits() == MoveFlag::DoublePush as u8
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        (self.0 >> FLAG_SHIFT) & PROMOTION_BIT != 0
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        let bits = self.flag_bits();
        bits == MoveFlag::KingSideCastle as u8 || bits == MoveFlag::QueenSideCastle as u8
    }

    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.flag_bits() {
            2 => Some(CastleSide::King),
            3 => Some(CastleSide::Queen),
            _ => None,
        }
    }

    /// Captures, en passant and every promotion.
    #[inline]
    pub const fn is_noisy(self) -> bool {
        self.is_capture() || self.is_promotion()
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        if !self.is_promotion() {
            return None;
        }
        Some(PROMOTION_PIECES[(self.flag_bits() & 0b11) as usize])
    }

    /// Long algebraic text. Standard-chess castles print the king's
    /// destination (`e1g1`); 960 castles print king-takes-rook (`e1h1`).
    pub fn to_uci(self, chess960: bool) -> String {
        if self.is_null() {
            return "0000".to_owned();
        }

        let from = self.from_square();
        let to = match self.castle_side() {
            Some(side) if !chess960 => (from / 8) * 8 + side.king_destination_file(),
            _ => self.to_square(),
        };

        let mut out = String::with_capacity(5);
        out.push_str(&square_to_algebraic(from));
        out.push_str(&square_to_algebraic(to));
        if let Some(piece) = self.promotion_piece() {
            out.push(match piece {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                _ => 'q',
            });
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci(false))
    }
}
