//! Which castle rights a square invalidates.
//!
//! Built from the king and rook home squares, so 960 layouts need no special
//! casing: any move touching a king home drops both rights of that colour,
//! and any move from or onto a rook home drops that rook's single right.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastleRules {
    mask: [CastlingRights; 64],
    rooks: [Option<Square>; 4],
}

impl CastleRules {
    /// `rooks` is indexed by [`CastleSide::registry_index`]; `kings` by colour.
    pub fn new(rooks: [Option<Square>; 4], kings: [Square; 2]) -> Self {
        let mut mask = [0; 64];

        for color in Color::ALL {
            mask[kings[color.index()] as usize] |=
                CastleSide::King.right(color) | CastleSide::Queen.right(color);

            for side in [CastleSide::King, CastleSide::Queen] {
                if let Some(rook) = rooks[side.registry_index(color)] {
                    mask[rook as usize] |= side.right(color);
                }
            }
        }

        CastleRules { mask, rooks }
    }

    /// Rules for the standard a/h-file rooks and e-file kings.
    pub fn standard() -> Self {
        CastleRules::new([Some(7), Some(0), Some(63), Some(56)], [4, 60])
    }

    /// Rights cleared when a move starts or ends on `square`.
    #[inline]
    pub fn mask(&self, square: Square) -> CastlingRights {
        self.mask[square as usize]
    }

    #[inline]
    pub fn rook_square(&self, side: CastleSide, color: Color) -> Option<Square> {
        self.rooks[side.registry_index(color)]
    }
}

impl Default for CastleRules {
    fn default() -> Self {
        CastleRules::standard()
    }
}
