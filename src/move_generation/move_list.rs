//! Fixed-capacity move buffer.
//!
//! Sized for the largest legal move count any chess position can have, so
//! generation never allocates and never needs a capacity check in release
//! builds.

use std::ops::Index;

use crate::game_state::chess_types::MAX_MOVES;
use crate::moves::move_descriptions::Move;

#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::MoveFlag;

    #[test]
    fn push_iterate_and_clear() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let first = Move::new(12, 28, MoveFlag::DoublePush);
        let second = Move::new(6, 21, MoveFlag::Quiet);
        list.push(first);
        list.push(second);

        assert_eq!(list.len(), 2);
        assert_eq!(list[1], second);
        assert!(list.contains(first));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![first, second]);

        list.clear();
        assert!(list.is_empty());
        assert!(!list.contains(first));
    }

    #[test]
    fn holds_the_maximum_move_count() {
        let mut list = MoveList::new();
        for _ in 0..MAX_MOVES {
            list.push(Move::new(0, 1, MoveFlag::Quiet));
        }
        assert_eq!(list.len(), MAX_MOVES);
    }
}
