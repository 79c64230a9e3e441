// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Moves and the move catalog.
//!
//! The catalog is the fixed list of every unordered pair of known entities.
//! It says nothing about legality: whether a pair may be swapped depends on
//! the stations in a particular configuration and is decided by
//! `Configuration::attempt_swap`.

use crate::entity::EntityId;

/// A swap of the stations of two entities.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Move {
    pub first: EntityId,
    pub second: EntityId,
}

impl Move {
    #[inline(always)]
    pub const fn new(first: EntityId, second: EntityId) -> Self {
        Self { first, second }
    }

    /// Returns `true` if `id` is one of the two parties of this move.
    #[inline]
    pub fn involves(&self, id: EntityId) -> bool {
        self.first == id || self.second == id
    }
}

impl From<(char, char)> for Move {
    fn from((first, second): (char, char)) -> Self {
        Self::new(EntityId::new(first), EntityId::new(second))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.first, self.second)
    }
}

/// Every unordered pair of entities, in lexicographic order of the ids as
/// they were given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveCatalog {
    moves: Vec<Move>,
}

impl MoveCatalog {
    /// Builds the catalog of all unordered pairs over `ids`.
    pub fn from_ids(ids: &[EntityId]) -> Self {
        let mut moves = Vec::with_capacity(ids.len() * ids.len().saturating_sub(1) / 2);
        for (i, &first) in ids.iter().enumerate() {
            for &second in &ids[i + 1..] {
                moves.push(Move::new(first, second));
            }
        }
        Self { moves }
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates over the catalog starting at `offset` and wrapping around, so
    /// every move is yielded exactly once.
    pub fn rotated(&self, offset: usize) -> impl Iterator<Item = Move> + '_ {
        let split = if self.moves.is_empty() {
            0
        } else {
            offset % self.moves.len()
        };
        let (head, tail) = self.moves.split_at(split);
        tail.iter().chain(head.iter()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(symbols: &str) -> Vec<EntityId> {
        symbols.chars().map(EntityId::new).collect()
    }

    #[test]
    fn test_four_entities_give_six_pairs() {
        let catalog = MoveCatalog::from_ids(&ids("ABCD"));
        let expected: Vec<Move> = [
            ('A', 'B'),
            ('A', 'C'),
            ('A', 'D'),
            ('B', 'C'),
            ('B', 'D'),
            ('C', 'D'),
        ]
        .into_iter()
        .map(Move::from)
        .collect();

        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.moves(), expected.as_slice());
    }

    #[test]
    fn test_small_catalogs() {
        assert!(MoveCatalog::from_ids(&[]).is_empty());
        assert!(MoveCatalog::from_ids(&ids("A")).is_empty());
        assert_eq!(MoveCatalog::from_ids(&ids("AB")).len(), 1);
    }

    #[test]
    fn test_rotation_is_a_permutation() {
        let catalog = MoveCatalog::from_ids(&ids("ABCD"));
        for offset in 0..(2 * catalog.len()) {
            let rotated: Vec<Move> = catalog.rotated(offset).collect();
            assert_eq!(rotated.len(), catalog.len());
            assert_eq!(rotated[0], catalog.moves()[offset % catalog.len()]);

            let mut sorted = rotated.clone();
            sorted.sort();
            let mut original = catalog.moves().to_vec();
            original.sort();
            assert_eq!(sorted, original);
        }
    }

    #[test]
    fn test_rotation_of_empty_catalog() {
        let catalog = MoveCatalog::from_ids(&[]);
        assert_eq!(catalog.rotated(5).count(), 0);
    }

    #[test]
    fn test_move_display_and_involves() {
        let mv = Move::from(('A', 'C'));
        assert_eq!(mv.to_string(), "[A,C]");
        assert!(mv.involves(EntityId::new('A')));
        assert!(mv.involves(EntityId::new('C')));
        assert!(!mv.involves(EntityId::new('B')));
    }
}
