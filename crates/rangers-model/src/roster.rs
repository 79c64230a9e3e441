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

use crate::{entity::EntityId, index::EntityIndex};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// The id→index table of one run.
///
/// It is filled while the seed configuration is built and never changes
/// afterwards, so every configuration derived from the seed shares it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    ids: SmallVec<[EntityId; 4]>,
    lookup: FxHashMap<EntityId, EntityIndex>,
}

impl Roster {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already part of the roster.
    pub fn insert(&mut self, id: EntityId) -> EntityIndex {
        let index = EntityIndex::new(self.ids.len());
        let previous = self.lookup.insert(id, index);
        assert!(
            previous.is_none(),
            "called `Roster::insert` with duplicate entity {}",
            id
        );
        self.ids.push(id);
        index
    }

    #[inline]
    pub fn index_of(&self, id: EntityId) -> Option<EntityIndex> {
        self.lookup.get(&id).copied()
    }

    /// Returns the id stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn id_at(&self, index: EntityIndex) -> EntityId {
        assert!(
            index.get() < self.ids.len(),
            "called `Roster::id_at` with index out of bounds: the len is {} but the index is {}",
            self.ids.len(),
            index.get()
        );
        self.ids[index.get()]
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.lookup.contains_key(&id)
    }

    #[inline]
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
