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

//! Entity records and their fairness counters.
//!
//! An `EntityRecord` tracks where one participant currently stands and how
//! fairly it has been treated so far: how often it was observed at each
//! station, how often it was itself moved, and how often it shared a station
//! with each of its peers. Peers are addressed by `EntityIndex`, so the
//! co-location table is a small dense vector rather than a map.
//!
//! Counters only ever grow. The only mutation paths are the ones driven by
//! `Configuration::attempt_swap`, which keeps the co-location table symmetric
//! across the whole population.

use crate::{index::EntityIndex, station::Station};
use smallvec::SmallVec;

/// Identifier of one entity, drawn from a small fixed alphabet.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EntityId(char);

impl EntityId {
    #[inline(always)]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the symbol of this identifier.
    #[inline(always)]
    pub const fn symbol(&self) -> char {
        self.0
    }
}

impl From<char> for EntityId {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The state of a single entity inside a `Configuration`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRecord {
    id: EntityId,
    station: Station,
    visits_north: u32,
    visits_south: u32,
    moved_count: u32,
    /// `co_location[p]` is `Some(count)` once peer `p` has been registered.
    co_location: SmallVec<[Option<u32>; 4]>,
}

impl EntityRecord {
    /// Creates a record with all counters at zero and no registered peers.
    #[inline]
    pub fn new(id: EntityId, station: Station) -> Self {
        Self {
            id,
            station,
            visits_north: 0,
            visits_south: 0,
            moved_count: 0,
            co_location: SmallVec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn station(&self) -> Station {
        self.station
    }

    #[inline]
    pub fn visits_north(&self) -> u32 {
        self.visits_north
    }

    #[inline]
    pub fn visits_south(&self) -> u32 {
        self.visits_south
    }

    /// Returns how often this entity was observed at `station`.
    #[inline]
    pub fn visits(&self, station: Station) -> u32 {
        match station {
            Station::North => self.visits_north,
            Station::South => self.visits_south,
        }
    }

    /// Number of moves in which this entity was one of the swapped parties.
    #[inline]
    pub fn moved_count(&self) -> u32 {
        self.moved_count
    }

    /// Returns the co-location counter against `peer`, or `None` if the peer
    /// was never registered.
    #[inline]
    pub fn co_location_with(&self, peer: EntityIndex) -> Option<u32> {
        self.co_location.get(peer.get()).copied().flatten()
    }

    /// Iterates over `(peer, count)` for every registered peer in index order.
    pub fn co_locations(&self) -> impl Iterator<Item = (EntityIndex, u32)> + '_ {
        self.co_location
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|count| (EntityIndex::new(i), count)))
    }

    /// Returns the number of registered peers.
    #[inline]
    pub fn num_peers(&self) -> usize {
        self.co_location.iter().filter(|slot| slot.is_some()).count()
    }

    /// Inserts a zero-valued co-location counter for `peer`.
    ///
    /// # Panics
    ///
    /// Panics if `peer` is already registered.
    pub fn register_peer(&mut self, peer: EntityIndex) {
        let index = peer.get();
        if self.co_location.len() <= index {
            self.co_location.resize(index + 1, None);
        }

        assert!(
            self.co_location[index].is_none(),
            "called `EntityRecord::register_peer` with already registered peer {} on entity {}",
            peer,
            self.id
        );

        self.co_location[index] = Some(0);
    }

    /// Counts one observation of this entity at its current station.
    #[inline]
    pub fn note_stationed(&mut self) {
        match self.station {
            Station::North => self.visits_north += 1,
            Station::South => self.visits_south += 1,
        }
    }

    /// Increments the co-location counter against `peer`.
    ///
    /// # Panics
    ///
    /// Panics if `peer` was never registered. This means the model is
    /// corrupted and every later fairness count would be meaningless.
    pub fn increment_co_location_with(&mut self, peer: EntityIndex) {
        match self.co_location.get_mut(peer.get()) {
            Some(Some(count)) => *count += 1,
            _ => panic!(
                "called `EntityRecord::increment_co_location_with` with unregistered peer {} on entity {}",
                peer, self.id
            ),
        }
    }

    /// Returns `true` if this entity spent as many observations at North as at
    /// South and shared a station equally often with every registered peer.
    pub fn is_fair(&self) -> bool {
        if self.visits_north != self.visits_south {
            return false;
        }

        let mut counts = self.co_location.iter().flatten();
        match counts.next() {
            Some(first) => counts.all(|count| count == first),
            None => true,
        }
    }

    /// Flips the station and counts the move.
    #[inline]
    pub(crate) fn relocate(&mut self) {
        self.station = self.station.opposite();
        self.moved_count += 1;
    }
}
