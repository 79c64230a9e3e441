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

//! Configurations: the unit of state explored by the search.
//!
//! A `Configuration` is an arena of `EntityRecord`s indexed by `EntityIndex`
//! plus the ordered history of moves that produced it. The id→index table
//! (`Roster`) is built while seeding and shared between all configurations
//! derived from the same seed; everything mutable is owned per
//! configuration, so cloning a parent and applying a move never aliases the
//! counters of a sibling branch.
//!
//! Invariants maintained by `attempt_swap`:
//! - the number of entities at North equals the number at South,
//! - `co_location(a, b) == co_location(b, a)` for every pair,
//! - a rejected swap leaves the configuration untouched.

use crate::{
    catalog::Move,
    entity::{EntityId, EntityRecord},
    index::EntityIndex,
    roster::Roster,
    station::Station,
};
use smallvec::SmallVec;
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    roster: Arc<Roster>,
    records: SmallVec<[EntityRecord; 4]>,
    history: SmallVec<[Move; 16]>,
}

impl Configuration {
    /// Creates an empty configuration without entities or history.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new entity at `station` and registers it as a peer of every
    /// existing entity (and vice versa). Only meant for seeding.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already present.
    pub fn add_entity(&mut self, id: EntityId, station: Station) -> EntityIndex {
        let index = Arc::make_mut(&mut self.roster).insert(id);

        let mut record = EntityRecord::new(id, station);
        for (i, existing) in self.records.iter_mut().enumerate() {
            existing.register_peer(index);
            record.register_peer(EntityIndex::new(i));
        }
        self.records.push(record);

        index
    }

    /// Returns the index of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of this configuration.
    #[inline]
    pub fn index_of(&self, id: EntityId) -> EntityIndex {
        match self.roster.index_of(id) {
            Some(index) => index,
            None => panic!(
                "called `Configuration::index_of` with unknown entity {}",
                id
            ),
        }
    }

    /// Returns the record of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of this configuration.
    #[inline]
    pub fn record(&self, id: EntityId) -> &EntityRecord {
        &self.records[self.index_of(id).get()]
    }

    #[inline]
    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The moves applied so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Length of the move history.
    #[inline]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn num_entities(&self) -> usize {
        self.records.len()
    }

    /// Number of entities currently at `station`.
    pub fn count_at(&self, station: Station) -> usize {
        self.records
            .iter()
            .filter(|record| record.station() == station)
            .count()
    }

    /// Returns how often `a` and `b` shared a station at the moment of a move.
    ///
    /// # Panics
    ///
    /// Panics if either id is unknown or if `a == b`.
    pub fn co_location(&self, a: EntityId, b: EntityId) -> u32 {
        let peer = self.index_of(b);
        match self.record(a).co_location_with(peer) {
            Some(count) => count,
            None => panic!(
                "called `Configuration::co_location` with unregistered pair ({}, {})",
                a, b
            ),
        }
    }

    /// Returns `true` if swapping `mv` would be accepted, i.e. the two parties
    /// currently stand at different stations.
    ///
    /// # Panics
    ///
    /// Panics if either id is unknown.
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.record(mv.first).station() != self.record(mv.second).station()
    }

    /// Applies `mv`. See `attempt_swap`.
    #[inline]
    #[must_use]
    pub fn attempt_move(&mut self, mv: Move) -> bool {
        self.attempt_swap(mv.first, mv.second)
    }

    /// Swaps the stations of `first` and `second`.
    ///
    /// Returns `false` without touching anything if both stand at the same
    /// station (this includes `first == second`). Otherwise every entity is
    /// observed at its current station, every pair sharing a station gets its
    /// co-location counter bumped, the move is recorded, and only then do the
    /// two parties change station.
    ///
    /// # Panics
    ///
    /// Panics if either id is unknown.
    #[must_use]
    pub fn attempt_swap(&mut self, first: EntityId, second: EntityId) -> bool {
        let a = self.index_of(first);
        let b = self.index_of(second);
        if self.records[a.get()].station() == self.records[b.get()].station() {
            return false;
        }

        let mut north: SmallVec<[EntityIndex; 4]> = SmallVec::new();
        let mut south: SmallVec<[EntityIndex; 4]> = SmallVec::new();
        for (i, record) in self.records.iter_mut().enumerate() {
            record.note_stationed();
            match record.station() {
                Station::North => north.push(EntityIndex::new(i)),
                Station::South => south.push(EntityIndex::new(i)),
            }
        }

        debug_assert_eq!(
            north.len(),
            south.len(),
            "called `Configuration::attempt_swap` on an unbalanced configuration"
        );

        for group in [&north, &south] {
            for (k, &x) in group.iter().enumerate() {
                for &y in &group[k + 1..] {
                    self.records[x.get()].increment_co_location_with(y);
                    self.records[y.get()].increment_co_location_with(x);
                }
            }
        }

        self.history.push(Move::new(first, second));

        self.records[a.get()].relocate();
        self.records[b.get()].relocate();

        true
    }

    /// Returns `true` if both ids of `required_north` stand at North, every
    /// record is fair and every entity has moved the same number of times.
    ///
    /// # Panics
    ///
    /// Panics if an id of `required_north` is unknown or if both ids are the
    /// same.
    pub fn is_goal_state(&self, required_north: &[EntityId; 2]) -> bool {
        assert_ne!(
            required_north[0], required_north[1],
            "called `Configuration::is_goal_state` with a degenerate goal pair"
        );

        let pair = required_north.map(|id| self.index_of(id));
        if pair
            .iter()
            .any(|index| self.records[index.get()].station() != Station::North)
        {
            return false;
        }

        if !self.records.iter().all(EntityRecord::is_fair) {
            return false;
        }

        let mut moved = self.records.iter().map(EntityRecord::moved_count);
        match moved.next() {
            Some(first) => moved.all(|count| count == first),
            None => true,
        }
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in &self.records {
            write!(
                f,
                "name:{}, station:{}, ncount:{}, scount:{}, mcount:{}",
                record.id(),
                record.station(),
                record.visits_north(),
                record.visits_south(),
                record.moved_count()
            )?;
            for (peer, count) in record.co_locations() {
                write!(f, ", with_{}:{}", self.roster.id_at(peer), count)?;
            }
            writeln!(f)?;
        }

        for mv in &self.history {
            write!(f, "{}, ", mv)?;
        }
        writeln!(f)
    }
}
