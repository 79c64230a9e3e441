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

//! Puzzle scenarios.
//!
//! A `Scenario` fixes everything the search needs besides its own settings:
//! the four entities and their starting stations, the opening move forced
//! before the search begins (if any), and the pair that has to end up at
//! North. `Scenario::rangers()` is the canonical puzzle; `ScenarioBuilder`
//! builds validated variants.

use crate::{
    catalog::{Move, MoveCatalog},
    configuration::Configuration,
    entity::EntityId,
    station::Station,
};
use thiserror::Error;

/// Number of entities a scenario has to place.
pub const POPULATION: usize = 4;

/// Errors detected while validating a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("expected {expected} entities but {found} were placed")]
    PopulationSize { expected: usize, found: usize },
    #[error("entity {0} was placed more than once")]
    DuplicateEntity(EntityId),
    #[error("stations are unbalanced: {north} at North and {south} at South")]
    UnbalancedStations { north: usize, south: usize },
    #[error("entity {0} is not part of the scenario")]
    UnknownEntity(EntityId),
    #[error("opening move {0} pairs two entities at the same station")]
    IllegalOpening(Move),
    #[error("goal pair must name two distinct entities, got {0} twice")]
    DegenerateGoal(EntityId),
}

/// A validated puzzle instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    placements: Vec<(EntityId, Station)>,
    opening: Option<Move>,
    goal_north: [EntityId; 2],
}

impl Scenario {
    /// The canonical puzzle: `A` and `B` start at North, `C` and `D` at
    /// South, the opening swap is `A`↔`C`, and `A` and `B` must finish at
    /// North.
    ///
    /// Forcing the opening explores one of the four equivalent first moves;
    /// each of them yields the same number of shortest solutions.
    pub fn rangers() -> Self {
        let id = EntityId::new;
        Self {
            placements: vec![
                (id('A'), Station::North),
                (id('B'), Station::North),
                (id('C'), Station::South),
                (id('D'), Station::South),
            ],
            opening: Some(Move::new(id('A'), id('C'))),
            goal_north: [id('A'), id('B')],
        }
    }

    /// Starting stations in insertion order.
    #[inline]
    pub fn placements(&self) -> &[(EntityId, Station)] {
        &self.placements
    }

    #[inline]
    pub fn opening(&self) -> Option<Move> {
        self.opening
    }

    /// The pair required at North in a goal state.
    #[inline]
    pub fn goal_north(&self) -> &[EntityId; 2] {
        &self.goal_north
    }

    /// Returns the same scenario without a forced opening.
    pub fn without_opening(mut self) -> Self {
        self.opening = None;
        self
    }

    /// Builds the root configuration: places every entity and applies the
    /// forced opening, if there is one.
    pub fn seed(&self) -> Configuration {
        let mut config = Configuration::new();
        for &(id, station) in &self.placements {
            config.add_entity(id, station);
        }

        if let Some(opening) = self.opening {
            let applied = config.attempt_move(opening);
            assert!(
                applied,
                "called `Scenario::seed` with an illegal opening move {}",
                opening
            );
        }

        config
    }

    /// Every unordered pair of the scenario's entities.
    pub fn catalog(&self) -> MoveCatalog {
        let ids: Vec<EntityId> = self.placements.iter().map(|&(id, _)| id).collect();
        MoveCatalog::from_ids(&ids)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::rangers()
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scenario(")?;
        for (i, (id, station)) in self.placements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", id, station)?;
        }
        match self.opening {
            Some(opening) => write!(f, ", opening: {}", opening)?,
            None => write!(f, ", opening: none")?,
        }
        write!(f, ", north: {}{})", self.goal_north[0], self.goal_north[1])
    }
}

/// Builder for `Scenario`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScenarioBuilder {
    placements: Vec<(EntityId, Station)>,
    opening: Option<Move>,
    goal_north: Option<[EntityId; 2]>,
}

impl ScenarioBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `id` at `station`.
    pub fn entity<I>(mut self, id: I, station: Station) -> Self
    where
        I: Into<EntityId>,
    {
        self.placements.push((id.into(), station));
        self
    }

    /// Forces `first`↔`second` before the search starts.
    pub fn opening<I>(mut self, first: I, second: I) -> Self
    where
        I: Into<EntityId>,
    {
        self.opening = Some(Move::new(first.into(), second.into()));
        self
    }

    /// Requires `first` and `second` at North in a goal state.
    pub fn goal_north<I>(mut self, first: I, second: I) -> Self
    where
        I: Into<EntityId>,
    {
        self.goal_north = Some([first.into(), second.into()]);
        self
    }

    /// Validates the collected settings.
    ///
    /// Without an explicit goal pair, the entities placed at North are used.
    pub fn build(self) -> Result<Scenario, ScenarioError> {
        if self.placements.len() != POPULATION {
            return Err(ScenarioError::PopulationSize {
                expected: POPULATION,
                found: self.placements.len(),
            });
        }

        for (i, &(id, _)) in self.placements.iter().enumerate() {
            if self.placements[..i].iter().any(|&(other, _)| other == id) {
                return Err(ScenarioError::DuplicateEntity(id));
            }
        }

        let north: Vec<EntityId> = self
            .placements
            .iter()
            .filter(|(_, station)| station.is_north())
            .map(|&(id, _)| id)
            .collect();
        let south = self.placements.len() - north.len();
        if north.len() != south {
            return Err(ScenarioError::UnbalancedStations {
                north: north.len(),
                south,
            });
        }

        let station_of = |id: EntityId| {
            self.placements
                .iter()
                .find(|&&(other, _)| other == id)
                .map(|&(_, station)| station)
                .ok_or(ScenarioError::UnknownEntity(id))
        };

        if let Some(opening) = self.opening {
            if station_of(opening.first)? == station_of(opening.second)? {
                return Err(ScenarioError::IllegalOpening(opening));
            }
        }

        let goal_north = match self.goal_north {
            Some(pair) => pair,
            None => [north[0], north[1]],
        };
        for &id in &goal_north {
            station_of(id)?;
        }
        if goal_north[0] == goal_north[1] {
            return Err(ScenarioError::DegenerateGoal(goal_north[0]));
        }

        Ok(Scenario {
            placements: self.placements,
            opening: self.opening,
            goal_north,
        })
    }
}
