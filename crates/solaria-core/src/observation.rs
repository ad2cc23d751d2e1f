use std::collections::{btree_map, BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Cell, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub team: TeamId,
    pub hp: i32,
    pub cell: Cell,
}

impl Occupant {
    pub fn new(team: TeamId, hp: i32, cell: Cell) -> Self {
        Self { team, hp, cell }
    }

    pub fn is_friend_of(&self, team: TeamId) -> bool {
        self.team == team
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservationError {
    #[error("no occupant at acting cell {0}")]
    MissingSelf(Cell),
    #[error("occupant keyed at {key} reports cell {reported}")]
    CellMismatch { key: Cell, reported: Cell },
    #[error("acting occupant at {cell} belongs to {found}, expected {expected}")]
    TeamMismatch {
        cell: Cell,
        expected: TeamId,
        found: TeamId,
    },
    #[error("occupant at {0} lies outside the board")]
    OutOfBoard(Cell),
}

/// Snapshot of every occupied cell for one turn.
///
/// `Clone` is a full deep copy; nothing inside is shared with the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Occupant>", into = "Vec<Occupant>")]
pub struct Observation {
    occupants: BTreeMap<Cell, Occupant>,
}

impl Observation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from occupants, keyed by their own `cell`.
    pub fn from_occupants(occupants: impl IntoIterator<Item = Occupant>) -> Self {
        Self {
            occupants: occupants.into_iter().map(|o| (o.cell, o)).collect(),
        }
    }

    /// Build from a sandbox map as delivered. Keys are trusted as given; run
    /// [`Observation::validate`] to check them against the occupants.
    pub fn from_map(occupants: BTreeMap<Cell, Occupant>) -> Self {
        Self { occupants }
    }

    pub fn insert(&mut self, occupant: Occupant) -> Option<Occupant> {
        self.occupants.insert(occupant.cell, occupant)
    }

    pub fn remove(&mut self, cell: Cell) -> Option<Occupant> {
        self.occupants.remove(&cell)
    }

    pub fn get(&self, cell: Cell) -> Option<&Occupant> {
        self.occupants.get(&cell)
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut Occupant> {
        self.occupants.get_mut(&cell)
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupants.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Cell, Occupant> {
        self.occupants.iter()
    }

    pub fn occupied_cells(&self) -> BTreeSet<Cell> {
        self.occupants.keys().copied().collect()
    }

    pub fn team_members(&self, team: TeamId) -> BTreeMap<Cell, Occupant> {
        self.occupants
            .iter()
            .filter(|(_, o)| o.team == team)
            .map(|(c, o)| (*c, *o))
            .collect()
    }

    /// Check every occupant sits inside the board under its own key.
    pub fn validate(&self, board_size: u32) -> Result<(), ObservationError> {
        for (key, occupant) in &self.occupants {
            if *key != occupant.cell {
                return Err(ObservationError::CellMismatch {
                    key: *key,
                    reported: occupant.cell,
                });
            }
            if !key.in_board(board_size) {
                return Err(ObservationError::OutOfBoard(*key));
            }
        }
        Ok(())
    }

    /// Resolve the occupant acting at `cell` on behalf of `team`.
    pub fn acting(&self, cell: Cell, team: TeamId) -> Result<&Occupant, ObservationError> {
        let me = self
            .occupants
            .get(&cell)
            .ok_or(ObservationError::MissingSelf(cell))?;
        if me.team != team {
            return Err(ObservationError::TeamMismatch {
                cell,
                expected: team,
                found: me.team,
            });
        }
        Ok(me)
    }
}

impl From<Vec<Occupant>> for Observation {
    fn from(value: Vec<Occupant>) -> Self {
        Self::from_occupants(value)
    }
}

impl From<Observation> for Vec<Occupant> {
    fn from(value: Observation) -> Self {
        value.occupants.into_values().collect()
    }
}

impl FromIterator<Occupant> for Observation {
    fn from_iter<I: IntoIterator<Item = Occupant>>(iter: I) -> Self {
        Self::from_occupants(iter)
    }
}

impl<'a> IntoIterator for &'a Observation {
    type Item = (&'a Cell, &'a Occupant);
    type IntoIter = btree_map::Iter<'a, Cell, Occupant>;

    fn into_iter(self) -> Self::IntoIter {
        self.occupants.iter()
    }
}
