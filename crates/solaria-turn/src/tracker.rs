use std::collections::{BTreeMap, BTreeSet};

use solaria_core::{Cell, Observation, Occupant, TeamId};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSignal {
    NewTurn,
    SameTurn,
}

/// Detects logical turns from repeated per-occupant invocations.
///
/// A change in the set of occupied cells (movement, death or spawn) starts a
/// new turn; an identical set means the next teammate of the same turn. A
/// turn where the set happens to match the previous one (every occupant
/// guards, or two swap cells) is read as the same turn.
#[derive(Debug, Clone)]
pub struct TurnTracker {
    team: TeamId,
    last_seen: Option<BTreeSet<Cell>>,
    agent_index: usize,
    roster: BTreeMap<Cell, Occupant>,
    snapshot: Option<Observation>,
    turns: u64,
}

impl TurnTracker {
    pub fn new(team: TeamId) -> Self {
        Self {
            team,
            last_seen: None,
            agent_index: 0,
            roster: BTreeMap::new(),
            snapshot: None,
            turns: 0,
        }
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    /// Classify this invocation. The first call ever is always a new turn.
    pub fn observe(&mut self, observation: &Observation) -> TurnSignal {
        let occupied = observation.occupied_cells();
        if self.last_seen.as_ref() == Some(&occupied) {
            self.agent_index += 1;
            return TurnSignal::SameTurn;
        }

        self.last_seen = Some(occupied);
        self.roster = observation.team_members(self.team);
        self.agent_index = 0;
        self.turns += 1;
        debug!(
            team = %self.team,
            turn = self.turns,
            roster = self.roster.len(),
            occupants = observation.len(),
            "new turn detected"
        );
        TurnSignal::NewTurn
    }

    /// Whether the current invocation is presumed to be the last teammate of the turn.
    pub fn is_last_to_act(&self) -> bool {
        self.roster.len().checked_sub(1) == Some(self.agent_index)
    }

    /// Finish the current invocation: the last teammate of a turn leaves a
    /// deep copy of the board for collision inference on the next turn.
    ///
    /// Returns `true` when a snapshot was taken.
    pub fn commit(&mut self, observation: &Observation) -> bool {
        if !self.is_last_to_act() {
            return false;
        }
        self.snapshot = Some(observation.clone());
        debug!(
            team = %self.team,
            turn = self.turns,
            occupants = observation.len(),
            "captured pre-turn snapshot"
        );
        true
    }

    /// Zero-based position of the current invocation within its turn.
    pub fn agent_index(&self) -> usize {
        self.agent_index
    }

    pub fn roster(&self) -> &BTreeMap<Cell, Occupant> {
        &self.roster
    }

    pub fn snapshot(&self) -> Option<&Observation> {
        self.snapshot.as_ref()
    }

    /// `false` until the first observation.
    pub fn is_tracking(&self) -> bool {
        self.last_seen.is_some()
    }

    /// Number of turns detected so far.
    pub fn turns(&self) -> u64 {
        self.turns
    }
}
