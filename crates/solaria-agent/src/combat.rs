use std::collections::BTreeMap;

use solaria_core::{Cell, GridTopology, Observation, Occupant, Rules};

/// Which neighbors [`CombatHeuristic::adjacent_bots`] collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Enemies,
    Friends,
}

/// Melee reasoning shared by every strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatHeuristic {
    suicide_damage: i32,
    max_attack_damage: i32,
}

impl CombatHeuristic {
    pub fn new(rules: &Rules) -> Self {
        Self {
            suicide_damage: rules.suicide_damage,
            max_attack_damage: rules.max_attack_damage(),
        }
    }

    /// Hit points of the occupants next to `me`, keyed by cell.
    pub fn adjacent_bots<T>(
        &self,
        topology: &T,
        observation: &Observation,
        me: &Occupant,
        relation: Relation,
    ) -> BTreeMap<Cell, i32>
    where
        T: GridTopology + ?Sized,
    {
        topology
            .adjacent_cells(me.cell)
            .into_iter()
            .filter_map(|cell| observation.get(cell))
            .filter(|other| match relation {
                Relation::Enemies => other.team != me.team,
                Relation::Friends => other.team == me.team,
            })
            .map(|other| (other.cell, other.hp))
            .collect()
    }

    pub fn adjacent_threats<T>(
        &self,
        topology: &T,
        observation: &Observation,
        me: &Occupant,
    ) -> BTreeMap<Cell, i32>
    where
        T: GridTopology + ?Sized,
    {
        self.adjacent_bots(topology, observation, me, Relation::Enemies)
    }

    /// Whether self-destructing beats fighting on.
    ///
    /// True when the capped blast would deal more than `me` has left, or
    /// when one round of maximum attacks from every adjacent threat kills
    /// `me` anyway.
    pub fn should_sacrifice(&self, me: &Occupant, threats: &BTreeMap<Cell, i32>) -> bool {
        if threats.is_empty() {
            return false;
        }

        let blast: i64 = threats
            .values()
            .map(|hp| (*hp).min(self.suicide_damage) as i64)
            .sum();
        if (me.hp as i64) < blast {
            return true;
        }

        (me.hp as i64) <= self.max_attack_damage as i64 * threats.len() as i64
    }
}
