use std::collections::BTreeMap;

use solaria_core::{Cell, Observation, Occupant, Rules, SquareArena, TeamId};
use solaria_agent::{CombatHeuristic, Relation};

const BLUE: TeamId = TeamId(0);
const RED: TeamId = TeamId(1);

fn heuristic() -> CombatHeuristic {
    CombatHeuristic::new(&Rules::default())
}

fn me(hp: i32) -> Occupant {
    Occupant::new(BLUE, hp, Cell::new(3, 3))
}

fn threats(hps: &[i32]) -> BTreeMap<Cell, i32> {
    hps.iter()
        .enumerate()
        .map(|(i, hp)| (Cell::new(i as i32, 0), *hp))
        .collect()
}

#[test]
fn adjacent_bots_split_by_relation() {
    let arena = SquareArena::open(7);
    let obs = Observation::from_occupants([
        me(50),
        Occupant::new(RED, 12, Cell::new(3, 4)),
        Occupant::new(RED, 30, Cell::new(2, 3)),
        Occupant::new(BLUE, 44, Cell::new(4, 3)),
        Occupant::new(RED, 50, Cell::new(4, 4)),
    ]);

    let enemies = heuristic().adjacent_bots(&arena, &obs, &me(50), Relation::Enemies);
    assert_eq!(
        enemies,
        BTreeMap::from([(Cell::new(2, 3), 30), (Cell::new(3, 4), 12)])
    );
    assert_eq!(heuristic().adjacent_threats(&arena, &obs, &me(50)), enemies);

    let friends = heuristic().adjacent_bots(&arena, &obs, &me(50), Relation::Friends);
    assert_eq!(friends, BTreeMap::from([(Cell::new(4, 3), 44)]));
}

#[test]
fn no_threats_never_sacrifices() {
    assert!(!heuristic().should_sacrifice(&me(1), &BTreeMap::new()));
}

#[test]
fn sacrifice_when_the_capped_blast_exceeds_own_hit_points() {
    // One strong enemy: blast capped at 15 still beats 9 hp.
    assert!(heuristic().should_sacrifice(&me(9), &threats(&[50])));
    // Blast of 15 against 16 hp is not enough, and 16 hp survives one 10 hit.
    assert!(!heuristic().should_sacrifice(&me(16), &threats(&[50])));
    // Weak enemies cap the blast at their own hit points.
    assert!(!heuristic().should_sacrifice(&me(21), &threats(&[3, 3])));
}

#[test]
fn sacrifice_when_one_focused_round_is_lethal() {
    assert!(heuristic().should_sacrifice(&me(20), &threats(&[5, 5])));
    assert!(!heuristic().should_sacrifice(&me(21), &threats(&[5, 5])));
    assert!(heuristic().should_sacrifice(&me(10), &threats(&[1])));
}

#[test]
fn attack_range_upper_bound_drives_the_lethal_check() {
    let rules = Rules {
        attack_range: (8, 20),
        ..Rules::default()
    };
    let heuristic = CombatHeuristic::new(&rules);
    assert!(heuristic.should_sacrifice(&me(20), &threats(&[1])));
    assert!(!heuristic.should_sacrifice(&me(21), &threats(&[1])));
}
