use solaria_core::{Cell, Observation, Occupant, TeamId};
use solaria_turn::{TurnSignal, TurnTracker};

const BLUE: TeamId = TeamId(0);
const RED: TeamId = TeamId(1);

fn board() -> Observation {
    Observation::from_occupants([
        Occupant::new(BLUE, 50, Cell::new(2, 2)),
        Occupant::new(BLUE, 50, Cell::new(2, 3)),
        Occupant::new(BLUE, 50, Cell::new(2, 4)),
        Occupant::new(RED, 50, Cell::new(6, 3)),
    ])
}

#[test]
fn first_observation_is_always_a_new_turn() {
    let mut tracker = TurnTracker::new(BLUE);
    assert!(!tracker.is_tracking());
    assert_eq!(tracker.observe(&Observation::new()), TurnSignal::NewTurn);
    assert!(tracker.is_tracking());
    assert_eq!(tracker.turns(), 1);
}

#[test]
fn identical_occupied_sets_are_the_same_turn() {
    let mut tracker = TurnTracker::new(BLUE);
    let obs = board();
    assert_eq!(tracker.observe(&obs), TurnSignal::NewTurn);
    assert_eq!(tracker.agent_index(), 0);
    assert_eq!(tracker.observe(&obs), TurnSignal::SameTurn);
    assert_eq!(tracker.observe(&obs), TurnSignal::SameTurn);
    assert_eq!(tracker.agent_index(), 2);
    assert_eq!(tracker.roster().len(), 3);
}

#[test]
fn hit_point_changes_alone_do_not_start_a_turn() {
    let mut tracker = TurnTracker::new(BLUE);
    tracker.observe(&board());

    let mut wounded = board();
    wounded.get_mut(Cell::new(6, 3)).expect("red").hp = 1;
    assert_eq!(tracker.observe(&wounded), TurnSignal::SameTurn);
}

#[test]
fn added_moved_or_removed_occupants_start_a_turn() {
    let mut tracker = TurnTracker::new(BLUE);
    tracker.observe(&board());

    let mut spawned = board();
    spawned.insert(Occupant::new(RED, 50, Cell::new(0, 9)));
    assert_eq!(tracker.observe(&spawned), TurnSignal::NewTurn);
    assert_eq!(tracker.agent_index(), 0);

    let mut moved = spawned.clone();
    let red = moved.remove(Cell::new(6, 3)).expect("red");
    moved.insert(Occupant { cell: Cell::new(5, 3), ..red });
    assert_eq!(tracker.observe(&moved), TurnSignal::NewTurn);

    let mut killed = moved.clone();
    killed.remove(Cell::new(2, 4));
    assert_eq!(tracker.observe(&killed), TurnSignal::NewTurn);
    assert_eq!(tracker.roster().len(), 2);
    assert_eq!(tracker.turns(), 4);
}

#[test]
fn last_teammate_captures_an_independent_snapshot() {
    let mut tracker = TurnTracker::new(BLUE);
    let mut obs = board();

    tracker.observe(&obs);
    assert!(!tracker.commit(&obs));
    tracker.observe(&obs);
    assert!(!tracker.commit(&obs));
    tracker.observe(&obs);
    assert!(tracker.is_last_to_act());
    assert!(tracker.commit(&obs));

    obs.get_mut(Cell::new(2, 2)).expect("blue").hp = 3;
    let snapshot = tracker.snapshot().expect("snapshot");
    assert_eq!(snapshot.get(Cell::new(2, 2)).map(|o| o.hp), Some(50));
}

#[test]
fn misread_turn_keeps_previous_snapshot() {
    let mut tracker = TurnTracker::new(BLUE);
    let obs = board();
    for _ in 0..3 {
        tracker.observe(&obs);
        tracker.commit(&obs);
    }
    assert!(tracker.snapshot().is_some());

    // Everyone guarded: the next turn looks like extra invocations of this one.
    tracker.observe(&obs);
    assert!(!tracker.is_last_to_act());
    assert!(!tracker.commit(&obs));
    assert_eq!(tracker.turns(), 1);
    assert!(tracker.snapshot().is_some());
}

#[test]
fn no_snapshot_without_teammates() {
    let mut tracker = TurnTracker::new(BLUE);
    let obs = Observation::from_occupants([Occupant::new(RED, 50, Cell::new(1, 1))]);
    tracker.observe(&obs);
    assert!(!tracker.is_last_to_act());
    assert!(!tracker.commit(&obs));
}
