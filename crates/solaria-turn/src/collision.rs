use solaria_core::{Cell, GridTopology, Observation, TeamId};
use tracing::debug;

/// Infers last turn's collisions by diffing hit points against the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionAdvisor {
    team: TeamId,
    collision_damage: i32,
}

impl CollisionAdvisor {
    pub fn new(team: TeamId, collision_damage: i32) -> Self {
        Self {
            team,
            collision_damage,
        }
    }

    /// Whether a friend and an enemy both bounced off `destination` last turn.
    ///
    /// Looks for occupants adjacent to `destination` that sat on the same cell
    /// for the same team in `snapshot` and lost exactly the collision damage
    /// since. Both a friendly and an enemy match are required: collisions
    /// among friends only or enemies only are not reported. Without a
    /// snapshot nothing is reported.
    pub fn collided<T>(
        &self,
        topology: &T,
        destination: Cell,
        observation: &Observation,
        snapshot: Option<&Observation>,
    ) -> bool
    where
        T: GridTopology + ?Sized,
    {
        let Some(snapshot) = snapshot else {
            return false;
        };

        let mut friend = false;
        let mut enemy = false;
        for adj in topology.adjacent_cells(destination) {
            let (Some(now), Some(before)) = (observation.get(adj), snapshot.get(adj)) else {
                continue;
            };
            if now.team != before.team
                || now.hp != before.hp.saturating_sub(self.collision_damage)
            {
                continue;
            }

            if now.is_friend_of(self.team) {
                friend = true;
            } else {
                enemy = true;
            }

            if friend && enemy {
                debug!(team = %self.team, %destination, "collision inferred");
                return true;
            }
        }
        false
    }
}
