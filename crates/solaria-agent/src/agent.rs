use solaria_core::rng::derive_seed;
use solaria_core::{
    Cell, Decision, DeterministicRng, GridTopology, Observation, ObservationError, Occupant,
    SplitMix64, TeamId,
};
use solaria_field::PotentialField;
use solaria_turn::{CollisionAdvisor, TurnSignal, TurnTracker};
use thiserror::Error;
use tracing::debug;

use crate::{AgentConfig, CombatHeuristic};

const DOWNHILL_STREAM: u64 = 0x646f_776e;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error(transparent)]
    Observation(#[from] ObservationError),
    #[error("topology board size {topology} does not match configured board size {configured}")]
    BoardMismatch { topology: u32, configured: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    /// No observation yet.
    Idle,
    TrackingTurn,
}

/// Decision engine for every occupant of one team.
///
/// Per invocation: detect the turn, rebuild the field on a new one, fight if
/// an enemy is adjacent, otherwise step downhill and claim the destination.
pub struct Agent<R = SplitMix64>
where
    R: DeterministicRng,
{
    team: TeamId,
    config: AgentConfig,
    field: PotentialField,
    tracker: TurnTracker,
    combat: CombatHeuristic,
    collisions: CollisionAdvisor,
    rng: R,
}

impl Agent<SplitMix64> {
    /// Reproducible agent; the tie-break stream is derived from `seed` and the team.
    pub fn with_seed(team: TeamId, config: AgentConfig, seed: u64) -> Self {
        let rng = SplitMix64::new(derive_seed(seed, team.stable_id(), DOWNHILL_STREAM));
        Self::with_rng(team, config, rng)
    }

    pub fn from_entropy(team: TeamId, config: AgentConfig) -> Self {
        Self::with_seed(team, config, rand::random())
    }
}

impl<R> Agent<R>
where
    R: DeterministicRng,
{
    pub fn with_rng(team: TeamId, config: AgentConfig, rng: R) -> Self {
        Self {
            team,
            field: PotentialField::new(config.rules.board_size.max(1)),
            tracker: TurnTracker::new(team),
            combat: CombatHeuristic::new(&config.rules),
            collisions: CollisionAdvisor::new(team, config.rules.collision_damage),
            config,
            rng,
        }
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn state(&self) -> AgentState {
        if self.tracker.is_tracking() {
            AgentState::TrackingTurn
        } else {
            AgentState::Idle
        }
    }

    pub fn field(&self) -> &PotentialField {
        &self.field
    }

    pub fn tracker(&self) -> &TurnTracker {
        &self.tracker
    }

    /// Choose the action for the occupant standing on `me`.
    ///
    /// Fails only when the inputs break the contract: a board of the wrong
    /// size, an inconsistent observation, or `me` not holding one of this
    /// team's occupants. Nothing is recorded for a failed call.
    pub fn decide<T>(
        &mut self,
        topology: &T,
        observation: &Observation,
        me: Cell,
    ) -> Result<Decision, AgentError>
    where
        T: GridTopology + ?Sized,
    {
        let configured = self.config.rules.board_size;
        if topology.board_size() != configured {
            return Err(AgentError::BoardMismatch {
                topology: topology.board_size(),
                configured,
            });
        }
        observation.validate(configured)?;
        let me = *observation.acting(me, self.team)?;

        if self.tracker.observe(observation) == TurnSignal::NewTurn {
            self.field
                .rebuild(topology, observation, self.team, &self.config.field);
        }

        let decision = self.choose(topology, observation, &me);
        self.tracker.commit(observation);

        debug!(
            team = %self.team,
            cell = %me.cell,
            agent_index = self.tracker.agent_index(),
            %decision,
            distance = decision.target().map(|t| topology.distance(me.cell, t)),
            "decided"
        );
        Ok(decision)
    }

    fn choose<T>(&mut self, topology: &T, observation: &Observation, me: &Occupant) -> Decision
    where
        T: GridTopology + ?Sized,
    {
        let threats = self.combat.adjacent_threats(topology, observation, me);
        if let Some(&target) = threats.keys().next() {
            if self.combat.should_sacrifice(me, &threats) {
                return Decision::Suicide;
            }
            return Decision::Attack(target);
        }

        let Some(destination) = self.field.downhill(me.cell, &mut self.rng) else {
            return Decision::Guard;
        };
        if destination == me.cell {
            return Decision::Guard;
        }

        if self.config.claim_destinations {
            self.field.add(destination, self.config.field.dibs);
        }

        if self.config.collision_avoidance
            && self.collisions.collided(
                topology,
                destination,
                observation,
                self.tracker.snapshot(),
            )
        {
            return Decision::Attack(destination);
        }

        Decision::Move(destination)
    }
}
