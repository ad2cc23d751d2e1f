//! Board, observation, rules and decision primitives shared by the solaria engine crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod cell;
pub mod decision;
pub mod observation;
pub mod rng;
pub mod rules;
pub mod team;
pub mod topology;

pub use cell::{Cell, TerrainKind, TerrainKinds};
pub use decision::Decision;
pub use observation::{Observation, ObservationError, Occupant};
pub use rng::{DeterministicRng, SplitMix64};
pub use rules::{Rules, RulesError};
pub use team::TeamId;
pub use topology::{ArenaError, GridTopology, Neighborhood, SquareArena};
