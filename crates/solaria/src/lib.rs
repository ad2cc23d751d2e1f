//! Umbrella crate that re-exports the `solaria-*` building blocks.
//!
//! Most users want [`agent::Agent`]: one per team, fed the board once per
//! occupant per turn, returning the occupant's [`core::Decision`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use solaria_core as core;

#[cfg(feature = "field")]
#[cfg_attr(docsrs, doc(cfg(feature = "field")))]
pub use solaria_field as field;

#[cfg(feature = "turn")]
#[cfg_attr(docsrs, doc(cfg(feature = "turn")))]
pub use solaria_turn as turn;

#[cfg(feature = "agent")]
#[cfg_attr(docsrs, doc(cfg(feature = "agent")))]
pub use solaria_agent as agent;

#[cfg(feature = "agent")]
#[cfg_attr(docsrs, doc(cfg(feature = "agent")))]
pub mod prelude {
    pub use solaria_agent::{Agent, AgentConfig, AgentError};
    pub use solaria_core::{
        Cell, Decision, GridTopology, Observation, Occupant, Rules, SquareArena, TeamId,
    };
}
