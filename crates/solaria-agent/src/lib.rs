//! Per-turn decision engine for grid-battle occupants.
//!
//! One [`Agent`] serves every occupant of its team within one process and is
//! invoked once per occupant per turn. Teammates acting later in a turn see
//! the destinations claimed by earlier ones because they share the agent's
//! potential field.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod combat;
pub mod config;

pub use agent::{Agent, AgentError, AgentState};
pub use combat::{CombatHeuristic, Relation};
pub use config::AgentConfig;
