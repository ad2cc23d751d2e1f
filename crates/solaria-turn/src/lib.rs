//! Turn bookkeeping for engines invoked once per occupant rather than once per turn.
//!
//! - [`TurnTracker`] infers turn boundaries from the set of occupied cells and
//!   keeps a deep copy of the board as last seen by the final teammate to act.
//! - [`CollisionAdvisor`] reads that copy one turn later to guess whether a
//!   move into a cell bounced off an enemy.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod collision;
pub mod tracker;

pub use collision::CollisionAdvisor;
pub use tracker::{TurnSignal, TurnTracker};
