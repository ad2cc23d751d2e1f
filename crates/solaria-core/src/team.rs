use core::fmt;

use serde::{Deserialize, Serialize};

/// Owning player of an occupant.
///
/// Deterministic play requires a stable numeric ID (`stable_id`) for seeding
/// and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn stable_id(self) -> u64 {
        self.0 as u64
    }
}

impl From<u32> for TeamId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team-{}", self.0)
    }
}
