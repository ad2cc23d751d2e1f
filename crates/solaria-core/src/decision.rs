use core::fmt;

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::Cell;

/// The single action an occupant emits for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Move(Cell),
    Attack(Cell),
    Suicide,
    Guard,
}

impl Decision {
    /// Verb used by the sandbox action vocabulary.
    pub fn verb(self) -> &'static str {
        match self {
            Decision::Move(_) => "move",
            Decision::Attack(_) => "attack",
            Decision::Suicide => "suicide",
            Decision::Guard => "guard",
        }
    }

    pub fn target(self) -> Option<Cell> {
        match self {
            Decision::Move(cell) | Decision::Attack(cell) => Some(cell),
            Decision::Suicide | Decision::Guard => None,
        }
    }
}

/// Encodes as `["move", [x, y]]`, `["attack", [x, y]]`, `["suicide"]` or `["guard"]`.
impl Serialize for Decision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let target = self.target();
        let mut seq = serializer.serialize_seq(Some(1 + usize::from(target.is_some())))?;
        seq.serialize_element(self.verb())?;
        if let Some(cell) = target {
            seq.serialize_element(&cell)?;
        }
        seq.end()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(cell) => write!(f, "{} {}", self.verb(), cell),
            None => f.write_str(self.verb()),
        }
    }
}
