//! Sandbox constants the engine reasons with.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rules: {0}")]
    Invalid(String),
}

/// Game constants, recognized by the sandbox's setting names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Side length of the square board.
    pub board_size: u32,

    /// Hit points of a freshly spawned occupant.
    pub robot_hp: i32,

    /// Inclusive damage bounds of a regular attack.
    pub attack_range: (i32, i32),

    /// Cap on the damage a self-destruct deals to each adjacent occupant.
    pub suicide_damage: i32,

    /// Damage both parties take when two occupants try to enter one cell.
    pub collision_damage: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            board_size: 19,
            robot_hp: 50,
            attack_range: (8, 10),
            suicide_damage: 15,
            collision_damage: 5,
        }
    }
}

impl Rules {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RulesError> {
        let rules: Rules = serde_yaml::from_str(yaml)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.board_size == 0 {
            return Err(RulesError::Invalid("board_size must be > 0".into()));
        }
        let (lo, hi) = self.attack_range;
        if lo < 0 || hi < lo {
            return Err(RulesError::Invalid(format!(
                "attack_range must be a non-negative ascending pair, got ({lo}, {hi})"
            )));
        }
        if self.suicide_damage < 0 {
            return Err(RulesError::Invalid("suicide_damage must be >= 0".into()));
        }
        if self.collision_damage < 0 {
            return Err(RulesError::Invalid("collision_damage must be >= 0".into()));
        }
        Ok(())
    }

    /// Largest damage a single attack can deal.
    pub fn max_attack_damage(&self) -> i32 {
        self.attack_range.0.max(self.attack_range.1)
    }
}
