use std::path::Path;

use serde::{Deserialize, Serialize};
use solaria_core::{Rules, RulesError};
use solaria_field::FieldConfig;

/// Everything an [`crate::Agent`] needs besides the board itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub rules: Rules,
    pub field: FieldConfig,

    /// Turn a move into an attack when last turn's hit points show a friend
    /// and an enemy bumped at the destination.
    pub collision_avoidance: bool,

    /// Raise the destination by `field.dibs` so later teammates in the same
    /// turn steer elsewhere.
    pub claim_destinations: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            field: FieldConfig::default(),
            collision_avoidance: true,
            claim_destinations: true,
        }
    }
}

impl AgentConfig {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Plain downhill walker: no claims, no collision inference.
    pub fn field_only(rules: Rules) -> Self {
        Self {
            rules,
            collision_avoidance: false,
            claim_destinations: false,
            ..Self::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, RulesError> {
        let config: AgentConfig = serde_yaml::from_str(yaml)?;
        config.rules.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}
