use serde::{Deserialize, Serialize};

/// How a spread amount shrinks per step away from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayMode {
    /// Move one unit toward zero per step: a Manhattan diamond of height `|amount|`.
    #[default]
    Linear,
    /// Halve per step.
    Exponential,
}

impl DecayMode {
    pub fn next(self, amount: f64) -> f64 {
        match self {
            DecayMode::Linear if amount > 0.0 => amount - 1.0,
            DecayMode::Linear => amount + 1.0,
            DecayMode::Exponential => amount / 2.0,
        }
    }
}

/// Heights used to build the field.
///
/// Peaks repel, troughs attract. Friend and enemy magnitudes are spread with
/// decay and compound where cones overlap; the remaining heights are single
/// cell increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub obstacle: i32,
    pub spawn: i32,
    pub friend: f64,
    pub enemy: f64,
    /// Added to a destination claimed by a teammate earlier in the same turn.
    pub dibs: i32,
    pub decay: DecayMode,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            obstacle: 512,
            spawn: 256,
            friend: 4.0,
            enemy: -4.0,
            dibs: 128,
            decay: DecayMode::Linear,
        }
    }
}
