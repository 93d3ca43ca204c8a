//! Cost-term weights.

use serde::{Deserialize, Serialize};

/// Multipliers applied to the tunable cost terms.
///
/// The fire-core, lift-core, stair-core, and end-clash terms are hard
/// penalties and always carry weight 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggRulesWeights {
    pub core_count_weight: f64,
    pub total_length_weight: f64,
    pub unit_mix_weight: f64,
    pub entrance_count_weight: f64,
    pub corridor_length_weight: f64,
    pub efficiency_weight: f64,
    pub closing_weight: f64,
}

impl AggRulesWeights {
    /// Weights that only score how well the sequence fills the target length.
    #[must_use]
    pub fn length_only() -> Self {
        Self {
            core_count_weight: 0.0,
            total_length_weight: 1.0,
            unit_mix_weight: 0.0,
            entrance_count_weight: 0.0,
            corridor_length_weight: 0.0,
            efficiency_weight: 0.0,
            closing_weight: 0.0,
        }
    }

    pub(crate) fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        [
            ("core_count_weight", self.core_count_weight),
            ("total_length_weight", self.total_length_weight),
            ("unit_mix_weight", self.unit_mix_weight),
            ("entrance_count_weight", self.entrance_count_weight),
            ("corridor_length_weight", self.corridor_length_weight),
            ("efficiency_weight", self.efficiency_weight),
            ("closing_weight", self.closing_weight),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }
}

impl Default for AggRulesWeights {
    fn default() -> Self {
        Self {
            core_count_weight: 2.0,
            total_length_weight: 1.0,
            unit_mix_weight: 20.0,
            entrance_count_weight: 1.0,
            corridor_length_weight: 5.0,
            efficiency_weight: 10.0,
            closing_weight: 10.0,
        }
    }
}
