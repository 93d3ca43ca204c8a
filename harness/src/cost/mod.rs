//! Cost of a terminal state: a weighted sum of independent terms.
//!
//! Hard constraints surface as a flat [`PENALTY`] so that any sequence
//! breaking one scores far below every sequence that does not.

mod corridor;
mod counts;
mod ends;
mod length;
mod mix;

use serde::{Deserialize, Serialize};

use crate::error::CostError;
use crate::rules_data::RulesData;
use crate::state::AggState;

pub use corridor::corridor_cost;
pub use counts::{
    core_count_cost, entrance_count_cost, fire_core_count_cost, lift_core_count_cost,
    stair_core_count_cost,
};
pub use ends::{closing_cost, end_clash_cost};
pub use length::{efficiency_cost, length_cost};
pub use mix::{unit_distribution, unit_mix_cost};

/// Cost charged for each violated hard constraint.
pub const PENALTY: f64 = 1e6;

/// Weighted cost terms of one terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub corridor: f64,
    pub core_count: f64,
    pub length: f64,
    pub unit_mix: f64,
    pub entrance_count: f64,
    pub fire_core_count: f64,
    pub lift_core_count: f64,
    pub stair_core_count: f64,
    pub efficiency: f64,
    pub end_clash: f64,
    pub closing: f64,
}

impl CostBreakdown {
    /// Evaluate every term for `state` under `data`.
    ///
    /// # Errors
    ///
    /// Returns [`CostError`] if the unit mix and the state's distribution
    /// disagree on the number of buckets.
    pub fn evaluate(state: &AggState, data: &RulesData) -> Result<Self, CostError> {
        let w = &data.weights;
        Ok(Self {
            corridor: w.corridor_length_weight * corridor_cost(state, data)?,
            core_count: w.core_count_weight * core_count_cost(state, data),
            length: w.total_length_weight * length_cost(state, data),
            unit_mix: w.unit_mix_weight * unit_mix_cost(state, data)?,
            entrance_count: w.entrance_count_weight * entrance_count_cost(state, data),
            fire_core_count: fire_core_count_cost(state, data),
            lift_core_count: lift_core_count_cost(state, data),
            stair_core_count: stair_core_count_cost(state, data),
            efficiency: w.efficiency_weight * efficiency_cost(state),
            end_clash: end_clash_cost(state, data),
            closing: w.closing_weight * closing_cost(state, data),
        })
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.corridor
            + self.core_count
            + self.length
            + self.unit_mix
            + self.entrance_count
            + self.fire_core_count
            + self.lift_core_count
            + self.stair_core_count
            + self.efficiency
            + self.end_clash
            + self.closing
    }
}

/// Root-sum-square difference between `actual` and `target`, normalised by
/// the sum of `actual`.
///
/// An all-zero `actual` has nothing to normalise by; the plain root-sum-square
/// is returned instead.
///
/// # Errors
///
/// Returns [`CostError::DistributionLengthMismatch`] if the slices differ
/// in length.
#[allow(clippy::float_cmp)]
pub fn rms_difference(actual: &[f64], target: &[f64]) -> Result<f64, CostError> {
    if actual.len() != target.len() {
        return Err(CostError::DistributionLengthMismatch {
            actual: actual.len(),
            target: target.len(),
        });
    }
    let squares: f64 = actual
        .iter()
        .zip(target)
        .map(|(a, t)| (t - a) * (t - a))
        .sum();
    let total: f64 = actual.iter().sum();
    let root = squares.sqrt();
    if total == 0.0 {
        Ok(root)
    } else {
        Ok(root / total)
    }
}
