use crate::rules_data::RulesData;
use crate::state::AggState;

use super::PENALTY;

/// Cores per unit of length, scaled so one core per two travel distances
/// costs 1.
#[allow(clippy::cast_precision_loss)]
pub fn core_count_cost(state: &AggState, data: &RulesData) -> f64 {
    if data.skip_cores || state.total_length() <= 0.0 {
        return 0.0;
    }
    state.core_count() as f64 * data.max_travel_dist_bidirectional * 2.0 / state.total_length()
}

pub fn entrance_count_cost(state: &AggState, data: &RulesData) -> f64 {
    exact(state.entrance_count(), data.target_entrance_count)
}

pub fn fire_core_count_cost(state: &AggState, data: &RulesData) -> f64 {
    exact(state.fire_core_count(), data.target_fire_core_count)
}

pub fn lift_core_count_cost(state: &AggState, data: &RulesData) -> f64 {
    exact(state.lift_core_count(), data.target_lift_core_count)
}

/// Stair cores are a floor, not an exact count.
pub fn stair_core_count_cost(state: &AggState, data: &RulesData) -> f64 {
    if state.stair_core_count() >= data.target_stair_core_count {
        0.0
    } else {
        PENALTY
    }
}

fn exact(actual: u32, target: u32) -> f64 {
    if actual == target {
        0.0
    } else {
        PENALTY
    }
}
