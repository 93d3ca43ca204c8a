use crate::rules_data::RulesData;
use crate::state::AggState;

use super::PENALTY;

/// Squared shortfall against the target length. Overshooting is a hard
/// violation.
pub fn length_cost(state: &AggState, data: &RulesData) -> f64 {
    let diff = data.target_length - state.total_length();
    if diff >= 0.0 {
        diff * diff
    } else {
        PENALTY
    }
}

/// Share of gross area that is not net internal area. An empty sequence
/// recovers nothing and scores 1.
pub fn efficiency_cost(state: &AggState) -> f64 {
    let (gia, nia) = state
        .sequence()
        .iter()
        .fold((0.0, 0.0), |(gia, nia), a| (gia + a.gia, nia + a.unit.nia()));
    if gia <= 0.0 {
        return 1.0;
    }
    1.0 - nia / gia
}
