use crate::clash::is_clear_at_start;
use crate::rules_data::RulesData;
use crate::state::AggState;

use super::PENALTY;

/// Penalise a first unit that, once the sequence is pushed to the end of an
/// unlocked start, still lands inside the neighbour's corridor.
pub fn end_clash_cost(state: &AggState, data: &RulesData) -> f64 {
    if data.lock_ends[0] {
        return 0.0;
    }
    let Some(first) = state.first_action() else {
        return 0.0;
    };
    let diff = data.target_length - state.total_length();
    if is_clear_at_start(first, data.end_distances(0), diff, false) {
        0.0
    } else {
        PENALTY
    }
}

/// Half a point for each closable end the sequence leaves open.
pub fn closing_cost(state: &AggState, data: &RulesData) -> f64 {
    let (Some(first), Some(last)) = (state.first_action(), state.last_action()) else {
        return 0.0;
    };
    [(0, first), (1, last)]
        .into_iter()
        .filter(|(end, unit)| data.can_close_at(*end) && !unit.unit.closes_corridor())
        .map(|_| 0.5)
        .sum()
}
