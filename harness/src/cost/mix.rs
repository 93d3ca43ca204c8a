use muscle_kernel::mix::ratios;
use muscle_kernel::unit::UnitKind;

use crate::error::CostError;
use crate::rules_data::RulesData;
use crate::state::AggState;

use super::rms_difference;

/// Share of placed apartments per unit-mix bucket, in mix order.
///
/// An entrance counts towards the category of the apartment above it.
/// Cores are not counted.
#[must_use]
pub fn unit_distribution(state: &AggState, data: &RulesData) -> Vec<f64> {
    let mix = &data.target_unit_mix;
    let mut counts = vec![0usize; mix.len()];
    for action in state.sequence() {
        let category = match &action.unit.kind {
            UnitKind::Apartment(apartment) => Some(apartment.category.as_str()),
            UnitKind::Entrance => data.above_entrance_category.as_deref(),
            UnitKind::Core(_) => None,
        };
        if let Some(index) = category.and_then(|c| mix.iter().position(|m| m.label == c)) {
            counts[index] += 1;
        }
    }
    ratios(&counts)
}

/// Normalised difference between the placed mix and the target mix.
///
/// # Errors
///
/// Propagates [`CostError`] from [`rms_difference`].
pub fn unit_mix_cost(state: &AggState, data: &RulesData) -> Result<f64, CostError> {
    let distribution = unit_distribution(state, data);
    let targets: Vec<f64> = data.target_unit_mix.iter().map(|m| m.ratio).collect();
    rms_difference(&distribution, &targets)
}
