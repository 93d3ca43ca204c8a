use crate::error::CostError;
use crate::rules_data::RulesData;
use crate::state::AggState;

use super::{rms_difference, PENALTY};

/// How far each corridor segment is from its preferred length.
///
/// Every segment is compared with the middle limit, except the outer ones
/// which use the start and end limits (the smaller of the two when there is
/// a single segment). Outer segments with their own limit count double in
/// the normalised difference. Any segment above its limit adds [`PENALTY`].
///
/// # Errors
///
/// Propagates [`CostError`] from [`rms_difference`].
pub fn corridor_cost(state: &AggState, data: &RulesData) -> Result<f64, CostError> {
    if data.skip_cores {
        return Ok(0.0);
    }
    let lengths = state.corridor_lengths();
    let limits = &data.max_corridor_dists;
    let n = lengths.len();

    let mut targets = vec![limits.middle; n];
    if n == 1 {
        targets[0] = limits.start.min(limits.end);
    } else {
        targets[0] = limits.start;
        targets[n - 1] = limits.end;
    }

    let mut adjusted_targets: Vec<f64> = targets.iter().map(|t| t * 0.5).collect();
    let mut adjusted_lengths: Vec<f64> = lengths.iter().map(|l| l * 0.5).collect();
    #[allow(clippy::float_cmp)]
    let (start_differs, end_differs) = (limits.start != limits.middle, limits.end != limits.middle);
    if start_differs {
        adjusted_targets[0] *= 2.0;
        adjusted_lengths[0] *= 2.0;
    }
    if end_differs {
        adjusted_targets[n - 1] *= 2.0;
        adjusted_lengths[n - 1] *= 2.0;
    }

    let mut cost = rms_difference(&adjusted_lengths, &adjusted_targets)?;
    for (length, target) in lengths.iter().zip(&targets) {
        if length > target {
            cost += PENALTY;
        }
    }
    Ok(cost)
}
