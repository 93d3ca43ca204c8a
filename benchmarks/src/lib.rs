//! Shared helpers for aggregation benchmark suites.

use muscle_harness::datasets::reference_dataset;
use muscle_harness::rules::AggRules;
use muscle_harness::rules_data::RulesProps;
use muscle_harness::state::AggState;
use muscle_search::contract::{SearchRules, SearchState};

/// Target lengths exercised by the size-parameterised benches.
pub const TARGET_LENGTHS: [f64; 3] = [30.0, 60.0, 120.0];

/// Rules on the reference dataset for a given target length.
///
/// # Panics
///
/// Panics if the reference dataset rejects the properties. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn reference_rules(target_length: f64, skip_cores: bool) -> AggRules {
    let props = RulesProps {
        skip_cores: Some(skip_cores),
        target_stair_core_count: Some(u32::from(!skip_cores)),
        ..RulesProps::new(target_length)
    };
    AggRules::new(&reference_dataset(), &props).expect("reference props are valid")
}

/// A state roughly half way along the muscle, built from the first valid
/// action at each step.
#[must_use]
pub fn half_filled_state(rules: &AggRules) -> AggState {
    let half = rules.data().target_length / 2.0;
    let mut state = rules.initial_state();
    while state.total_length() < half {
        let Some(next) = rules.valid_actions(&state).into_iter().next() else {
            break;
        };
        state.update(&next);
    }
    state
}
