//! Rules and states built on the reference dataset.

use muscle_harness::action::ActionRef;
use muscle_harness::datasets::reference_dataset;
use muscle_harness::rules::AggRules;
use muscle_harness::rules_data::RulesProps;
use muscle_harness::weights::AggRulesWeights;

/// Rules on the reference dataset.
///
/// # Panics
///
/// Panics if `props` is rejected. Test-only.
#[must_use]
pub fn reference_rules(props: &RulesProps) -> AggRules {
    AggRules::new(&reference_dataset(), props).expect("reference props are valid")
}

/// Properties that only score how closely the target length is filled.
///
/// Closing is disabled at both ends, so only the non-closing apartments can
/// be placed.
#[must_use]
pub fn length_only_props(target_length: f64) -> RulesProps {
    RulesProps {
        weights: Some(AggRulesWeights::length_only()),
        can_close_ends: Some([false, false]),
        lock_ends: Some([true, false]),
        target_entrance_count: Some(0),
        ..RulesProps::new(target_length)
    }
}

/// Look an action up by unit name.
///
/// # Panics
///
/// Panics if no action has that name. Test-only.
#[must_use]
pub fn action<'a>(rules: &'a AggRules, name: &str) -> &'a ActionRef {
    rules
        .actions()
        .iter()
        .find(|a| a.name() == name)
        .unwrap_or_else(|| panic!("no action named {name}"))
}
