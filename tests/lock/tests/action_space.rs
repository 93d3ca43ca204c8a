//! Valid-action enumeration on the reference dataset.
//!
//! - First actions with cores skipped and no entrances are exactly the
//!   apartments that do not close the end of the corridor.
//! - A short target admits exactly the templates shorter than it.
//! - Enumeration is a pure function of the state.

use lock_tests::fixtures::{action, reference_rules};
use muscle_harness::datasets::reference_dataset;
use muscle_harness::rules::AggRules;
use muscle_harness::rules_data::RulesProps;
use muscle_harness::state::AggState;
use muscle_kernel::unit::CloseDirection;
use muscle_search::contract::{SearchRules, SearchState};

fn names(rules: &AggRules, state: &AggState) -> Vec<String> {
    rules
        .valid_actions(state)
        .iter()
        .map(|a| a.name().to_string())
        .collect()
}

#[test]
fn first_actions_are_the_non_end_closing_apartments() {
    let rules = reference_rules(&RulesProps {
        skip_cores: Some(true),
        target_entrance_count: Some(0),
        ..RulesProps::new(100.0)
    });
    let expected: Vec<String> = reference_dataset()
        .apartments
        .iter()
        .filter(|u| u.close_direction() != Some(CloseDirection::End))
        .map(|u| u.name.clone())
        .collect();
    assert_eq!(names(&rules, &rules.initial_state()), expected);
}

#[test]
fn short_target_admits_only_shorter_templates() {
    let target = 8.0;
    let dataset = reference_dataset();
    let gap = dataset.agg_config.gap;
    // The reference lengths leave no template within one gap below the target.
    assert!(dataset
        .apartments
        .iter()
        .all(|u| u.length >= target || u.length + gap <= target));

    let rules = reference_rules(&RulesProps::new(target));
    let expected: Vec<String> = dataset
        .apartments
        .iter()
        .filter(|u| u.length < target)
        .map(|u| u.name.clone())
        .collect();
    assert!(!expected.is_empty());
    assert_eq!(names(&rules, &rules.initial_state()), expected);
}

#[test]
fn enumeration_is_repeatable() {
    let rules = reference_rules(&RulesProps {
        skip_cores: Some(false),
        target_entrance_count: Some(1),
        ..RulesProps::new(60.0)
    });
    let mut state = rules.initial_state();
    state.update(action(&rules, "1B2P"));
    state.update(action(&rules, "core-stairs"));
    let first = names(&rules, &state);
    let second = names(&rules, &state);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn every_enumerated_action_passes_the_single_action_check() {
    let rules = reference_rules(&RulesProps {
        skip_cores: Some(false),
        target_entrance_count: Some(1),
        ..RulesProps::new(60.0)
    });
    let mut state = rules.initial_state();
    loop {
        let valid = rules.valid_actions(&state);
        for a in rules.actions() {
            let listed = valid.iter().any(|v| v.name() == a.name());
            assert_eq!(listed, rules.is_action_valid(&state, a), "{}", a.name());
        }
        // Walk the first valid action so every prefix gets checked.
        let Some(next) = valid.first() else { break };
        state.update(next);
    }
    assert!(state.total_length() <= 60.0);
}
