//! State evolution along a fixed sequence, and state independence.
//!
//! - Corridor segments grow, split at cores, and are trimmed at the end.
//! - A start pinned away from the end stretches the first segment.
//! - Clones never observe each other's updates.
//! - Counters agree with the sequence after arbitrary rollouts.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lock_tests::fixtures::{action, reference_rules};
use muscle_harness::rules_data::RulesProps;
use muscle_search::contract::{SearchRules, SearchState};
use muscle_search::search::NestedSearch;

fn assert_lengths(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}

#[test]
fn corridor_segments_follow_the_sequence() {
    let rules = reference_rules(&RulesProps::new(100.0));
    let a = action(&rules, "1B2P");
    let b = action(&rules, "2B4P");
    let core = action(&rules, "core-stairs");
    let da = a.door_distance_from_right();
    let lb = b.length();

    let mut state = rules.initial_state();
    state.update(a);
    assert_lengths(state.corridor_lengths(), &[da]);
    state.update(b);
    assert_lengths(state.corridor_lengths(), &[da + lb]);
    state.update(core);
    assert_lengths(state.corridor_lengths(), &[da + lb, 0.0]);
    state.update(b);
    assert_lengths(state.corridor_lengths(), &[da + lb, lb]);
    state.update(core);
    assert_lengths(state.corridor_lengths(), &[da + lb, lb, 0.0]);
    state.update(a);
    assert_lengths(state.corridor_lengths(), &[da + lb, lb, a.length()]);

    let mut data = rules.data().clone();
    data.target_length = state.total_length();
    state.final_update(&data);
    let last = a.door_position - a.door_width / 2.0;
    assert_lengths(state.corridor_lengths(), &[da + lb, lb, last]);
}

#[test]
fn shifted_right_single_unit_reaches_the_far_entrance() {
    let rules = reference_rules(&RulesProps {
        lock_ends: Some([false, true]),
        end_entrance_distances: Some([2.0, 3.0]),
        ..RulesProps::new(20.0)
    });
    let a = action(&rules, "1B2P");

    let mut state = rules.initial_state();
    state.update(a);
    // max(door distance 3.3, 5.0 - 2.0)
    assert_lengths(state.corridor_lengths(), &[3.3]);

    state.final_update(rules.data());
    // +15.0 of free length, then min(3.3 + 1.0, 3.0) off the end.
    assert_lengths(state.corridor_lengths(), &[15.3]);
}

#[test]
fn clones_are_independent() {
    let rules = reference_rules(&RulesProps::new(100.0));
    let mut original = rules.initial_state();
    original.update(action(&rules, "1B2P"));

    let mut clone = original.clone();
    clone.update(action(&rules, "core-stairs"));
    clone.update(action(&rules, "entrance"));

    assert_eq!(original.sequence().len(), 1);
    assert_eq!(original.corridor_lengths().len(), 1);
    assert_eq!(original.stair_core_count(), 0);
    assert_eq!(original.entrance_count(), 0);
    assert!((original.total_length() - 5.0).abs() < 1e-12);
    assert_eq!(clone.sequence().len(), 3);
    assert_eq!(clone.corridor_lengths().len(), 2);
}

#[test]
fn counters_agree_with_the_sequence_after_rollouts() {
    let rules = reference_rules(&RulesProps {
        skip_cores: Some(false),
        target_entrance_count: Some(1),
        target_fire_core_count: Some(1),
        target_lift_core_count: Some(1),
        ..RulesProps::new(80.0)
    });
    let search = NestedSearch::new(&rules);
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..50 {
        let solution = search.run(None, 0, &mut rng).unwrap().solution;
        let sequence = solution.sequence();
        let gap = rules.data().gap;

        let lengths: f64 = sequence.iter().map(|a| a.length()).sum();
        #[allow(clippy::cast_precision_loss)]
        let gaps = sequence.len().saturating_sub(1) as f64 * gap;
        assert!((solution.total_length() - (lengths + gaps)).abs() < 1e-9);
        assert!(solution.total_length() + solution.required_shift() <= 80.0 + 1e-9);

        let cores = sequence.iter().filter(|a| a.unit.is_core()).count();
        assert_eq!(solution.corridor_lengths().len(), cores + 1);
        let entrances = sequence.iter().filter(|a| a.unit.is_entrance()).count();
        assert_eq!(solution.entrance_count() as usize, entrances);
        assert!(solution.entrance_count() <= 1);
        assert!(solution.fire_core_count() <= 1);
        assert!(solution.lift_core_count() <= 1);

        for pair in sequence.windows(2) {
            assert!(!(pair[0].unit.is_core() && pair[1].unit.is_core()));
            if pair[0].unit.is_entrance() {
                assert_eq!(pair[1].name(), "1B2P-wide");
            }
        }
    }
}
