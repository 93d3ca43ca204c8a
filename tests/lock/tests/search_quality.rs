//! Search quality on the reference dataset.
//!
//! - Identical seeds give identical searches.
//! - Nesting beats plain rollouts on average.
//! - With both ends non-closable, no rollout hits a hard penalty.
//! - Rollouts always fill the target to within one unit.
//! - A length-only search comes within 1% of the exact best fill.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lock_tests::fixtures::{length_only_props, reference_rules};
use lock_tests::knapsack::best_fill;
use lock_tests::sampling::{mean, outcomes, rollout_rewards};
use muscle_harness::datasets::reference_dataset;
use muscle_harness::digest::solution_digest;
use muscle_harness::rules_data::RulesProps;
use muscle_search::search::NestedSearch;

#[test]
fn same_seed_same_search() {
    let rules = reference_rules(&RulesProps {
        skip_cores: Some(false),
        ..RulesProps::new(60.0)
    });
    let search = NestedSearch::new(&rules);
    let run = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        search.run(None, 1, &mut rng).unwrap()
    };
    let (a, b) = (run(42), run(42));
    assert_eq!(a.reward.to_bits(), b.reward.to_bits());
    assert_eq!(a.iterations, b.iterations);
    assert_eq!(solution_digest(&a.solution), solution_digest(&b.solution));
}

#[test]
fn nesting_beats_rollouts_on_average() {
    let rules = reference_rules(&RulesProps {
        skip_cores: Some(false),
        ..RulesProps::new(60.0)
    });
    let nested: Vec<f64> = outcomes(&rules, 1, 8).iter().map(|o| o.reward).collect();
    let rollouts = rollout_rewards(&rules, 200, 99);
    assert!(
        mean(&nested) >= mean(&rollouts),
        "nested {} < rollouts {}",
        mean(&nested),
        mean(&rollouts)
    );
}

#[test]
fn non_closable_ends_never_hit_a_hard_penalty() {
    let rules = reference_rules(&RulesProps {
        can_close_ends: Some([false, false]),
        ..RulesProps::new(100.0)
    });
    for reward in rollout_rewards(&rules, 300, 5) {
        assert!(reward > -1000.0, "reward {reward}");
    }
}

#[test]
fn rollouts_fill_to_within_the_largest_unit() {
    let rules = reference_rules(&RulesProps::new(100.0));
    let floor = 100.0 - rules.data().largest_unit_size;
    for outcome in outcomes(&rules, 0, 200) {
        assert!(
            outcome.solution.total_length() >= floor,
            "total {}",
            outcome.solution.total_length()
        );
    }
}

#[test]
fn length_only_search_is_close_to_the_best_fill() {
    let target = 120.0;
    let rules = reference_rules(&length_only_props(target));
    let dataset = reference_dataset();
    let lengths: Vec<f64> = dataset
        .apartments
        .iter()
        .filter(|u| !u.closes_corridor())
        .map(|u| u.length)
        .collect();
    let best = best_fill(&lengths, dataset.agg_config.gap, target, 0.1);

    let search = NestedSearch::new(&rules);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let outcome = search.run(None, 2, &mut rng).unwrap();
    assert!(outcome
        .solution
        .sequence()
        .iter()
        .all(|a| !a.unit.closes_corridor()));
    let total = outcome.solution.total_length();
    assert!(total <= target + 1e-9);
    assert!(total > best * 0.99, "search {total} vs best fill {best}");
}
