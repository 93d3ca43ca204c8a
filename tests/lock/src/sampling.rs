//! Repeated searches over one set of rules.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use muscle_harness::rules::AggRules;
use muscle_harness::state::AggState;
use muscle_search::search::{NestedSearch, SearchOutcome};

/// Run `count` searches of `level`, one seed each (`0..count`).
///
/// # Panics
///
/// Panics if a search fails. Test-only.
#[must_use]
pub fn outcomes(rules: &AggRules, level: u32, count: u64) -> Vec<SearchOutcome<AggState>> {
    let search = NestedSearch::new(rules);
    (0..count)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            search.run(None, level, &mut rng).expect("search succeeds")
        })
        .collect()
}

/// Rewards of `count` independent rollouts drawn from one RNG stream.
///
/// # Panics
///
/// Panics if costing fails. Test-only.
#[must_use]
pub fn rollout_rewards(rules: &AggRules, count: usize, seed: u64) -> Vec<f64> {
    let search = NestedSearch::new(rules);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| search.run(None, 0, &mut rng).expect("rollout succeeds").reward)
        .collect()
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
