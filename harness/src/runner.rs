//! Session runner: build the rules, run one seeded nested search, and
//! report the best solution.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → AggRules::new(dataset, props)
//!   → ChaCha8Rng::seed_from_u64(seed) → NestedSearch::run(level)
//!   → cost_breakdown(solution) → AggregationReport
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use muscle_kernel::dataset::Dataset;
use muscle_search::policy::SearchPolicy;
use muscle_search::search::NestedSearch;

use crate::error::{CostError, RunError};
use crate::report::{AggregationReport, SessionInfo};
use crate::rules::AggRules;
use crate::rules_data::RulesProps;

/// Run one aggregation session.
///
/// The same dataset, properties, policy, and seed always yield the same
/// report.
///
/// # Errors
///
/// Returns [`RunError`] if the policy or configuration is rejected, or if
/// costing fails during the search.
pub fn run_aggregation(
    dataset: &Dataset,
    props: &RulesProps,
    policy: &SearchPolicy,
    seed: u64,
) -> Result<AggregationReport, RunError> {
    policy.validate::<CostError>()?;
    let rules = AggRules::new(dataset, props)?;
    let search = NestedSearch::with_policy(&rules, policy)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let outcome = search.run(None, policy.level, &mut rng)?;
    let cost = rules.cost_breakdown(&outcome.solution)?;
    let report = AggregationReport::new(
        SessionInfo {
            dataset: &dataset.name,
            seed,
            level: policy.level,
            rollouts_per_leaf: policy.rollouts_per_leaf,
            reward: outcome.reward,
            iterations: outcome.iterations,
        },
        &outcome.solution,
        cost,
    );
    info!(
        dataset = %dataset.name,
        seed,
        level = policy.level,
        reward = report.reward,
        iterations = report.iterations,
        units = report.sequence.len(),
        digest = %report.solution_digest,
        "aggregation session finished"
    );
    Ok(report)
}
