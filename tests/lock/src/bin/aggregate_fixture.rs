//! Binary that runs one seeded aggregation session on the reference dataset
//! and prints deterministic output lines for cross-process verification.
//!
//! Usage: `aggregate_fixture`
//!
//! Output: key=value lines on stdout. Logs go to stderr (`RUST_LOG`).

use muscle_harness::datasets::reference_dataset;
use muscle_harness::rules_data::RulesProps;
use muscle_harness::runner::run_aggregation;
use muscle_search::policy::SearchPolicy;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let props = RulesProps {
        skip_cores: Some(false),
        target_stair_core_count: Some(1),
        ..RulesProps::new(60.0)
    };
    let report = run_aggregation(&reference_dataset(), &props, &SearchPolicy::with_level(1), 2024)
        .expect("aggregation run failed");

    println!("solution_digest={}", report.solution_digest);
    println!("reward_bits={:016x}", report.reward.to_bits());
    println!("iterations={}", report.iterations);
    println!("sequence={}", report.sequence.join(","));
    println!("total_length_bits={:016x}", report.total_length.to_bits());
}
