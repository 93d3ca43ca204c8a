//! End-to-end aggregation sessions and their JSON reports.

use muscle_harness::datasets::reference_dataset;
use muscle_harness::report::AggregationReport;
use muscle_harness::rules_data::RulesProps;
use muscle_harness::runner::run_aggregation;
use muscle_kernel::dataset::Dataset;
use muscle_search::policy::SearchPolicy;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn report_round_trips_through_a_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let props = RulesProps {
        skip_cores: Some(false),
        target_stair_core_count: Some(1),
        ..RulesProps::new(50.0)
    };
    let report = run_aggregation(&reference_dataset(), &props, &SearchPolicy::with_level(1), 3)
        .unwrap();
    report.write_json(&path).unwrap();

    let back: AggregationReport = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(back.sequence, report.sequence);
    assert_eq!(back.solution_digest, report.solution_digest);
    assert_eq!(back.iterations, report.iterations);
    assert_eq!(back.counts, report.counts);
    assert!((back.reward - report.reward).abs() < 1e-9);
}

#[test]
fn session_honours_core_and_entrance_targets() {
    init_tracing();
    let props = RulesProps {
        skip_cores: Some(false),
        target_entrance_count: Some(1),
        target_stair_core_count: Some(1),
        ..RulesProps::new(60.0)
    };
    let report = run_aggregation(&reference_dataset(), &props, &SearchPolicy::with_level(1), 11)
        .unwrap();
    assert_eq!(report.counts.entrances, 1);
    assert!(report.counts.stair_cores >= 1);
    assert_eq!(report.counts.fire_cores, 0);
    assert!(report.reward > -1e6);
    assert_eq!(report.corridor_lengths.len(), report.counts.stair_cores as usize + 1);
}

#[test]
fn dataset_and_props_load_from_json() {
    let dataset_json = serde_json::to_vec(&reference_dataset()).unwrap();
    let dataset: Dataset = serde_json::from_slice(&dataset_json).unwrap();
    let props = RulesProps::from_json_slice(
        br#"{ "target_length": 30.0, "can_close_ends": [false, false] }"#,
    )
    .unwrap();
    let report = run_aggregation(&dataset, &props, &SearchPolicy::with_level(1), 0).unwrap();
    assert!(report.total_length <= 30.0);
    assert!(report.cost.closing.abs() < f64::EPSILON);
    assert!(report.sequence.iter().all(|name| !name.contains("close")));
}

#[test]
fn level_zero_session_is_one_rollout() {
    let dataset = reference_dataset();
    let props = RulesProps::new(40.0);
    let policy = SearchPolicy::with_level(0);
    let a = run_aggregation(&dataset, &props, &policy, 1).unwrap();
    let b = run_aggregation(&dataset, &props, &policy, 1).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.iterations, 1);
    assert_eq!(a.seed, 1);
}
