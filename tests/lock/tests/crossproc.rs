//! Cross-process determinism for aggregation sessions.
//!
//! Spawns the `aggregate_fixture` binary under several environment variants
//! and asserts all produce identical output.

use std::process::Command;

fn run_variant(env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_aggregate_fixture");

    let mut command = Command::new(bin);
    command
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} (overrides={env_overrides:?}): {e}"));
    assert!(
        output.status.success(),
        "aggregate_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let baseline = run_variant(&[]);
    assert!(
        baseline.contains("solution_digest=sha256:"),
        "baseline output missing solution_digest: {baseline}"
    );
    assert!(baseline.contains("iterations="));

    let variants: &[&[(&str, &str)]] = &[
        &[("LC_ALL", "C")],
        &[("LANG", "en_US.UTF-8")],
        &[("RUST_LOG", "debug")],
    ];
    for overrides in variants {
        assert_eq!(
            run_variant(overrides),
            baseline,
            "output diverged under {overrides:?}"
        );
    }
}
