//! End-to-end runs of the `quadruplet-zeta` binary
//!
//! Each test runs the binary inside a scratch directory so the default relative
//! output paths land there.
#![cfg(feature = "serde")]

use assert_approx_eq::assert_approx_eq;
use quadruplet_zeta::{persistence::load_results, QUADRUPLETS, RIEMANN_ZEROS};
use std::fs;
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quadruplet-zeta"))
}

/// Scenario: a default run prints the summary, writes the results file and
/// both figure data files, and exits 0
#[test]
fn test_default_run_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary()
        .current_dir(dir.path())
        .env("RUST_LOG", "warn")
        .output()
        .expect("binary should start");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. Scaled Position Correlation:"));
    assert!(stdout.contains("   α = 2.74"));
    assert!(stdout.contains("  k=15: n = 1,996,430,175 [verified]"));
    assert!(stdout.contains("Results saved to data/analysis_results.json"));

    let results = load_results(&dir.path().join("data/analysis_results.json")).unwrap();
    assert_eq!(results.quadruplets, QUADRUPLETS.to_vec());
    assert_eq!(results.riemann_zeros, RIEMANN_ZEROS.to_vec());
    assert_approx_eq!(results.analysis.optimal_alpha, 2.74, 0.05);
    assert_approx_eq!(results.analysis.optimal_r, 0.994, 0.002);
    assert_approx_eq!(results.analysis.q_eff, results.analysis.optimal_alpha.exp(), 1e-12);

    let mut figures: Vec<String> = fs::read_dir(dir.path().join("figures"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    figures.sort();
    assert_eq!(
        figures,
        vec![
            "fig1_riemann_correlation.json",
            "fig1_riemann_correlation.png",
            "fig1_riemann_correlation.svg",
            "fig3_quadruplet_positions.json",
            "fig3_quadruplet_positions.png",
            "fig3_quadruplet_positions.svg",
        ]
    );
    let png = fs::read(dir.path().join("figures/fig1_riemann_correlation.png")).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    let svg = fs::read_to_string(dir.path().join("figures/fig3_quadruplet_positions.svg")).unwrap();
    assert!(svg.contains("Newly discovered"));
}

#[test]
fn test_results_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let status = binary()
        .current_dir(dir.path())
        .args(["--quiet", "--no-figures", "--output", "out.json"])
        .status()
        .unwrap();
    assert!(status.success());
    assert!(!dir.path().join("figures").exists());

    let text = fs::read_to_string(dir.path().join("out.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let top: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(top.len(), 3);
    assert!(value["quadruplets"][0].is_u64());
    assert_eq!(value["analysis"].as_object().unwrap().len(), 5);
}

/// Scenario: an invalid grid fails before anything is written
#[test]
fn test_invalid_grid_exits_non_zero_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary()
        .current_dir(dir.path())
        .args(["--steps", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("steps"), "stderr: {}", stderr);
    assert!(!dir.path().join("data").exists());
    assert!(!dir.path().join("figures").exists());
}

/// Scenario: the figure step fails after the results were computed; the run
/// fails as a whole and publishes nothing
#[test]
fn test_figure_failure_leaves_no_results_behind() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("figures"), "regular file in the way").unwrap();

    let output = binary()
        .current_dir(dir.path())
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dir.path().join("data/analysis_results.json").exists());
    let data = dir.path().join("data");
    if data.exists() {
        assert_eq!(fs::read_dir(&data).unwrap().count(), 0, "staging leftovers");
    }
    assert_eq!(
        fs::read_to_string(dir.path().join("figures")).unwrap(),
        "regular file in the way"
    );
}

#[test]
fn test_rerun_overwrites_previous_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data/analysis_results.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not json").unwrap();

    let status = binary()
        .current_dir(dir.path())
        .args(["--quiet", "--no-figures", "--steps", "5"])
        .status()
        .unwrap();
    assert!(status.success());

    let results = load_results(&path).unwrap();
    assert_eq!(results.analysis.optimal_alpha, 3.0);
}
