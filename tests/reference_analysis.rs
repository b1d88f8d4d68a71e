//! Regression tests pinning the analysis of the published dataset
//!
//! Expected values were produced by an independent double precision run of
//! the same procedure over the literal quadruplet and zero sequences.

use assert_approx_eq::assert_approx_eq;
use quadruplet_zeta::{
    errors::CorrelationError, log_linear_fit, pearson_correlation, run_full_analysis,
    run_full_analysis_with_config, search_optimal_exponent, AnalysisConfig, CorrelationAnalyzer,
    FitMethod, QuadrupletDataset, QUADRUPLETS, RIEMANN_ZEROS,
};

fn positions() -> Vec<f64> {
    QUADRUPLETS.iter().map(|&n| n as f64).collect()
}

/// Scenario: the headline result of the full run with the default grid
#[test]
fn test_full_analysis_reproduces_published_optimum() {
    let report = run_full_analysis(&positions(), &RIEMANN_ZEROS).expect("analysis should succeed");

    assert_approx_eq!(report.optimal_alpha(), 2.74, 0.05);
    assert_approx_eq!(report.optimal_r(), 0.994, 0.002);

    // Tighter pins on the exact grid point
    assert_approx_eq!(report.optimal_alpha(), 2.741741741741742, 1e-12);
    assert_approx_eq!(report.optimal_r(), 0.9935288830629131, 1e-10);
    assert_eq!(
        report.power_transform.parameter("best_index"),
        Some(435.0)
    );
    assert!(report.power_transform.p_value < 1e-10);
}

#[test]
fn test_scaled_and_log_linear_measures() {
    let report = run_full_analysis(&positions(), &RIEMANN_ZEROS).unwrap();

    assert_approx_eq!(report.scaled_r(), 0.958267929783754, 1e-10);
    assert!(report.scaled_linear.p_value < 1e-6);

    assert_approx_eq!(report.log_linear_r(), 0.9668280682159525, 1e-10);
    assert_approx_eq!(report.log_linear_slope(), 11.70986277434619, 1e-6);
    assert_approx_eq!(report.log_linear_intercept(), -192.79820389564838, 1e-5);
}

#[test]
fn test_effective_modulus() {
    let report = run_full_analysis(&positions(), &RIEMANN_ZEROS).unwrap();
    assert_approx_eq!(report.effective_modulus(), 15.513982929537278, 1e-9);
    assert_approx_eq!(report.effective_modulus() / (47.0 / 3.0), 0.990254, 1e-5);
}

#[test]
fn test_log_linear_fit_direct() {
    let fit = log_linear_fit(&positions(), &RIEMANN_ZEROS).unwrap();

    assert_approx_eq!(fit.r, 0.9668, 0.01);
    assert_eq!(format!("{:.3}", fit.slope), "11.710");
    assert_eq!(format!("{:.3}", fit.intercept), "-192.798");
    assert!(fit.p_value > 0.0 && fit.p_value < 1e-6);
}

/// Coarse grids: the winner is fixed by which points exist on the grid
#[test]
fn test_exponent_search_small_grids() {
    let p = positions();

    let two = search_optimal_exponent(&p, &RIEMANN_ZEROS, (1.0, 5.0), 2).unwrap();
    assert_eq!(two.best_alpha, 5.0);
    assert_approx_eq!(two.best_r, 0.9887760785463706, 1e-12);

    let five = search_optimal_exponent(&p, &RIEMANN_ZEROS, (1.0, 5.0), 5).unwrap();
    assert_eq!(five.best_alpha, 3.0);
    assert_eq!(five.best_index, Some(2));
    assert_approx_eq!(five.best_r, 0.9933757139593503, 1e-12);

    let eleven = search_optimal_exponent(&p, &RIEMANN_ZEROS, (1.0, 5.0), 11).unwrap();
    assert_approx_eq!(eleven.best_alpha, 2.6, 1e-12);
    assert_eq!(eleven.best_index, Some(4));
    assert_approx_eq!(eleven.best_r, 0.9934678891673518, 1e-12);
}

#[test]
fn test_search_result_matches_direct_correlation() {
    let p = positions();
    let search = search_optimal_exponent(&p, &RIEMANN_ZEROS, (1.0, 5.0), 1000).unwrap();
    let transformed: Vec<f64> = p.iter().map(|x| x.powf(1.0 / search.best_alpha)).collect();
    let direct = pearson_correlation(&transformed, &RIEMANN_ZEROS).unwrap();

    assert_eq!(search.best_r, direct.r);
    assert_eq!(search.candidates, 1000);
}

#[test]
fn test_dataset_entry_point_matches_slices() {
    let from_dataset = CorrelationAnalyzer::new()
        .analyze_dataset(&QuadrupletDataset::reference())
        .unwrap();
    let from_slices = run_full_analysis(&positions(), &RIEMANN_ZEROS).unwrap();
    assert_eq!(from_dataset, from_slices);
}

#[test]
fn test_report_is_deterministic() {
    let config = AnalysisConfig::default();
    let analyzer = CorrelationAnalyzer::with_config(config);
    let a = analyzer.analyze(&positions(), &RIEMANN_ZEROS).unwrap();
    let b = analyzer.analyze(&positions(), &RIEMANN_ZEROS).unwrap();
    assert_eq!(a, b);

    for method in [
        FitMethod::ScaledLinear,
        FitMethod::PowerTransform,
        FitMethod::LogLinear,
    ] {
        let fit = a.fit(method);
        assert_eq!(fit.method, method);
        assert!(fit.correlation > 0.95 && fit.correlation <= 1.0);
    }
}

/// Scenario: a coarse five point grid through the configured entry point
#[test]
fn test_configured_entry_point_uses_custom_grid() {
    let dataset = QuadrupletDataset::reference();
    let config = AnalysisConfig::default().with_exponent_grid(1.0, 5.0, 5);

    let report = run_full_analysis_with_config(&dataset, &config).unwrap();
    let expected = CorrelationAnalyzer::with_config(config.clone())
        .analyze_dataset(&dataset)
        .unwrap();
    assert_eq!(report, expected);

    assert_eq!(report.optimal_alpha(), 3.0);
    assert_approx_eq!(report.optimal_r(), 0.9933757139593503, 1e-12);
    assert_eq!(report.power_transform.parameter("candidates"), Some(5.0));
    assert_eq!(report.power_transform.parameter("best_index"), Some(2.0));
    assert_approx_eq!(report.effective_modulus(), 3.0_f64.exp(), 1e-12);

    // The grid only moves the power transform; the other fits are unchanged
    let default_run = run_full_analysis_with_config(&dataset, &AnalysisConfig::default()).unwrap();
    assert_eq!(default_run, run_full_analysis(&positions(), &RIEMANN_ZEROS).unwrap());
    assert_eq!(report.scaled_linear, default_run.scaled_linear);
    assert_eq!(report.log_linear, default_run.log_linear);
}

#[test]
fn test_configured_entry_point_rejects_bad_config() {
    let config = AnalysisConfig::default().with_exponent_grid(5.0, 1.0, 10);
    assert!(matches!(
        run_full_analysis_with_config(&QuadrupletDataset::reference(), &config),
        Err(CorrelationError::InvalidParameter { .. })
    ));
}
