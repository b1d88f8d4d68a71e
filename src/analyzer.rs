//! # Correlation Analyzer
//!
//! This module contains [`CorrelationAnalyzer`], the entry point that runs the
//! three correlation measures between quadruplet positions and zeta zeros and
//! collects them into an [`AnalysisReport`].
//!
//! ## Methods
//!
//! - **Scaled linear**: Pearson r between the min–max scaled sequences
//! - **Power transform**: grid search for the alpha maximising r between
//!   `n^(1/alpha)` and the zeros
//! - **Log-linear**: regression of the zeros on `ln(n)`
//!
//! The run is a pure function of its inputs. Persisting the report and printing
//! a summary are left to the caller.
//!
//! ## Usage Example
//!
//! ```rust
//! use quadruplet_zeta::{run_full_analysis, QUADRUPLETS, RIEMANN_ZEROS};
//!
//! # fn main() -> Result<(), quadruplet_zeta::CorrelationError> {
//! let positions: Vec<f64> = QUADRUPLETS.iter().map(|&n| n as f64).collect();
//! let report = run_full_analysis(&positions, &RIEMANN_ZEROS)?;
//! println!("alpha = {:.2}, r = {:.4}", report.optimal_alpha(), report.optimal_r());
//! # Ok(())
//! # }
//! ```

use crate::{
    config::AnalysisConfig,
    dataset::QuadrupletDataset,
    errors::{validate_equal_length, CorrelationResult},
    exponent_search::{search_optimal_exponent, ExponentSearchResult},
    regression::{log_linear_fit, LogLinearFit},
    statistical_tests::pearson_correlation_named,
    transforms::{min_max_scale, power_transform},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Correlation measure between positions and zeros
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FitMethod {
    /// Pearson r of the min–max scaled sequences
    ScaledLinear,
    /// Pearson r of `n^(1/alpha)` at the optimal alpha
    PowerTransform,
    /// Pearson r of `ln(n)`, with OLS slope and intercept
    LogLinear,
}

/// One correlation measure and its fitted parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitResult {
    /// Method that produced this result
    pub method: FitMethod,
    /// Pearson correlation in [-1, 1]
    pub correlation: f64,
    /// Two-sided p-value of the correlation
    pub p_value: f64,
    /// Method specific parameters (deterministic ordering)
    pub parameters: BTreeMap<String, f64>,
}

impl FitResult {
    fn new(method: FitMethod, correlation: f64, p_value: f64) -> Self {
        Self {
            method,
            correlation,
            p_value,
            parameters: BTreeMap::new(),
        }
    }

    fn with_parameter(mut self, name: &str, value: f64) -> Self {
        self.parameters.insert(name.to_string(), value);
        self
    }

    /// Look up a fitted parameter by name.
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).copied()
    }
}

/// Complete outcome of one analysis run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisReport {
    /// Correlation of the min–max scaled sequences
    pub scaled_linear: FitResult,
    /// Correlation at the optimal power transform exponent
    pub power_transform: FitResult,
    /// Log-linear fit
    pub log_linear: FitResult,
    /// Winning exponent of the grid search
    pub optimal_alpha: f64,
    /// `e^(optimal_alpha)`
    pub effective_modulus: f64,
}

impl AnalysisReport {
    /// All three fits in method order.
    pub fn fits(&self) -> [&FitResult; 3] {
        [&self.scaled_linear, &self.power_transform, &self.log_linear]
    }

    /// Fit for one method.
    pub fn fit(&self, method: FitMethod) -> &FitResult {
        match method {
            FitMethod::ScaledLinear => &self.scaled_linear,
            FitMethod::PowerTransform => &self.power_transform,
            FitMethod::LogLinear => &self.log_linear,
        }
    }

    /// Pearson r of the scaled sequences.
    pub fn scaled_r(&self) -> f64 {
        self.scaled_linear.correlation
    }

    /// Winning exponent alpha.
    pub fn optimal_alpha(&self) -> f64 {
        self.optimal_alpha
    }

    /// Best r found by the exponent search.
    pub fn optimal_r(&self) -> f64 {
        self.power_transform.correlation
    }

    /// Pearson r between ln(n) and the zeros.
    pub fn log_linear_r(&self) -> f64 {
        self.log_linear.correlation
    }

    /// OLS slope of the zeros on ln(n).
    pub fn log_linear_slope(&self) -> f64 {
        self.log_linear.parameter("slope").unwrap_or(f64::NAN)
    }

    /// OLS intercept of the zeros on ln(n).
    pub fn log_linear_intercept(&self) -> f64 {
        self.log_linear.parameter("intercept").unwrap_or(f64::NAN)
    }

    /// `e^(optimal_alpha)`.
    pub fn effective_modulus(&self) -> f64 {
        self.effective_modulus
    }
}

/// Runs the correlation analysis under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct CorrelationAnalyzer {
    config: AnalysisConfig,
}

impl CorrelationAnalyzer {
    /// Analyzer with the default exponent grid (1.0..=5.0, 1000 steps).
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with a custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze the paired sequences of a validated dataset.
    pub fn analyze_dataset(&self, dataset: &QuadrupletDataset) -> CorrelationResult<AnalysisReport> {
        self.analyze(&dataset.positions().as_f64(), dataset.zeros().values())
    }

    /// Run all three measures over raw position and zero slices.
    pub fn analyze(&self, positions: &[f64], zeros: &[f64]) -> CorrelationResult<AnalysisReport> {
        self.config.validate()?;
        validate_equal_length(positions, zeros, "run_full_analysis")?;

        let scaled_linear = self.scaled_correlation(positions, zeros)?;
        let (search, power_transform) = self.power_transform_fit(positions, zeros)?;
        let log_linear = Self::log_linear(positions, zeros)?;
        let effective_modulus = search.best_alpha.exp();

        log::info!(
            "analysis complete: scaled r={:.4}, alpha={:.2} r={:.4}, log-linear r={:.4}, q_eff={:.1}",
            scaled_linear.correlation,
            search.best_alpha,
            power_transform.correlation,
            log_linear.correlation,
            effective_modulus
        );

        Ok(AnalysisReport {
            scaled_linear,
            power_transform,
            log_linear,
            optimal_alpha: search.best_alpha,
            effective_modulus,
        })
    }

    fn scaled_correlation(&self, positions: &[f64], zeros: &[f64]) -> CorrelationResult<FitResult> {
        let scaled_positions = min_max_scale(positions, "positions")?;
        let scaled_zeros = min_max_scale(zeros, "zeros")?;
        let test = pearson_correlation_named(
            &scaled_positions,
            &scaled_zeros,
            "scaled positions",
            "scaled zeros",
        )?;
        log::debug!("scaled correlation: r={:.6} p={:.3e}", test.r, test.p_value);

        Ok(FitResult::new(FitMethod::ScaledLinear, test.r, test.p_value))
    }

    fn power_transform_fit(
        &self,
        positions: &[f64],
        zeros: &[f64],
    ) -> CorrelationResult<(ExponentSearchResult, FitResult)> {
        let search = search_optimal_exponent(
            positions,
            zeros,
            self.config.exponent_range,
            self.config.steps,
        )?;

        // p-value at the optimum comes from a fresh correlation of the winning transform
        let transformed = power_transform(positions, search.best_alpha, "positions")?;
        let test = pearson_correlation_named(&transformed, zeros, "positions^(1/alpha)", "zeros")?;

        let mut fit = FitResult::new(FitMethod::PowerTransform, search.best_r, test.p_value)
            .with_parameter("alpha", search.best_alpha)
            .with_parameter("candidates", search.candidates as f64);
        if let Some(index) = search.best_index {
            fit = fit.with_parameter("best_index", index as f64);
        }
        Ok((search, fit))
    }

    fn log_linear(positions: &[f64], zeros: &[f64]) -> CorrelationResult<FitResult> {
        let LogLinearFit {
            r,
            p_value,
            slope,
            intercept,
        } = log_linear_fit(positions, zeros)?;

        Ok(FitResult::new(FitMethod::LogLinear, r, p_value)
            .with_parameter("slope", slope)
            .with_parameter("intercept", intercept))
    }
}

/// Full analysis with the default exponent grid.
pub fn run_full_analysis(positions: &[f64], zeros: &[f64]) -> CorrelationResult<AnalysisReport> {
    CorrelationAnalyzer::new().analyze(positions, zeros)
}

/// Full analysis of a dataset under an explicit configuration.
pub fn run_full_analysis_with_config(
    dataset: &QuadrupletDataset,
    config: &AnalysisConfig,
) -> CorrelationResult<AnalysisReport> {
    CorrelationAnalyzer::with_config(config.clone()).analyze_dataset(dataset)
}
