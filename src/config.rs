//! # Analysis Configuration
//!
//! Configuration structures for the exponent grid, the figure data, and where
//! run artifacts are written.

use crate::errors::{validate_parameter, validate_positive_parameter, CorrelationResult};
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default exponent search range (inclusive)
pub const DEFAULT_EXPONENT_RANGE: (f64, f64) = (1.0, 5.0);
/// Default number of exponent candidates
pub const DEFAULT_EXPONENT_STEPS: usize = 1000;
/// Exponent used for the power transform figure panel
pub const DEFAULT_FIGURE_ALPHA: f64 = 2.74;
/// Samples along each fitted line in the figure data
pub const DEFAULT_FIT_LINE_SAMPLES: usize = 100;
/// Default results file location, relative to the working directory
pub const DEFAULT_RESULTS_PATH: &str = "data/analysis_results.json";
/// Default figure directory, relative to the working directory
pub const DEFAULT_FIGURES_DIR: &str = "figures";

/// Numeric configuration of one analysis run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisConfig {
    /// Inclusive range scanned for the power transform exponent
    pub exponent_range: (f64, f64),
    /// Number of equally spaced exponent candidates
    pub steps: usize,
    /// Fixed exponent shown in the power transform figure panel
    pub figure_alpha: f64,
    /// Number of x samples along each fitted line
    pub fit_line_samples: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            exponent_range: DEFAULT_EXPONENT_RANGE,
            steps: DEFAULT_EXPONENT_STEPS,
            figure_alpha: DEFAULT_FIGURE_ALPHA,
            fit_line_samples: DEFAULT_FIT_LINE_SAMPLES,
        }
    }
}

impl AnalysisConfig {
    /// Override the exponent grid.
    pub fn with_exponent_grid(mut self, start: f64, end: f64, steps: usize) -> Self {
        self.exponent_range = (start, end);
        self.steps = steps;
        self
    }

    /// Check the configuration before any computation runs.
    pub fn validate(&self) -> CorrelationResult<()> {
        let (start, end) = self.exponent_range;
        validate_positive_parameter(start, "exponent_range.start")?;
        validate_positive_parameter(end, "exponent_range.end")?;
        validate_parameter(start, 0.0, end, "exponent_range.start")?;
        validate_parameter(self.steps as f64, 1.0, f64::INFINITY, "steps")?;
        validate_positive_parameter(self.figure_alpha, "figure_alpha")?;
        validate_parameter(
            self.fit_line_samples as f64,
            2.0,
            f64::INFINITY,
            "fit_line_samples",
        )
    }
}

/// Where a run writes its artifacts
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Results JSON path
    pub results_path: PathBuf,
    /// Directory receiving figure images and data
    pub figures_dir: PathBuf,
    /// Whether figures are rendered at all
    pub write_figures: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            figures_dir: PathBuf::from(DEFAULT_FIGURES_DIR),
            write_figures: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CorrelationError;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.exponent_range, (1.0, 5.0));
        assert_eq!(config.steps, 1000);
    }

    #[test]
    fn test_rejects_reversed_range() {
        let config = AnalysisConfig::default().with_exponent_grid(5.0, 1.0, 10);
        assert!(matches!(
            config.validate(),
            Err(CorrelationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_steps_and_non_positive_start() {
        let config = AnalysisConfig::default().with_exponent_grid(1.0, 5.0, 0);
        match config.validate() {
            Err(CorrelationError::InvalidParameter {
                parameter,
                constraint,
                ..
            }) => {
                assert_eq!(parameter, "steps");
                assert_eq!(constraint, "[1, inf]");
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }

        let config = AnalysisConfig::default().with_exponent_grid(0.0, 5.0, 10);
        assert!(matches!(
            config.validate(),
            Err(CorrelationError::InvalidParameter { ref parameter, .. }) if parameter == "exponent_range.start"
        ));
    }

    #[test]
    fn test_rejects_non_finite_figure_alpha() {
        let config = AnalysisConfig {
            figure_alpha: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CorrelationError::InvalidParameter { ref parameter, .. }) if parameter == "figure_alpha"
        ));
    }

    #[test]
    fn test_rejects_short_fit_line() {
        let config = AnalysisConfig {
            fit_line_samples: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_output_paths() {
        let output = OutputConfig::default();
        assert_eq!(output.results_path, PathBuf::from("data/analysis_results.json"));
        assert_eq!(output.figures_dir, PathBuf::from("figures"));
        assert!(output.write_figures);
    }
}
