//! # Quadruplet / Riemann Zero Correlation
//!
//! Correlation analysis between the fifteen Q47 quadruplet positions and the
//! imaginary parts of the first fifteen non-trivial Riemann zeta zeros.
//!
//! The numeric procedure is reproducible to the digit: every transform, the
//! Pearson test and the least squares fit are explicit closed-form sums, and the
//! exponent search is a deterministic ascending grid scan.
//!
//! ## Quick Start
//!
//! ```rust
//! use quadruplet_zeta::{CorrelationAnalyzer, QuadrupletDataset};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = QuadrupletDataset::reference();
//!     let report = CorrelationAnalyzer::new().analyze_dataset(&dataset)?;
//!
//!     for fit in report.fits() {
//!         println!("{:?}: r = {:.4}, p = {:.2e}", fit.method, fit.correlation, fit.p_value);
//!     }
//!     println!("q_eff = {:.1}", report.effective_modulus());
//!     Ok(())
//! }
//! ```
//!
//! ## Analysis Methods
//!
//! - **Scaled linear**: Pearson r of the min–max normalized sequences
//! - **Power transform**: exponent alpha maximizing r between `n^(1/alpha)` and
//!   the zeros, found by exhaustive search over `[1, 5]` in 1000 steps
//! - **Log-linear**: ordinary least squares of the zeros on `ln(n)`
//!
//! ## Errors
//!
//! All guards run before the arithmetic they protect and report through
//! [`CorrelationError`]: zero-range input, too few points, and non-positive
//! values fed to a power or logarithm.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod dataset;
pub mod errors;
pub mod math_utils;
pub mod results;
pub mod transforms;

// Analysis methods
pub mod analyzer;
pub mod exponent_search;
pub mod regression;

// Presentation
pub mod cli;
pub mod figures;
#[cfg(feature = "serde")]
pub mod persistence;
pub mod render;
pub mod summary;

// Re-exports for convenience - main public API
pub use analyzer::{
    run_full_analysis, run_full_analysis_with_config, AnalysisReport, CorrelationAnalyzer,
    FitMethod, FitResult,
};
pub use cli::Cli;
pub use config::{AnalysisConfig, OutputConfig};
pub use dataset::{
    PositionSequence, QuadrupletDataset, ZeroSequence, QUADRUPLETS, RIEMANN_ZEROS,
};
pub use errors::{CorrelationError, CorrelationResult};
pub use figures::{build_figures, FigureSet};
pub use results::{AnalysisSummary, ResultsFile};

// Numeric building blocks
pub use exponent_search::{search_optimal_exponent, ExponentSearchResult};
pub use regression::{linear_regression, log_linear_fit, LinearRegression, LogLinearFit};
pub use statistical_tests::{pearson_correlation, PValueMethod, PearsonCorrelation};
pub use transforms::{log_transform, min_max_scale, power_transform};
