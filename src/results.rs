//! # Persisted Results
//!
//! The flat structure written to the results file at the end of a run. Field
//! names and order are part of the file format.

use crate::analyzer::AnalysisReport;
use crate::dataset::QuadrupletDataset;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Headline numbers of one analysis run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisSummary {
    /// Pearson r of the min–max scaled sequences
    pub scaled_r: f64,
    /// Winning power transform exponent
    pub optimal_alpha: f64,
    /// Pearson r at the winning exponent
    pub optimal_r: f64,
    /// Pearson r between ln(n) and the zeros
    pub log_linear_r: f64,
    /// Effective modulus e^alpha
    pub q_eff: f64,
}

impl From<&AnalysisReport> for AnalysisSummary {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            scaled_r: report.scaled_r(),
            optimal_alpha: report.optimal_alpha(),
            optimal_r: report.optimal_r(),
            log_linear_r: report.log_linear_r(),
            q_eff: report.effective_modulus(),
        }
    }
}

/// Complete results file: the inputs alongside the analysis summary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultsFile {
    /// Quadruplet positions
    pub quadruplets: Vec<u64>,
    /// Riemann zero ordinates
    pub riemann_zeros: Vec<f64>,
    /// Summary of the run
    pub analysis: AnalysisSummary,
}

impl ResultsFile {
    /// Bundle a dataset with the report computed from it.
    pub fn new(dataset: &QuadrupletDataset, report: &AnalysisReport) -> Self {
        Self {
            quadruplets: dataset.positions().values().to_vec(),
            riemann_zeros: dataset.zeros().values().to_vec(),
            analysis: AnalysisSummary::from(report),
        }
    }
}
