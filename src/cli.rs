//! Command line arguments for the `quadruplet-zeta` binary.

use crate::config::{
    AnalysisConfig, OutputConfig, DEFAULT_EXPONENT_RANGE, DEFAULT_EXPONENT_STEPS,
    DEFAULT_FIGURES_DIR, DEFAULT_RESULTS_PATH,
};
use clap::Parser;
use std::path::PathBuf;

/// Flags of the analysis run
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Correlate Q47 quadruplet positions with Riemann zeta zeros", long_about = None)]
pub struct Cli {
    /// Results file (overwritten on every run)
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    pub output: PathBuf,

    /// Directory for the rendered figures and their data
    #[arg(long, default_value = DEFAULT_FIGURES_DIR)]
    pub figures_dir: PathBuf,

    /// Skip rendering figures
    #[arg(long, default_value_t = false)]
    pub no_figures: bool,

    /// Lower end of the exponent search range
    #[arg(long, default_value_t = DEFAULT_EXPONENT_RANGE.0)]
    pub alpha_min: f64,

    /// Upper end of the exponent search range
    #[arg(long, default_value_t = DEFAULT_EXPONENT_RANGE.1)]
    pub alpha_max: f64,

    /// Number of exponent candidates, endpoints included
    #[arg(long, default_value_t = DEFAULT_EXPONENT_STEPS)]
    pub steps: usize,

    /// Do not print the summary to stdout
    #[arg(long, short, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// Analysis configuration implied by the flags.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::default().with_exponent_grid(self.alpha_min, self.alpha_max, self.steps)
    }

    /// Output locations implied by the flags.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            results_path: self.output.clone(),
            figures_dir: self.figures_dir.clone(),
            write_figures: !self.no_figures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["quadruplet-zeta"]).unwrap();
        assert_eq!(cli.analysis_config(), AnalysisConfig::default());
        assert_eq!(cli.output_config(), OutputConfig::default());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "quadruplet-zeta",
            "--output",
            "out/results.json",
            "--no-figures",
            "--alpha-min",
            "2",
            "--alpha-max",
            "3.5",
            "--steps",
            "16",
            "-q",
        ])
        .unwrap();

        let config = cli.analysis_config();
        assert_eq!(config.exponent_range, (2.0, 3.5));
        assert_eq!(config.steps, 16);

        let output = cli.output_config();
        assert_eq!(output.results_path, PathBuf::from("out/results.json"));
        assert!(!output.write_figures);
        assert!(cli.quiet);
    }

    #[test]
    fn test_rejects_bad_number() {
        assert!(Cli::try_parse_from(["quadruplet-zeta", "--steps", "many"]).is_err());
    }
}
