use anyhow::{Context, Result};
use clap::Parser;
use quadruplet_zeta::{
    figures::{build_figures, stage_figures},
    persistence::OutputBatch,
    summary::format_quadruplet_listing,
    Cli, CorrelationAnalyzer, QuadrupletDataset, ResultsFile,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    log::debug!("Parsed arguments: {:?}", args);

    let dataset = QuadrupletDataset::reference();
    let analysis_config = args.analysis_config();
    let output = args.output_config();

    // Everything is computed before the first byte is written
    let report = CorrelationAnalyzer::with_config(analysis_config.clone())
        .analyze_dataset(&dataset)
        .context("correlation analysis failed")?;
    let results = ResultsFile::new(&dataset, &report);
    let figures = if output.write_figures {
        Some(build_figures(&dataset, &analysis_config).context("building figures failed")?)
    } else {
        None
    };

    if !args.quiet {
        println!("{}", report);
        println!("\n{}", format_quadruplet_listing(dataset.positions().values()));
    }

    // Staged files are discarded if any later step fails
    let mut batch = OutputBatch::new();
    batch
        .stage_json(&output.results_path, &results)
        .with_context(|| format!("failed to write {}", output.results_path.display()))?;
    if let Some(figures) = &figures {
        stage_figures(&mut batch, &output.figures_dir, figures).with_context(|| {
            format!(
                "failed to render figures into {}",
                output.figures_dir.display()
            )
        })?;
    }
    let written = batch.commit().context("failed to publish run artifacts")?;
    log::info!("{} files written", written.len());

    if !args.quiet {
        println!("\n✓ Results saved to {}", output.results_path.display());
        for path in written.iter().filter(|p| **p != output.results_path) {
            println!("✓ Figure saved to {}", path.display());
        }
    }

    Ok(())
}
