//! Figure data for the two published plots.
//!
//! Everything a renderer needs is recomputed here from the dataset: scatter
//! points, the regression line sampled across the x range, and the bar chart of
//! quadruplet positions. The fitted quantities are derived independently of
//! [`crate::analyzer`], using the fixed display exponent from the config.
//!
//! Each figure is written as PNG and SVG through [`crate::render`], plus the
//! underlying data as JSON.

use crate::config::AnalysisConfig;
use crate::dataset::QuadrupletDataset;
use crate::errors::{CorrelationError, CorrelationResult};
use crate::math_utils::{linspace, min_max};
use crate::regression::{linear_regression, LinearRegression};
use crate::transforms::{log_transform, power_transform};
#[cfg(feature = "serde")]
use crate::render::{render_quadruplet_distribution, render_riemann_correlation, ImageFormat};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base file name of the Riemann correlation figure
pub const FIG1_STEM: &str = "fig1_riemann_correlation";
/// Base file name of the quadruplet distribution figure
pub const FIG3_STEM: &str = "fig3_quadruplet_positions";

/// A point in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// Scatter plot with its least squares line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrelationPanel {
    /// Panel title
    pub title: String,
    /// Horizontal axis label
    pub x_label: String,
    /// Vertical axis label
    pub y_label: String,
    /// Observed pairs
    pub points: Vec<Point>,
    /// Regression of y on x
    pub fit: LinearRegression,
    /// Fitted line sampled evenly between min and max x
    pub fit_line: Vec<Point>,
    /// Legend text, e.g. `r = 0.994`
    pub legend: String,
}

/// Figure 1: power transform and log-linear panels side by side
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiemannCorrelationFigure {
    /// Left panel, `n^(1/alpha)` against the zeros
    pub power_transform: CorrelationPanel,
    /// Right panel, `ln(n)` against the zeros
    pub log_linear: CorrelationPanel,
}

/// One bar of the distribution chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadrupletBar {
    /// 1-based quadruplet index
    pub k: usize,
    /// Position n
    pub position: u64,
    /// Position in billions
    pub billions: f64,
    /// Found by the new search rather than previously known
    pub newly_discovered: bool,
}

/// Figure 3: horizontal bar chart of quadruplet positions
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadrupletDistributionFigure {
    /// Chart title
    pub title: String,
    /// Horizontal axis label
    pub x_label: String,
    /// Vertical axis label
    pub y_label: String,
    /// One bar per quadruplet, k ascending
    pub bars: Vec<QuadrupletBar>,
}

const ZERO_AXIS_LABEL: &str = "gamma_k (Riemann zero)";

fn correlation_panel(
    title: &str,
    x_label: String,
    xs: Vec<f64>,
    ys: &[f64],
    samples: usize,
) -> CorrelationResult<CorrelationPanel> {
    let fit = linear_regression(&xs, ys)?;
    let (lo, hi) = min_max(&xs).ok_or_else(|| CorrelationError::InsufficientData {
        required: 1,
        actual: 0,
        operation: "correlation_panel".to_string(),
    })?;
    let fit_line = linspace(lo, hi, samples)?
        .into_iter()
        .map(|x| Point {
            x,
            y: fit.predict(x),
        })
        .collect();
    let points = xs.iter().zip(ys).map(|(&x, &y)| Point { x, y }).collect();

    Ok(CorrelationPanel {
        title: title.to_string(),
        x_label,
        y_label: ZERO_AXIS_LABEL.to_string(),
        points,
        legend: format!("r = {:.3}", fit.r),
        fit,
        fit_line,
    })
}

/// Build figure 1 from the dataset.
pub fn riemann_correlation_figure(
    dataset: &QuadrupletDataset,
    config: &AnalysisConfig,
) -> CorrelationResult<RiemannCorrelationFigure> {
    config.validate()?;
    let positions = dataset.positions().as_f64();
    let zeros = dataset.zeros().values();

    let transformed = power_transform(&positions, config.figure_alpha, "positions")?;
    let power = correlation_panel(
        "Optimal Power Transform",
        format!("n^(1/{})", config.figure_alpha),
        transformed,
        zeros,
        config.fit_line_samples,
    )?;

    let logs = log_transform(&positions, "positions")?;
    let log_linear = correlation_panel(
        "Log-Linear Fit",
        "ln(n)".to_string(),
        logs,
        zeros,
        config.fit_line_samples,
    )?;

    Ok(RiemannCorrelationFigure {
        power_transform: power,
        log_linear,
    })
}

/// Build figure 3 from the dataset.
pub fn quadruplet_distribution_figure(dataset: &QuadrupletDataset) -> QuadrupletDistributionFigure {
    let bars = dataset
        .positions()
        .values()
        .iter()
        .enumerate()
        .map(|(i, &n)| QuadrupletBar {
            k: i + 1,
            position: n,
            billions: n as f64 / 1e9,
            newly_discovered: QuadrupletDataset::is_newly_discovered(i),
        })
        .collect();

    QuadrupletDistributionFigure {
        title: "Q47 Quadruplet Distribution (n <= 2x10^9)".to_string(),
        x_label: "Position n (billions)".to_string(),
        y_label: "Quadruplet index k".to_string(),
        bars,
    }
}

/// Both figures of a run
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSet {
    /// Figure 1
    pub riemann_correlation: RiemannCorrelationFigure,
    /// Figure 3
    pub quadruplet_distribution: QuadrupletDistributionFigure,
}

/// Build every figure from the dataset.
pub fn build_figures(
    dataset: &QuadrupletDataset,
    config: &AnalysisConfig,
) -> CorrelationResult<FigureSet> {
    Ok(FigureSet {
        riemann_correlation: riemann_correlation_figure(dataset, config)?,
        quadruplet_distribution: quadruplet_distribution_figure(dataset),
    })
}

/// Stage the images and JSON data of both figures into `batch`.
///
/// Per figure the order is PNG, SVG, JSON.
#[cfg(feature = "serde")]
pub fn stage_figures(
    batch: &mut crate::persistence::OutputBatch,
    dir: &std::path::Path,
    figures: &FigureSet,
) -> CorrelationResult<()> {
    for format in ImageFormat::ALL {
        let path = dir.join(format!("{}.{}", FIG1_STEM, format.extension()));
        batch.stage_with(&path, |temp| {
            render_riemann_correlation(&figures.riemann_correlation, temp, format)
        })?;
    }
    batch.stage_json(&dir.join(format!("{}.json", FIG1_STEM)), &figures.riemann_correlation)?;

    for format in ImageFormat::ALL {
        let path = dir.join(format!("{}.{}", FIG3_STEM, format.extension()));
        batch.stage_with(&path, |temp| {
            render_quadruplet_distribution(&figures.quadruplet_distribution, temp, format)
        })?;
    }
    batch.stage_json(
        &dir.join(format!("{}.json", FIG3_STEM)),
        &figures.quadruplet_distribution,
    )
}

/// Render both figures into `dir`, replacing earlier output.
///
/// Nothing is published unless every file renders. Returns the written paths.
#[cfg(feature = "serde")]
pub fn write_figures(
    dir: &std::path::Path,
    dataset: &QuadrupletDataset,
    config: &AnalysisConfig,
) -> CorrelationResult<Vec<std::path::PathBuf>> {
    let figures = build_figures(dataset, config)?;
    let mut batch = crate::persistence::OutputBatch::new();
    stage_figures(&mut batch, dir, &figures)?;
    let written = batch.commit()?;
    log::info!("{} figure files saved to {}", written.len(), dir.display());
    Ok(written)
}
