//! Raster and vector rendering of the figure data.
//!
//! Both figures are drawn through one backend-generic routine each, so the PNG
//! and SVG outputs share layout, colours and legends.

use crate::errors::{CorrelationError, CorrelationResult};
use crate::figures::{CorrelationPanel, QuadrupletDistributionFigure, RiemannCorrelationFigure};
use crate::math_utils::min_max;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Image encodings written for every figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Raster image
    Png,
    /// Vector image
    Svg,
}

impl ImageFormat {
    /// Every supported format, raster first
    pub const ALL: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Svg];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

const FIG1_SIZE: (u32, u32) = (1200, 500);
const FIG3_SIZE: (u32, u32) = (1000, 600);

const KNOWN_COLOR: RGBColor = RGBColor(0x2E, 0x86, 0xAB);
const NEW_COLOR: RGBColor = RGBColor(0x28, 0xA7, 0x45);
const FIT_COLOR: RGBColor = RED;

const BAR_HALF_HEIGHT: f64 = 0.35;
const MARKER_RADIUS: i32 = 6;

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

fn render_error<E>(figure: &str, path: &Path, err: DrawingAreaErrorKind<E>) -> CorrelationError
where
    E: std::error::Error + Send + Sync,
{
    CorrelationError::RenderError {
        figure: figure.to_string(),
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Draw figure 1 (power transform and log-linear panels) to `path`.
///
/// The raster encoder picks its codec from the extension, so `path` must end
/// in [`ImageFormat::extension`].
pub fn render_riemann_correlation(
    figure: &RiemannCorrelationFigure,
    path: &Path,
    format: ImageFormat,
) -> CorrelationResult<()> {
    const NAME: &str = "riemann correlation figure";
    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, FIG1_SIZE).into_drawing_area();
            draw_riemann_correlation(&root, figure)
                .and_then(|()| root.present())
                .map_err(|e| render_error(NAME, path, e))
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, FIG1_SIZE).into_drawing_area();
            draw_riemann_correlation(&root, figure)
                .and_then(|()| root.present())
                .map_err(|e| render_error(NAME, path, e))
        }
    }
}

/// Draw figure 3 (quadruplet position bar chart) to `path`.
pub fn render_quadruplet_distribution(
    figure: &QuadrupletDistributionFigure,
    path: &Path,
    format: ImageFormat,
) -> CorrelationResult<()> {
    const NAME: &str = "quadruplet distribution figure";
    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, FIG3_SIZE).into_drawing_area();
            draw_quadruplet_distribution(&root, figure)
                .and_then(|()| root.present())
                .map_err(|e| render_error(NAME, path, e))
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, FIG3_SIZE).into_drawing_area();
            draw_quadruplet_distribution(&root, figure)
                .and_then(|()| root.present())
                .map_err(|e| render_error(NAME, path, e))
        }
    }
}

fn draw_riemann_correlation<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &RiemannCorrelationFigure,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));
    draw_correlation_panel(&panels[0], &figure.power_transform, KNOWN_COLOR)?;
    draw_correlation_panel(&panels[1], &figure.log_linear, NEW_COLOR)?;
    Ok(())
}

/// Axis range covering `values` with 5% padding on both sides.
fn padded_range(values: &[f64]) -> Range<f64> {
    match min_max(values) {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * 0.05;
            (lo - pad)..(hi + pad)
        }
        Some((lo, _)) => (lo - 1.0)..(lo + 1.0),
        None => 0.0..1.0,
    }
}

fn draw_correlation_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &CorrelationPanel,
    color: RGBColor,
) -> DrawResult<DB> {
    let xs: Vec<f64> = panel.points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = panel
        .points
        .iter()
        .chain(&panel.fit_line)
        .map(|p| p.y)
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(padded_range(&xs), padded_range(&ys))?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .draw()?;

    // Dashed fit: every other segment between consecutive samples
    let dashes = panel.fit_line.windows(2).step_by(2).map(|w| {
        PathElement::new(
            vec![(w[0].x, w[0].y), (w[1].x, w[1].y)],
            FIT_COLOR.stroke_width(2),
        )
    });
    chart
        .draw_series(dashes)?
        .label(panel.legend.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FIT_COLOR.stroke_width(2)));

    chart.draw_series(
        panel
            .points
            .iter()
            .map(|p| Circle::new((p.x, p.y), MARKER_RADIUS, color.filled())),
    )?;
    chart.draw_series(
        panel
            .points
            .iter()
            .map(|p| Circle::new((p.x, p.y), MARKER_RADIUS, BLACK.stroke_width(1))),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}

fn draw_quadruplet_distribution<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &QuadrupletDistributionFigure,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let count = figure.bars.len();
    let widest = figure.bars.iter().map(|b| b.billions).fold(0.0, f64::max);
    let x_max = if widest > 0.0 { widest * 1.05 } else { 1.0 };
    // k = 1 is drawn at the top
    let y_top = count as f64 + 1.0;
    let row = |k: usize| y_top - k as f64;
    let k_label = |y: &f64| {
        let k = (y_top - y).round();
        if (y_top - y - k).abs() < 1e-6 && k >= 1.0 && k <= count as f64 {
            format!("{}", k as usize)
        } else {
            String::new()
        }
    };

    let mut chart = ChartBuilder::on(root)
        .caption(&figure.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_top)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(count + 2)
        .y_label_formatter(&k_label)
        .x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .draw()?;

    for (newly_discovered, label, color) in [
        (true, "Newly discovered", NEW_COLOR),
        (false, "Previously known", KNOWN_COLOR),
    ] {
        let bars = figure
            .bars
            .iter()
            .filter(|b| b.newly_discovered == newly_discovered)
            .map(|b| {
                let y = row(b.k);
                Rectangle::new(
                    [(0.0, y - BAR_HALF_HEIGHT), (b.billions, y + BAR_HALF_HEIGHT)],
                    color.filled(),
                )
            });
        chart
            .draw_series(bars)?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart.draw_series(figure.bars.iter().map(|b| {
        let y = row(b.k);
        Rectangle::new(
            [(0.0, y - BAR_HALF_HEIGHT), (b.billions, y + BAR_HALF_HEIGHT)],
            BLACK.stroke_width(1),
        )
    }))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    Ok(())
}
