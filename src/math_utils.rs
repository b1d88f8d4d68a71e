//! Mathematical utility functions and constants for the correlation analysis.
//!
//! Small closed-form helpers shared by the transforms, the correlation and
//! regression routines, and the exponent grid.

use crate::errors::{CorrelationError, CorrelationResult};

/// Numerical constants
pub mod constants {
    /// Default epsilon for floating point comparisons
    pub const DEFAULT_EPSILON: f64 = 1e-12;
}

/// Safe floating point comparison functions
pub mod float_ops {
    use super::constants::DEFAULT_EPSILON;

    /// Check if two floating point numbers are approximately equal
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        approx_eq_eps(a, b, DEFAULT_EPSILON)
    }

    /// Check if two floating point numbers are approximately equal with custom epsilon
    #[inline]
    pub fn approx_eq_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Clamp a correlation coefficient into [-1, 1].
    ///
    /// Rounding in the sums can push |r| a few ulps past one.
    #[inline]
    pub fn clamp_correlation(r: f64) -> f64 {
        r.clamp(-1.0, 1.0)
    }
}

/// Arithmetic mean. Returns NaN for empty input.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Minimum and maximum of a slice in one pass.
///
/// Returns `None` for empty input.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
        (lo.min(x), hi.max(x))
    }))
}

/// Centered second moments of a paired sample.
///
/// Returns `(sxx, syy, sxy)`: the sums of squared deviations of `x` and `y`
/// from their means and the sum of cross products. Callers validate lengths.
pub fn centered_sums(x: &[f64], y: &[f64]) -> (f64, f64, f64) {
    let mean_x = mean(x);
    let mean_y = mean(y);

    x.iter()
        .zip(y)
        .fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (&xi, &yi)| {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
        })
}

/// Evenly spaced samples over `[start, stop]`, both endpoints inclusive.
///
/// Each sample is `start + i * step` and the last one is pinned to `stop`, so
/// the grid is reproducible element for element. `num == 1` yields `[start]`.
///
/// # Example
/// ```rust
/// use quadruplet_zeta::math_utils::linspace;
///
/// let grid = linspace(1.0, 5.0, 5).unwrap();
/// assert_eq!(grid, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn linspace(start: f64, stop: f64, num: usize) -> CorrelationResult<Vec<f64>> {
    if num == 0 {
        return Err(CorrelationError::InvalidParameter {
            parameter: "num".to_string(),
            value: 0.0,
            constraint: "at least 1 sample".to_string(),
        });
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(CorrelationError::InvalidParameter {
            parameter: "linspace bounds".to_string(),
            value: if start.is_finite() { stop } else { start },
            constraint: "finite".to_string(),
        });
    }
    if num == 1 {
        return Ok(vec![start]);
    }

    let step = (stop - start) / (num - 1) as f64;
    let mut grid: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
    grid[num - 1] = stop;
    Ok(grid)
}
