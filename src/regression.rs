//! Ordinary least squares line fitting.
//!
//! Closed-form simple regression over centered sums, plus the log-linear fit of
//! zeros on `ln(position)`.

use crate::errors::{
    validate_all_finite, validate_data_length, validate_equal_length, CorrelationError,
    CorrelationResult,
};
use crate::math_utils::{centered_sums, float_ops, mean};
use crate::statistical_tests::{ensure_non_constant, pearson_correlation_named, two_sided_t_p_value};
use crate::transforms::log_transform;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fitted line `y = slope * x + intercept` with its correlation statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearRegression {
    /// Estimated slope
    pub slope: f64,
    /// Estimated intercept
    pub intercept: f64,
    /// Pearson correlation of x and y
    pub r: f64,
    /// Two-sided p-value for H0: slope = 0
    pub p_value: f64,
    /// Standard error of the slope
    pub std_err: f64,
    /// Standard error of the intercept
    pub intercept_std_err: f64,
}

impl LinearRegression {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Least squares regression of `y` on `x`.
///
/// # Algorithm
/// - Center both series on their means before summing
/// - slope = Sxy / Sxx, intercept = mean(y) - slope * mean(x)
/// - r = Sxy / sqrt(Sxx * Syy); t = r * sqrt(df / (1 - r²)), df = n - 2
///
/// # Errors
/// - `LengthMismatch` for unequal lengths
/// - `InsufficientData` when n < 3
/// - `DegenerateRange` when `x` is constant
///
/// # Example
/// ```rust
/// use quadruplet_zeta::regression::linear_regression;
///
/// let fit = linear_regression(&[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.intercept - 1.0).abs() < 1e-12);
/// ```
pub fn linear_regression(x: &[f64], y: &[f64]) -> CorrelationResult<LinearRegression> {
    const OP: &str = "linear_regression";
    validate_equal_length(x, y, OP)?;
    validate_data_length(x, 3, OP)?;
    validate_all_finite(x, "x", OP)?;
    validate_all_finite(y, "y", OP)?;
    ensure_non_constant(x, "x", OP)?;

    let n = x.len() as f64;
    let (sxx, syy, sxy) = centered_sums(x, y);
    let mean_x = mean(x);
    let mean_y = mean(y);

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(CorrelationError::InvalidParameter {
            parameter: "regression coefficients".to_string(),
            value: slope,
            constraint: "finite".to_string(),
        });
    }

    // A constant response has no correlation to speak of
    let r = if syy == 0.0 {
        0.0
    } else {
        float_ops::clamp_correlation(sxy / (sxx * syy).sqrt())
    };

    let df = n - 2.0;
    let one_minus_r2 = 1.0 - r * r;
    let (p_value, std_err) = if one_minus_r2 <= 0.0 {
        (0.0, 0.0)
    } else {
        let t = r * (df / one_minus_r2).sqrt();
        let std_err = (one_minus_r2 * syy / sxx / df).sqrt();
        (two_sided_t_p_value(t, df)?, std_err)
    };
    let intercept_std_err = std_err * (sxx / n + mean_x * mean_x).sqrt();

    Ok(LinearRegression {
        slope,
        intercept,
        r,
        p_value,
        std_err,
        intercept_std_err,
    })
}

/// Outcome of regressing zeros on `ln(position)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogLinearFit {
    /// Pearson correlation between ln(position) and the zeros
    pub r: f64,
    /// Two-sided p-value of `r`
    pub p_value: f64,
    /// OLS slope of zeros on ln(position)
    pub slope: f64,
    /// OLS intercept of zeros on ln(position)
    pub intercept: f64,
}

/// Fit `zero ≈ slope * ln(position) + intercept`.
///
/// Every position must be strictly positive.
pub fn log_linear_fit(positions: &[f64], zeros: &[f64]) -> CorrelationResult<LogLinearFit> {
    validate_equal_length(positions, zeros, "log_linear_fit")?;
    let log_positions = log_transform(positions, "positions")?;

    let correlation = pearson_correlation_named(&log_positions, zeros, "ln(positions)", "zeros")?;
    let line = linear_regression(&log_positions, zeros)?;
    log::debug!(
        "log-linear fit: slope={:.6} intercept={:.6} r={:.6}",
        line.slope,
        line.intercept,
        correlation.r
    );

    Ok(LogLinearFit {
        r: correlation.r,
        p_value: correlation.p_value,
        slope: line.slope,
        intercept: line.intercept,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v - 1.0).collect();
        let fit = linear_regression(&x, &y).unwrap();

        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept + 1.0).abs() < 1e-12);
        assert!((fit.r - 1.0).abs() < 1e-12);
        assert!(fit.std_err < 1e-6);
        assert!((fit.predict(10.0) - 19.0).abs() < 1e-10);
    }

    #[test]
    fn test_noisy_line_statistics() {
        // Same pairs as the r = 0.8 Pearson case: slope = 0.8, intercept = 0.6
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 3.0, 2.0, 5.0, 4.0];
        let fit = linear_regression(&x, &y).unwrap();

        assert!((fit.slope - 0.8).abs() < 1e-12);
        assert!((fit.intercept - 0.6).abs() < 1e-12);
        assert!((fit.r - 0.8).abs() < 1e-12);
        // se = sqrt((1 - 0.64) * 10 / 10 / 3) = 0.34641
        assert!((fit.std_err - 0.34641).abs() < 1e-5);
        assert!((fit.intercept_std_err - 0.34641 * 11.0_f64.sqrt()).abs() < 1e-4);
        assert!((fit.p_value - 0.10408).abs() < 1e-4);
    }

    #[test]
    fn test_regression_requires_three_points() {
        assert!(matches!(
            linear_regression(&[1.0, 2.0], &[1.0, 2.0]),
            Err(CorrelationError::InsufficientData { required: 3, .. })
        ));
    }

    #[test]
    fn test_regression_constant_predictor() {
        assert!(matches!(
            linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(CorrelationError::DegenerateRange { .. })
        ));
    }

    #[test]
    fn test_log_linear_fit_on_exponential_data() {
        // zero = 3 ln(n) + 2 exactly
        let positions = [1.0, 10.0, 100.0, 1000.0];
        let zeros: Vec<f64> = positions.iter().map(|p: &f64| 3.0 * p.ln() + 2.0).collect();
        let fit = log_linear_fit(&positions, &zeros).unwrap();

        assert!((fit.slope - 3.0).abs() < 1e-10);
        assert!((fit.intercept - 2.0).abs() < 1e-10);
        assert!((fit.r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_linear_fit_rejects_non_positive() {
        match log_linear_fit(&[5.0, 0.0, 9.0], &[1.0, 2.0, 3.0]) {
            Err(CorrelationError::InvalidDomain {
                sequence, index, ..
            }) => {
                assert_eq!(sequence, "positions");
                assert_eq!(index, 1);
            }
            other => panic!("Expected InvalidDomain, got {:?}", other),
        }
    }
}
