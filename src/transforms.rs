//! Elementwise sequence transforms.
//!
//! Each transform checks its domain up front and returns a fresh vector.

use crate::errors::{
    validate_all_finite, validate_data_length, validate_strictly_positive, CorrelationError,
    CorrelationResult,
};
use crate::math_utils::min_max;

/// Map each element to `(x - min) / (max - min)`.
///
/// The minimum maps to exactly 0 and the maximum to exactly 1. A constant
/// sequence is rejected with [`CorrelationError::DegenerateRange`].
///
/// # Example
/// ```rust
/// use quadruplet_zeta::transforms::min_max_scale;
///
/// let scaled = min_max_scale(&[2.0, 4.0, 6.0], "x").unwrap();
/// assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
/// ```
pub fn min_max_scale(data: &[f64], sequence: &str) -> CorrelationResult<Vec<f64>> {
    const OP: &str = "min_max_scale";
    validate_data_length(data, 1, OP)?;
    validate_all_finite(data, sequence, OP)?;

    let (lo, hi) = min_max(data).ok_or_else(|| CorrelationError::InsufficientData {
        required: 1,
        actual: 0,
        operation: OP.to_string(),
    })?;
    let range = hi - lo;
    if range == 0.0 {
        return Err(CorrelationError::DegenerateRange {
            sequence: sequence.to_string(),
            operation: OP.to_string(),
        });
    }

    Ok(data.iter().map(|&x| (x - lo) / range).collect())
}

/// Power transform `x -> x^(1/alpha)`.
///
/// Fractional powers are only defined here for strictly positive inputs.
pub fn power_transform(data: &[f64], alpha: f64, sequence: &str) -> CorrelationResult<Vec<f64>> {
    const OP: &str = "power_transform";
    if !alpha.is_finite() || alpha == 0.0 {
        return Err(CorrelationError::InvalidParameter {
            parameter: "alpha".to_string(),
            value: alpha,
            constraint: "finite and non-zero".to_string(),
        });
    }
    validate_strictly_positive(data, sequence, OP)?;
    validate_all_finite(data, sequence, OP)?;

    let exponent = 1.0 / alpha;
    Ok(data.iter().map(|&x| x.powf(exponent)).collect())
}

/// Natural logarithm of each element. Requires every element > 0.
pub fn log_transform(data: &[f64], sequence: &str) -> CorrelationResult<Vec<f64>> {
    const OP: &str = "log_transform";
    validate_strictly_positive(data, sequence, OP)?;
    validate_all_finite(data, sequence, OP)?;

    Ok(data.iter().map(|&x| x.ln()).collect())
}
