//! Error types and precondition validators for the correlation analysis.
//!
//! Every guard in the numeric procedure runs before the arithmetic it protects,
//! so a malformed sequence is reported with the sequence name and operation
//! instead of surfacing later as a NaN.

use std::sync::Arc;
use thiserror::Error;

/// Error types for correlation analysis operations.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum CorrelationError {
    /// Sequence has zero range (all elements equal), so it cannot be normalized
    /// or correlated.
    #[error("Degenerate range: {sequence} is constant in {operation}")]
    DegenerateRange {
        /// Name of the offending sequence
        sequence: String,
        /// Operation that required a non-zero range
        operation: String,
    },

    /// Too few points for the requested statistic.
    #[error("Insufficient data in {operation}: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Minimum required data points
        required: usize,
        /// Actual number of data points provided
        actual: usize,
        /// Operation requiring the data
        operation: String,
    },

    /// Non-positive value fed to a power or logarithm transform.
    #[error("Invalid domain in {operation}: {sequence}[{index}] = {value} must be > 0")]
    InvalidDomain {
        /// Name of the offending sequence
        sequence: String,
        /// Index of the first offending element
        index: usize,
        /// Offending value
        value: f64,
        /// Transform that rejected the value
        operation: String,
    },

    /// Paired sequences have different lengths.
    #[error("Length mismatch in {operation}: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first sequence
        left: usize,
        /// Length of the second sequence
        right: usize,
        /// Operation requiring paired sequences
        operation: String,
    },

    /// Invalid parameter value for analysis configuration.
    #[error("Invalid parameter: {parameter} = {value}, expected {constraint}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value provided
        value: f64,
        /// Valid range or constraint description
        constraint: String,
    },

    /// Sequence contains NaN or an infinity.
    #[error("Non-finite value in {operation}: {sequence}[{index}]")]
    NonFiniteValue {
        /// Name of the offending sequence
        sequence: String,
        /// Index of the first non-finite element
        index: usize,
        /// Operation that rejected the value
        operation: String,
    },

    /// Sequence is not strictly increasing.
    #[error("{sequence} is not strictly increasing at index {index}")]
    UnsortedSequence {
        /// Name of the offending sequence
        sequence: String,
        /// First index whose element does not exceed its predecessor
        index: usize,
    },

    /// I/O operation error.
    #[error("I/O operation failed: {operation}")]
    IoError {
        /// I/O operation that failed
        operation: String,
        /// Underlying error if available
        #[source]
        source: Option<Arc<std::io::Error>>,
    },

    /// Serialization/deserialization error.
    #[error("Serialization failed ({format}): {reason}")]
    SerializationError {
        /// Format that failed (JSON)
        format: String,
        /// Underlying reason
        reason: String,
    },

    /// A figure could not be drawn or encoded.
    #[error("Rendering {figure} to {path} failed: {reason}")]
    RenderError {
        /// Figure being drawn
        figure: String,
        /// Output file
        path: String,
        /// Backend error message
        reason: String,
    },
}

/// Result type for correlation analysis operations.
pub type CorrelationResult<T> = Result<T, CorrelationError>;

impl CorrelationError {
    /// Wrap an I/O error with the operation that produced it.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        CorrelationError::IoError {
            operation: operation.into(),
            source: Some(Arc::new(source)),
        }
    }
}

/// Validates that data has sufficient length for analysis.
///
/// # Example
/// ```rust
/// use quadruplet_zeta::errors::validate_data_length;
///
/// let data = vec![1.0, 2.0, 3.0];
/// assert!(validate_data_length(&data, 2, "test").is_ok());
/// assert!(validate_data_length(&data, 5, "test").is_err());
/// ```
pub fn validate_data_length(
    data: &[f64],
    min_required: usize,
    operation: &str,
) -> CorrelationResult<()> {
    if data.len() < min_required {
        Err(CorrelationError::InsufficientData {
            required: min_required,
            actual: data.len(),
            operation: operation.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Validates that two paired sequences have the same length.
pub fn validate_equal_length(a: &[f64], b: &[f64], operation: &str) -> CorrelationResult<()> {
    if a.len() != b.len() {
        return Err(CorrelationError::LengthMismatch {
            left: a.len(),
            right: b.len(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Validates that a parameter is within expected bounds (inclusive).
///
/// # Example
/// ```rust
/// use quadruplet_zeta::errors::validate_parameter;
///
/// assert!(validate_parameter(2.5, 1.0, 5.0, "alpha").is_ok());
/// assert!(validate_parameter(7.0, 1.0, 5.0, "alpha").is_err());
/// ```
pub fn validate_parameter(value: f64, min: f64, max: f64, name: &str) -> CorrelationResult<()> {
    if value.is_nan() {
        return Err(CorrelationError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: "must not be NaN".to_string(),
        });
    }

    if value < min || value > max {
        Err(CorrelationError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: format!("[{}, {}]", min, max),
        })
    } else {
        Ok(())
    }
}

/// Validates that a parameter is finite and strictly positive.
///
/// Exponents and grid bounds feed fractional powers, so zero is rejected too.
pub fn validate_positive_parameter(value: f64, name: &str) -> CorrelationResult<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(CorrelationError::InvalidParameter {
        parameter: name.to_string(),
        value,
        constraint: "finite and > 0".to_string(),
    })
}

/// Validates that all values in a slice are finite.
///
/// Returns on the first NaN or infinity.
pub fn validate_all_finite(data: &[f64], sequence: &str, operation: &str) -> CorrelationResult<()> {
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(CorrelationError::NonFiniteValue {
            sequence: sequence.to_string(),
            index,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Validates that every element is strictly positive.
///
/// Required before fractional powers and logarithms.
pub fn validate_strictly_positive(
    data: &[f64],
    sequence: &str,
    operation: &str,
) -> CorrelationResult<()> {
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, &v)| v.is_nan() || v <= 0.0) {
        return Err(CorrelationError::InvalidDomain {
            sequence: sequence.to_string(),
            index,
            value,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Validates that a sequence is sorted ascending without repeats.
pub fn validate_strictly_increasing(data: &[f64], sequence: &str) -> CorrelationResult<()> {
    if let Some(i) = data.windows(2).position(|w| !(w[1] > w[0])) {
        return Err(CorrelationError::UnsortedSequence {
            sequence: sequence.to_string(),
            index: i + 1,
        });
    }
    Ok(())
}
