//! Exhaustive grid search for the power transform exponent.
//!
//! Candidates are visited in ascending order and a candidate replaces the
//! running best only when its correlation is strictly greater, so among equal
//! maxima the smallest exponent wins.

use crate::errors::{
    validate_equal_length, validate_parameter, validate_positive_parameter,
    validate_strictly_positive, CorrelationResult,
};
use crate::math_utils::linspace;
use crate::statistical_tests::pearson_correlation_named;
use crate::transforms::power_transform;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Best exponent found by [`search_optimal_exponent`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExponentSearchResult {
    /// Exponent alpha of the winning transform `x^(1/alpha)`
    pub best_alpha: f64,
    /// Pearson r at `best_alpha`
    pub best_r: f64,
    /// Grid index of the winner, `None` when no candidate beat the initial r = 0
    pub best_index: Option<usize>,
    /// Number of candidates evaluated
    pub candidates: usize,
}

/// Scan `steps` equally spaced exponents over `exponent_range` (inclusive)
/// and keep the one maximising Pearson r between `positions^(1/alpha)` and
/// `zeros`.
///
/// The running best starts at `(exponent_range.0, 0.0)`; if no candidate
/// produces a positive correlation that starting point is returned.
///
/// # Errors
/// - `InvalidDomain` if any position is <= 0
/// - `InvalidParameter` for `steps == 0`, a reversed range, or a non-positive bound
/// - any error of the correlation itself (length mismatch, constant input)
pub fn search_optimal_exponent(
    positions: &[f64],
    zeros: &[f64],
    exponent_range: (f64, f64),
    steps: usize,
) -> CorrelationResult<ExponentSearchResult> {
    const OP: &str = "search_optimal_exponent";
    validate_equal_length(positions, zeros, OP)?;
    validate_strictly_positive(positions, "positions", OP)?;

    let (start, end) = exponent_range;
    validate_positive_parameter(start, "exponent_range.start")?;
    validate_positive_parameter(end, "exponent_range.end")?;
    validate_parameter(start, 0.0, end, "exponent_range.start")?;
    let grid = linspace(start, end, steps)?;

    let mut best_alpha = start;
    let mut best_r = 0.0;
    let mut best_index = None;

    for (i, &alpha) in grid.iter().enumerate() {
        let transformed = power_transform(positions, alpha, "positions")?;
        let r = pearson_correlation_named(&transformed, zeros, "positions^(1/alpha)", "zeros")?.r;
        if r > best_r {
            best_r = r;
            best_alpha = alpha;
            best_index = Some(i);
        }
    }

    if best_index.is_none() {
        log::warn!(
            "no exponent in [{}, {}] gave a positive correlation; keeping alpha = {}",
            start,
            end,
            best_alpha
        );
    }
    log::debug!(
        "exponent search: {} candidates, best alpha={:.6} r={:.6}",
        grid.len(),
        best_alpha,
        best_r
    );

    Ok(ExponentSearchResult {
        best_alpha,
        best_r,
        best_index,
        candidates: grid.len(),
    })
}
