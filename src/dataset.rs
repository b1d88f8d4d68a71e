//! # Fixed Input Data
//!
//! The fifteen Q47 quadruplet positions and the imaginary parts of the first
//! fifteen non-trivial Riemann zeta zeros, paired by index.

use crate::errors::{
    validate_all_finite, validate_strictly_increasing, validate_strictly_positive,
    CorrelationError, CorrelationResult,
};

/// Number of paired observations in the reference dataset.
pub const DATASET_LEN: usize = 15;

/// Q47 quadruplet positions.
pub const QUADRUPLETS: [u64; DATASET_LEN] = [
    23159557, 117309848, 136584738, 218787064, 411784485, 423600750, 523331634, 640399031,
    987980498, 1163461515, 1370439187, 1643105964, 1691581855, 1975860550, 1996430175,
];

/// First fifteen Riemann zeta zeros (imaginary parts).
pub const RIEMANN_ZEROS: [f64; DATASET_LEN] = [
    14.134725, 21.022040, 25.010858, 30.424876, 32.935062, 37.586178, 40.918720, 43.327073,
    48.005151, 49.773832, 52.970321, 56.446248, 59.347044, 60.831779, 65.112544,
];

/// 0-based indices of quadruplets found by the new search (the rest were known).
pub const NEWLY_DISCOVERED: [usize; 5] = [1, 2, 3, 13, 14];

/// Modulus q of the quadruplet family; only used for the q/3 comparison.
pub const REFERENCE_MODULUS: f64 = 47.0;

/// Strictly increasing sequence of positive integer positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSequence(Vec<u64>);

impl PositionSequence {
    /// Validate and wrap a position sequence.
    pub fn try_new(values: Vec<u64>) -> CorrelationResult<Self> {
        let as_f64: Vec<f64> = values.iter().map(|&n| n as f64).collect();
        validate_strictly_positive(&as_f64, "positions", "PositionSequence::try_new")?;
        if let Some(i) = values.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CorrelationError::UnsortedSequence {
                sequence: "positions".to_string(),
                index: i + 1,
            });
        }
        Ok(Self(values))
    }

    /// Raw integer positions.
    pub fn values(&self) -> &[u64] {
        &self.0
    }

    /// Positions as doubles for the numeric procedure.
    pub fn as_f64(&self) -> Vec<f64> {
        self.0.iter().map(|&n| n as f64).collect()
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Strictly increasing sequence of positive zeta zero ordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroSequence(Vec<f64>);

impl ZeroSequence {
    /// Validate and wrap a zero sequence.
    pub fn try_new(values: Vec<f64>) -> CorrelationResult<Self> {
        validate_all_finite(&values, "zeros", "ZeroSequence::try_new")?;
        validate_strictly_positive(&values, "zeros", "ZeroSequence::try_new")?;
        validate_strictly_increasing(&values, "zeros")?;
        Ok(Self(values))
    }

    /// Zero ordinates.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Number of zeros.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Positions paired index-by-index with zeta zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrupletDataset {
    positions: PositionSequence,
    zeros: ZeroSequence,
}

impl QuadrupletDataset {
    /// Pair two validated sequences. Lengths must match.
    pub fn new(positions: PositionSequence, zeros: ZeroSequence) -> CorrelationResult<Self> {
        if positions.len() != zeros.len() {
            return Err(CorrelationError::LengthMismatch {
                left: positions.len(),
                right: zeros.len(),
                operation: "QuadrupletDataset::new".to_string(),
            });
        }
        Ok(Self { positions, zeros })
    }

    /// The hardcoded Q47 / Riemann zero dataset.
    pub fn reference() -> Self {
        Self {
            positions: PositionSequence(QUADRUPLETS.to_vec()),
            zeros: ZeroSequence(RIEMANN_ZEROS.to_vec()),
        }
    }

    /// Quadruplet positions.
    pub fn positions(&self) -> &PositionSequence {
        &self.positions
    }

    /// Zeta zero ordinates.
    pub fn zeros(&self) -> &ZeroSequence {
        &self.zeros
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.zeros.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.zeros.is_empty()
    }

    /// Whether the quadruplet at 0-based `index` belongs to the newly found set.
    pub fn is_newly_discovered(index: usize) -> bool {
        NEWLY_DISCOVERED.contains(&index)
    }
}
