//! Elimination configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::{Scalar, SquareMatrix};

/// Pivot selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pivoting {
    /// Pick the candidate with the greatest raw value, starting from a zero baseline.
    ///
    /// Known defect: candidates are compared by signed value rather than
    /// magnitude, so a column whose largest-magnitude entry is negative is never
    /// pivoted on it. When no candidate exceeds zero the current row is kept.
    ///
    /// Not bit-for-bit compatible with the historical routine: that one scanned
    /// the whole column (rows `0..n`) and fell back to row 0, which re-selects
    /// already eliminated rows. Here only rows `k..n` are candidates and the
    /// fallback is row `k`.
    #[default]
    Legacy,
    /// Standard partial pivoting: pick the candidate with the largest `|U(l,k)|`.
    Magnitude,
}

impl Pivoting {
    /// Select the pivot row for column `k` among rows `k..n` of `u`.
    ///
    /// Only strictly greater candidates replace the current choice, so ties keep
    /// the upper row.
    pub fn select<T, M>(self, u: &M, k: usize) -> usize
    where
        T: Scalar,
        M: SquareMatrix<T>,
    {
        let mut row = k;
        let mut max = T::zero();
        for l in k..u.dim() {
            let candidate = match self {
                Pivoting::Legacy => u[(l, k)],
                Pivoting::Magnitude => u[(l, k)].abs(),
            };
            if candidate > max {
                row = l;
                max = candidate;
            }
        }
        row
    }
}

/// Gaussian elimination configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeConfig {
    /// Pivot selection strategy
    pub pivoting: Pivoting,
    /// Pivots with magnitude at or below this value are rejected as singular
    pub tolerance: f64,
    /// Log factors at 1, every elimination step at 2 (0 = no output)
    pub verbosity: usize,
}

impl Default for GeConfig {
    fn default() -> Self {
        Self {
            pivoting: Pivoting::Legacy,
            tolerance: 1e-30,
            verbosity: 0,
        }
    }
}

impl GeConfig {
    /// Set the pivot selection strategy
    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }

    /// Set the singularity tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the logging verbosity
    pub fn with_verbosity(mut self, verbosity: usize) -> Self {
        self.verbosity = verbosity;
        self
    }
}
