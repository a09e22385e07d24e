//! Error types for Gaussian elimination.
//!
//! Every failure of the solver is reported through [`GeError`]; the happy path
//! never inspects intermediate values beyond the pivot check.

use thiserror::Error;

/// Errors that can occur while factorizing or solving a dense system.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeError {
    /// A pivot fell at or below the configured tolerance (or was not finite).
    #[error("matrix is singular or nearly singular: pivot {pivot:e} at elimination step {step}")]
    SingularMatrix {
        /// Elimination step (pivot column) where the check failed
        step: usize,
        /// Value of the rejected pivot
        pivot: f64,
    },

    /// A triangular solve met an exactly zero diagonal entry.
    #[error("triangular factor has a zero diagonal entry in row {row}")]
    ZeroDiagonal {
        /// Row holding the zero diagonal
        row: usize,
    },

    /// Operand lengths disagree with the matrix dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension required by the matrix
        expected: usize,
        /// Dimension that was supplied
        got: usize,
    },

    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The system has dimension zero.
    #[error("system has dimension zero")]
    EmptySystem,
}

/// A specialized `Result` type for elimination operations.
pub type Result<T> = std::result::Result<T, GeError>;

impl GeError {
    /// Returns `true` if the system was rejected as singular.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            GeError::SingularMatrix { .. } | GeError::ZeroDiagonal { .. }
        )
    }

    /// Returns `true` if the operands had inconsistent or invalid shapes.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            GeError::DimensionMismatch { .. } | GeError::NotSquare { .. } | GeError::EmptySystem
        )
    }
}
