//! Core traits for dense elimination
//!
//! This module defines the abstractions the elimination kernel is written against:
//! - [`Scalar`]: Trait for the real scalar types a system can be posed in
//! - [`DenseVector`]: Indexed storage for right-hand sides and solutions
//! - [`SquareMatrix`]: Indexed square storage with row interchange and matrix-vector product

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};
use std::ops::{Index, IndexMut};

/// Trait for scalar types that can be used in elimination.
///
/// Substitution sums are accumulated in [`Scalar::Accum`], which is at least
/// as precise as the scalar itself.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (accumulates in `f64`)
/// - `f32` (accumulates in `f64`)
pub trait Scalar:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + Display + 'static
{
    /// Accumulator type used for running sums
    type Accum: Float + NumAssign + Send + Sync + Debug + 'static;

    /// Convert to the accumulator type without loss
    fn widen(self) -> Self::Accum;

    /// Round an accumulated value back to the scalar type
    fn narrow(acc: Self::Accum) -> Self;
}

impl Scalar for f64 {
    type Accum = f64;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(acc: f64) -> Self {
        acc
    }
}

impl Scalar for f32 {
    type Accum = f64;

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn narrow(acc: f64) -> Self {
        acc as f32
    }
}

/// Trait for dense vectors used as right-hand sides and solutions.
pub trait DenseVector<T: Scalar>: Clone + Index<usize, Output = T> + IndexMut<usize> {
    /// Number of entries
    fn len(&self) -> usize;

    /// Check if the vector has no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A zero vector of the same length
    fn zeros_like(&self) -> Self;
}

/// Trait for square dense matrices the elimination kernel can work on.
///
/// This abstraction lets the same kernel drive compile-time sized
/// [`Matrix`](crate::Matrix) values and runtime sized `ndarray::Array2` values.
pub trait SquareMatrix<T: Scalar>:
    Clone + Index<(usize, usize), Output = T> + IndexMut<(usize, usize)>
{
    /// Vector type produced by [`SquareMatrix::matvec`]
    type Vector: DenseVector<T>;

    /// Number of rows (and columns)
    fn dim(&self) -> usize;

    /// The identity matrix of the same dimension
    fn identity_like(&self) -> Self;

    /// Swap rows `a` and `b` in place
    fn interchange_rows(&mut self, a: usize, b: usize);

    /// Apply the matrix: y = A * v
    fn matvec(&self, v: &Self::Vector) -> Self::Vector;
}
