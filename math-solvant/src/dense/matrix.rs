//! Stack-allocated dense matrix with compile-time dimensions
//!
//! Storage is row-major `[[T; C]; R]`, so every working copy made during a
//! solve lives on the stack and copies are plain memcpys.

use super::Vector;
use crate::error::{GeError, Result};
use crate::traits::{Scalar, SquareMatrix};
use ndarray::{Array2, ArrayView2};
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

/// Dense `R x C` matrix stored row-major on the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    const NON_EMPTY: () = assert!(R > 0 && C > 0, "matrix dimensions must be non-zero");

    /// Create a zero matrix
    pub fn zeros() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// Create a matrix from its rows
    pub fn from_rows(data: [[T; C]; R]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data }
    }

    /// Create a matrix by evaluating `f(row, col)` for every entry
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut m = Self::zeros();
        for (i, row) in m.data.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = f(i, j);
            }
        }
        m
    }

    /// Number of rows
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Borrow row `i`
    pub fn row(&self, i: usize) -> &[T; C] {
        &self.data[i]
    }

    /// Borrow the underlying rows
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    /// Swap rows `a` and `b` in place
    pub fn interchange_rows(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// Transposed copy
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self.data[j][i])
    }

    /// Largest absolute entrywise difference to `other`
    pub fn max_abs_diff(&self, other: &Self) -> T {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .fold(T::zero(), |acc, (&a, &b)| acc.max((a - b).abs()))
    }

    /// Copy into an owned `ndarray` matrix
    pub fn to_array2(&self) -> Array2<T> {
        Array2::from_shape_fn((R, C), |(i, j)| self.data[i][j])
    }

    /// Copy out of an `ndarray` view, checking the shape
    pub fn from_array2(a: ArrayView2<'_, T>) -> Result<Self> {
        if a.nrows() != R {
            return Err(GeError::DimensionMismatch {
                expected: R,
                got: a.nrows(),
            });
        }
        if a.ncols() != C {
            return Err(GeError::DimensionMismatch {
                expected: C,
                got: a.ncols(),
            });
        }
        Ok(Self::from_fn(|i, j| a[(i, j)]))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create the `N x N` identity matrix
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }

    /// Check for exactly one `1` per row and column, zeros elsewhere
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; N];
        for row in &self.data {
            let mut hit = None;
            for (j, &v) in row.iter().enumerate() {
                if v == T::one() {
                    if hit.is_some() {
                        return false;
                    }
                    hit = Some(j);
                } else if v != T::zero() {
                    return false;
                }
            }
            match hit {
                Some(j) if !seen[j] => seen[j] = true,
                _ => return false,
            }
        }
        true
    }

    /// Check that no entry above the diagonal is non-zero and the diagonal is all ones
    pub fn is_unit_lower_triangular(&self) -> bool {
        (0..N).all(|i| {
            self.data[i][i] == T::one() && self.data[i][i + 1..].iter().all(|v| v.is_zero())
        })
    }

    /// Check that no entry below the diagonal is non-zero
    pub fn is_upper_triangular(&self) -> bool {
        (0..N).all(|i| self.data[i][..i].iter().all(|v| v.is_zero()))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(data: [[T; C]; R]) -> Self {
        Self::from_rows(data)
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i][j]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i][j]
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<&Vector<T, C>> for &Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: &Vector<T, C>) -> Vector<T, R> {
        let mut y = Vector::zeros();
        for (i, row) in self.data.iter().enumerate() {
            y[i] = row
                .iter()
                .zip(v.iter())
                .fold(T::zero(), |acc, (&a, &x)| acc + a * x);
        }
        y
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        &self * &v
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: &Matrix<T, K, C>) -> Matrix<T, R, C> {
        Matrix::from_fn(|i, j| {
            (0..K).fold(T::zero(), |acc, k| acc + self.data[i][k] * rhs.data[k][j])
        })
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        &self * &rhs
    }
}

impl<T: Scalar, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>12.6}", v)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

impl<T: Scalar, const N: usize> SquareMatrix<T> for Matrix<T, N, N> {
    type Vector = Vector<T, N>;

    #[inline]
    fn dim(&self) -> usize {
        N
    }

    fn identity_like(&self) -> Self {
        Self::identity()
    }

    #[inline]
    fn interchange_rows(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    fn matvec(&self, v: &Vector<T, N>) -> Vector<T, N> {
        self * v
    }
}
