//! Forward and backward substitution for triangular systems
//!
//! Running sums are accumulated in [`Scalar::Accum`] and rounded back to `T`
//! once per entry.

use crate::dense::{Matrix, Vector};
use crate::error::{GeError, Result};
use crate::traits::{DenseVector, Scalar, SquareMatrix};
use num_traits::Zero;

/// Solve `L y = bb` for lower-triangular `L`.
///
/// `L` need not have a unit diagonal; every diagonal entry is divided out.
/// Entries above the diagonal are never read. `y` is left untouched when an
/// error is returned.
pub fn forward_substitute<T: Scalar, const N: usize>(
    bb: &Vector<T, N>,
    l: &Matrix<T, N, N>,
    y: &mut Vector<T, N>,
) -> Result<()> {
    forward::<T, Matrix<T, N, N>>(bb, l, y)
}

/// Solve `U x = y` for upper-triangular `U`.
///
/// Entries below the diagonal are never read. `x` is left untouched when an
/// error is returned.
pub fn backward_substitute<T: Scalar, const N: usize>(
    y: &Vector<T, N>,
    u: &Matrix<T, N, N>,
    x: &mut Vector<T, N>,
) -> Result<()> {
    backward::<T, Matrix<T, N, N>>(y, u, x)
}

pub(crate) fn forward<T, M>(bb: &M::Vector, l: &M, y: &mut M::Vector) -> Result<()>
where
    T: Scalar,
    M: SquareMatrix<T>,
{
    let n = l.dim();
    check_len::<T, M>(bb, n)?;
    check_len::<T, M>(y, n)?;
    check_diagonal::<T, M>(l)?;

    for j in 0..n {
        let mut sum = T::Accum::zero();
        for k in 0..j {
            sum += y[k].widen() * l[(j, k)].widen();
        }
        let diag = l[(j, j)];
        y[j] = T::narrow((bb[j].widen() - sum) / diag.widen());
    }
    Ok(())
}

pub(crate) fn backward<T, M>(y: &M::Vector, u: &M, x: &mut M::Vector) -> Result<()>
where
    T: Scalar,
    M: SquareMatrix<T>,
{
    let n = u.dim();
    check_len::<T, M>(y, n)?;
    check_len::<T, M>(x, n)?;
    check_diagonal::<T, M>(u)?;

    for j in (0..n).rev() {
        let mut sum = T::Accum::zero();
        for k in (j + 1)..n {
            sum += x[k].widen() * u[(j, k)].widen();
        }
        let diag = u[(j, j)];
        x[j] = T::narrow((y[j].widen() - sum) / diag.widen());
    }
    Ok(())
}

fn check_diagonal<T: Scalar, M: SquareMatrix<T>>(m: &M) -> Result<()> {
    match (0..m.dim()).find(|&j| m[(j, j)].is_zero()) {
        Some(row) => Err(GeError::ZeroDiagonal { row }),
        None => Ok(()),
    }
}

#[inline]
fn check_len<T: Scalar, M: SquareMatrix<T>>(v: &M::Vector, n: usize) -> Result<()> {
    if v.len() != n {
        return Err(GeError::DimensionMismatch {
            expected: n,
            got: v.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_forward_unit_lower() {
        let l = Matrix::from_rows([[1.0_f64, 0.0, 0.0], [0.5, 1.0, 0.0], [0.25, 1.5, 1.0]]);
        let bb = Vector::from([24.0, 10.0, 4.0]);
        let mut y = Vector::zeros();

        forward_substitute(&bb, &l, &mut y).expect("forward substitution should succeed");

        assert_relative_eq!(y[0], 24.0, epsilon = 1e-12);
        assert_relative_eq!(y[1], -2.0, epsilon = 1e-12);
        assert_relative_eq!(y[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_general_diagonal() {
        let l = Matrix::from_rows([[2.0_f64, 0.0], [1.0, 4.0]]);
        let bb = Vector::from([2.0, 9.0]);
        let mut y = Vector::zeros();

        forward_substitute(&bb, &l, &mut y).expect("forward substitution should succeed");

        assert_relative_eq!(y[0], 1.0);
        assert_relative_eq!(y[1], 2.0);
    }

    #[test]
    fn test_forward_ignores_upper_part() {
        let l = Matrix::from_rows([[1.0_f64, 99.0], [3.0, 1.0]]);
        let bb = Vector::from([1.0, 5.0]);
        let mut y = Vector::zeros();

        forward_substitute(&bb, &l, &mut y).expect("forward substitution should succeed");

        assert_relative_eq!(y[0], 1.0);
        assert_relative_eq!(y[1], 2.0);
    }

    #[test]
    fn test_backward_upper() {
        let u = Matrix::from_rows([[8.0_f64, 7.0, 9.0], [0.0, -0.5, -1.5], [0.0, 0.0, 1.0]]);
        let y = Vector::from([24.0, -2.0, 1.0]);
        let mut x = Vector::zeros();

        backward_substitute(&y, &u, &mut x).expect("backward substitution should succeed");

        for i in 0..3 {
            assert_relative_eq!(x[i], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_single_entry() {
        let m = Matrix::from_rows([[4.0_f32]]);
        let b = Vector::from([2.0_f32]);
        let mut out = Vector::zeros();

        forward_substitute(&b, &m, &mut out).expect("forward substitution should succeed");
        assert_relative_eq!(out[0], 0.5);

        backward_substitute(&b, &m, &mut out).expect("backward substitution should succeed");
        assert_relative_eq!(out[0], 0.5);
    }

    #[test]
    fn test_zero_diagonal_is_reported() {
        let u = Matrix::from_rows([[1.0_f64, 2.0], [0.0, 0.0]]);
        let y = Vector::from([1.0, 1.0]);
        let mut x = Vector::zeros();

        let err = backward_substitute(&y, &u, &mut x).unwrap_err();
        assert_eq!(err, GeError::ZeroDiagonal { row: 1 });
    }

    #[test]
    fn test_output_untouched_on_zero_diagonal() {
        // Row 0 would be written before the zero in row 2 is reached
        let l = Matrix::from_rows([[1.0_f64, 0.0, 0.0], [2.0, 1.0, 0.0], [3.0, 4.0, 0.0]]);
        let bb = Vector::from([1.0, 2.0, 3.0]);
        let mut y = Vector::from([7.0, 7.0, 7.0]);

        let err = forward_substitute(&bb, &l, &mut y).unwrap_err();
        assert_eq!(err, GeError::ZeroDiagonal { row: 2 });
        assert_eq!(y, Vector::from([7.0, 7.0, 7.0]));

        let u = Matrix::from_rows([[0.0_f64, 1.0, 1.0], [0.0, 2.0, 1.0], [0.0, 0.0, 4.0]]);
        let mut x = Vector::from([7.0, 7.0, 7.0]);

        let err = backward_substitute(&bb, &u, &mut x).unwrap_err();
        assert_eq!(err, GeError::ZeroDiagonal { row: 0 });
        assert_eq!(x, Vector::from([7.0, 7.0, 7.0]));
    }

    #[test]
    fn test_f32_accumulates_in_f64() {
        // 1e8 + 1 rounds to 1e8 in f32, so only a wider sum keeps the 1
        let l = Matrix::from_rows([[1.0_f32, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0e8, 1.0, 1.0]]);
        let bb = Vector::from([1.0_f32, 1.0, 1.0e8]);
        let mut y = Vector::zeros();

        forward_substitute(&bb, &l, &mut y).expect("forward substitution should succeed");

        assert_eq!(y[0], 1.0);
        assert_eq!(y[1], 1.0);
        assert_eq!(y[2], -1.0);
    }

    #[test]
    fn test_array_length_mismatch() {
        let l = array![[1.0_f64, 0.0], [0.0, 1.0]];
        let bb = array![1.0, 2.0, 3.0];
        let mut y = array![0.0, 0.0];

        let err = forward::<f64, ndarray::Array2<f64>>(&bb, &l, &mut y).unwrap_err();
        assert_eq!(
            err,
            GeError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }
}
