//! Gaussian elimination with partial pivoting
//!
//! Factorizes `P A = L U` on working copies (`U <- A`, `L <- I`, `P <- I`) and
//! solves `A x = b` by permuting `b`, then forward and backward substitution.

use super::config::GeConfig;
use super::substitution::{backward, forward};
use crate::dense::{Matrix, Vector};
use crate::error::{GeError, Result};
use crate::traits::{DenseVector, Scalar, SquareMatrix};
use ndarray::{Array1, Array2};
use std::fmt::Display;

/// Build the `N x N` identity matrix.
pub fn identity<T: Scalar, const N: usize>() -> Matrix<T, N, N> {
    Matrix::identity()
}

/// Working factors of one elimination: `P A = L U`
#[derive(Debug, Clone)]
pub(crate) struct Factors<M> {
    pub(crate) l: M,
    pub(crate) u: M,
    pub(crate) p: M,
}

/// Run the elimination on a copy of `a`.
///
/// Row interchanges are applied to all of `U` and `P`, and to the multipliers
/// already stored in `L` (columns `0..k`), which keeps `L` unit lower-triangular.
pub(crate) fn factorize<T, M>(a: &M, config: &GeConfig) -> Result<Factors<M>>
where
    T: Scalar,
    M: SquareMatrix<T> + Display,
{
    let n = a.dim();
    if n == 0 {
        return Err(GeError::EmptySystem);
    }

    let mut u = a.clone();
    let mut l = a.identity_like();
    let mut p = a.identity_like();

    for k in 0..n - 1 {
        let i = config.pivoting.select::<T, M>(&u, k);
        if i != k {
            u.interchange_rows(i, k);
            p.interchange_rows(i, k);
            for c in 0..k {
                let tmp = l[(k, c)];
                l[(k, c)] = l[(i, c)];
                l[(i, c)] = tmp;
            }
        }

        let pivot = u[(k, k)];
        if config.verbosity > 1 {
            log::debug!(
                "GE step {}: pivot row {} value {:.6e}",
                k,
                i,
                pivot.to_f64().unwrap_or(f64::NAN)
            );
        }
        check_pivot(pivot, k, config.tolerance)?;

        for j in (k + 1)..n {
            let mult = u[(j, k)] / pivot;
            l[(j, k)] = mult;
            u[(j, k)] = T::zero();
            for s in (k + 1)..n {
                let update = mult * u[(k, s)];
                u[(j, s)] -= update;
            }
        }
    }
    check_pivot(u[(n - 1, n - 1)], n - 1, config.tolerance)?;

    if config.verbosity > 0 {
        log::info!("GE factor U =\n{}", u);
        log::info!("GE factor L =\n{}", l);
        log::info!("GE factor P =\n{}", p);
    }

    Ok(Factors { l, u, p })
}

/// Solve `A x = b` from existing factors: `bb = P b`, `L y = bb`, `U x = y`.
pub(crate) fn solve_factors<T, M>(
    factors: &Factors<M>,
    b: &M::Vector,
    x: &mut M::Vector,
) -> Result<()>
where
    T: Scalar,
    M: SquareMatrix<T>,
{
    let n = factors.p.dim();
    if b.len() != n {
        return Err(GeError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let bb = factors.p.matvec(b);
    let mut y = bb.zeros_like();
    forward::<T, M>(&bb, &factors.l, &mut y)?;
    backward::<T, M>(&y, &factors.u, x)
}

fn check_pivot<T: Scalar>(pivot: T, step: usize, tolerance: f64) -> Result<()> {
    let value = pivot.to_f64().unwrap_or(f64::NAN);
    if value.is_finite() && value.abs() > tolerance {
        Ok(())
    } else {
        Err(GeError::SingularMatrix { step, pivot: value })
    }
}

/// Solve `m x = rhs` with the default configuration, writing the solution into `x`.
///
/// `x` is left untouched when the solve fails.
///
/// # Example
///
/// ```
/// use math_solvant::{ge, Matrix, Vector};
///
/// let a = Matrix::from_rows([[2.0_f64, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
/// let b = Vector::from([4.0, 10.0, 24.0]);
/// let mut x = Vector::zeros();
///
/// ge(&b, &a, &mut x).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// ```
pub fn ge<T: Scalar, const N: usize>(
    rhs: &Vector<T, N>,
    m: &Matrix<T, N, N>,
    x: &mut Vector<T, N>,
) -> Result<()> {
    ge_with_config(rhs, m, x, &GeConfig::default())
}

/// Solve `m x = rhs` with an explicit configuration, writing the solution into `x`.
pub fn ge_with_config<T: Scalar, const N: usize>(
    rhs: &Vector<T, N>,
    m: &Matrix<T, N, N>,
    x: &mut Vector<T, N>,
    config: &GeConfig,
) -> Result<()> {
    let factorization = GeFactorization::factorize(m, config)?;
    *x = factorization.solve(rhs)?;
    Ok(())
}

/// Pivoted LU factorization of a fixed-size matrix
///
/// Holds `L` (unit lower-triangular), `U` (upper-triangular) and the
/// permutation `P` with `P A = L U`, so several right-hand sides can be solved
/// against one factorization.
#[derive(Debug, Clone)]
pub struct GeFactorization<T, const N: usize> {
    factors: Factors<Matrix<T, N, N>>,
}

impl<T: Scalar, const N: usize> GeFactorization<T, N> {
    /// Factorize `a`
    pub fn factorize(a: &Matrix<T, N, N>, config: &GeConfig) -> Result<Self> {
        let factors = factorize::<T, Matrix<T, N, N>>(a, config)?;
        Ok(Self { factors })
    }

    /// Solve `A x = b` using the pre-computed factors
    pub fn solve(&self, b: &Vector<T, N>) -> Result<Vector<T, N>> {
        let mut x = Vector::zeros();
        solve_factors::<T, Matrix<T, N, N>>(&self.factors, b, &mut x)?;
        Ok(x)
    }

    /// Unit lower-triangular factor
    pub fn l(&self) -> &Matrix<T, N, N> {
        &self.factors.l
    }

    /// Upper-triangular factor
    pub fn u(&self) -> &Matrix<T, N, N> {
        &self.factors.u
    }

    /// Row permutation
    pub fn p(&self) -> &Matrix<T, N, N> {
        &self.factors.p
    }

    /// The product `L U`
    pub fn reconstruct(&self) -> Matrix<T, N, N> {
        &self.factors.l * &self.factors.u
    }

    /// The product `P a`
    pub fn permuted(&self, a: &Matrix<T, N, N>) -> Matrix<T, N, N> {
        &self.factors.p * a
    }

    /// Consume the factorization, returning `(L, U, P)`
    pub fn into_parts(self) -> (Matrix<T, N, N>, Matrix<T, N, N>, Matrix<T, N, N>) {
        let Factors { l, u, p } = self.factors;
        (l, u, p)
    }
}

/// Solve a runtime sized system `A x = b`.
///
/// Shapes are validated once at entry; the elimination itself is the one used
/// for [`Matrix`].
pub fn solve_dense<T: Scalar>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &GeConfig,
) -> Result<Array1<T>> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(GeError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(GeError::EmptySystem);
    }
    if b.len() != rows {
        return Err(GeError::DimensionMismatch {
            expected: rows,
            got: b.len(),
        });
    }

    let factors = factorize::<T, Array2<T>>(a, config)?;
    let mut x = Array1::zeros(rows);
    solve_factors::<T, Array2<T>>(&factors, b, &mut x)?;
    Ok(x)
}

/// Largest absolute entry of `A x - b`
pub fn residual_norm<T: Scalar, const N: usize>(
    a: &Matrix<T, N, N>,
    x: &Vector<T, N>,
    b: &Vector<T, N>,
) -> T {
    (&(a * x) - b).norm_inf()
}
