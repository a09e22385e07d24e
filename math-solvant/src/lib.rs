//! Dense Gaussian elimination for fixed-size linear systems
//!
//! This crate solves `A x = b` for a square matrix whose dimension is known at
//! compile time, using Gaussian elimination with partial pivoting
//! (`P A = L U`) followed by forward and backward substitution.
//!
//! # Features
//!
//! - **Fixed-size storage**: [`Matrix`] and [`Vector`] live on the stack, sized by const generics
//! - **Reusable factors**: [`GeFactorization`] solves many right-hand sides against one `L`, `U`, `P`
//! - **Pivoting strategies**: [`Pivoting::Legacy`] (signed comparison) and [`Pivoting::Magnitude`]
//! - **Mixed precision**: substitution sums accumulate in `f64` for both `f32` and `f64`
//! - **Runtime sized systems**: [`solve_dense`] runs the same elimination on `ndarray` arrays
//!
//! # Example
//!
//! ```
//! use math_solvant::{GeConfig, GeFactorization, Matrix, Pivoting, Vector};
//!
//! let a = Matrix::from_rows([[2.0_f64, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
//! let b = Vector::from([4.0, 10.0, 24.0]);
//!
//! let config = GeConfig::default().with_pivoting(Pivoting::Magnitude);
//! let lu = GeFactorization::factorize(&a, &config)?;
//! let x = lu.solve(&b)?;
//!
//! assert!((x[2] - 1.0).abs() < 1e-12);
//! # Ok::<(), math_solvant::GeError>(())
//! ```

pub mod dense;
pub mod direct;
pub mod error;
pub mod traits;

// Re-export main types
pub use dense::{Matrix, Vector};
pub use error::{GeError, Result};
pub use traits::{DenseVector, Scalar, SquareMatrix};

// Re-export solvers
pub use direct::{
    GeConfig, GeFactorization, Pivoting, backward_substitute, forward_substitute, ge,
    ge_with_config, identity, residual_norm, solve_dense,
};
