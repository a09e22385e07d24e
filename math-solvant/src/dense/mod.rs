//! Dense storage for systems of equations
//!
//! - [`Matrix`]: compile-time sized, stack-allocated, row-major matrix
//! - [`Vector`]: compile-time sized, stack-allocated vector
//!
//! `ndarray::Array2` / `ndarray::Array1` also implement the storage traits so
//! the same elimination kernel serves runtime sized systems.

mod array;
mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
