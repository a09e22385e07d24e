//! Direct solvers for dense linear systems
//!
//! - [`ge`]: Gaussian elimination with partial pivoting on fixed-size systems
//! - [`GeFactorization`]: reusable `P A = L U` factors
//! - [`solve_dense`]: the same elimination for runtime sized `ndarray` systems
//! - [`forward_substitute`] / [`backward_substitute`]: triangular solves

mod config;
mod ge;
mod substitution;

pub use config::{GeConfig, Pivoting};
pub use ge::{GeFactorization, ge, ge_with_config, identity, residual_norm, solve_dense};
pub use substitution::{backward_substitute, forward_substitute};
