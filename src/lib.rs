//! simplx: dense-tableau primal simplex for small linear programs
//!
//! This crate solves `max c·x` subject to `Ax <= b`, `x >= 0` by pivoting a dense tableau with
//! an identity slack basis. The pieces are a row-major [`DenseMatrix`], the pivot primitives and
//! selection policy in [`solver`], and [`LpContext`] which ties a [`LinearProgram`] to the solver.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod io;
pub mod matrix;
pub mod problem;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use problem::*;
pub use solver::*;
pub use utils::*;
