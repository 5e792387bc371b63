//! Core traits and their implementations for the matrix and vector types used by the solver.

pub mod traits;
pub mod wrappers;

pub use traits::{InnerProduct, MatShape, MatVec};
