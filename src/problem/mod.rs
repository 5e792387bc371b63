//! Linear programs in the form `max c·x` subject to `Ax <= b`, `x >= 0`.

pub mod linear_program;

pub use linear_program::LinearProgram;
