//! Selection and termination helpers shared by the solver.

pub mod convergence;
pub mod selection;

pub use convergence::{SolveStats, Termination};
pub use selection::{select_best, select_min};
