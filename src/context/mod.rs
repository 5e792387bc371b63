//! Context module for simplx.
//!
//! Contexts bundle a problem with solver options and run the full pipeline: build the
//! tableau, pivot to a terminal state, and read the solution back out.
//!
//! Modules:
//! - [`lp_context`]: the `LpContext` driver and its `Solution` result.
//!
//! # Example
//! ```rust
//! use simplx::{LinearProgram, LpContext, Status};
//!
//! let lp = LinearProgram::from_rows(vec![3.0, 2.0], &[vec![1.0, 1.0], vec![1.0, 3.0]], vec![4.0, 6.0]).unwrap();
//! let solution = LpContext::new(lp).solve().unwrap();
//! assert_eq!(solution.status, Status::Solved);
//! assert_eq!(solution.objective, 12.0);
//! ```
//!
//! # References
//! - Chvátal, V. (1983). Linear Programming. W. H. Freeman.

pub mod lp_context;
pub use lp_context::{LpContext, Solution};
