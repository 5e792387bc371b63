pub mod options;

pub use options::{SimplexOptions, DEFAULT_EPS, DEFAULT_OBJECTIVE_CEILING};
