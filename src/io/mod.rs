//! Text input for the command-line front end.

pub mod reader;
pub mod session;

pub use reader::{TokenReader, parse_vector_line};
pub use session::read_problem;
