pub mod dice;
pub mod error;
pub mod evaluator;
mod parser;
pub mod roll;
pub mod solver;

pub use parser::parse;
pub use parser::parse_with;
