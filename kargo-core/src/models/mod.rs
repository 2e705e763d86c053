//! A collection of models to represent cargo assignment problem and its solution.

pub mod common;
pub mod problem;
pub mod solution;

pub use self::problem::Problem;
pub use self::solution::Assignment;
