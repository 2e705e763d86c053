//! Specifies logic to read problem from json input.

use crate::format::{MultiFormatError, RoutingContext};
use kargo_core::models::Problem as CoreProblem;
use std::io::{BufReader, Read};

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::create_run_params;
use self::reader::map_to_problem;

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem {
    /// Reads problem defined in pragmatic format.
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for (BufReader<R>, &RoutingContext) {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        let problem = deserialize_problem(self.0)?;

        map_to_problem(problem, self.1)
    }
}

impl PragmaticProblem for (String, &RoutingContext) {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        let problem = deserialize_problem(BufReader::new(self.0.as_bytes()))?;

        map_to_problem(problem, self.1)
    }
}

impl PragmaticProblem for (Problem, &RoutingContext) {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        map_to_problem(self.0, self.1)
    }
}
