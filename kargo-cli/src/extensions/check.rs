//! Checks a pragmatic solution against its problem.

#[cfg(test)]
#[path = "../../tests/unit/extensions/check_test.rs"]
mod check_test;

use kargo_pragmatic::checker::CheckerContext;
use kargo_pragmatic::format::problem::deserialize_problem;
use kargo_pragmatic::format::solution::deserialize_solution;
use std::io::{BufReader, Read};

/// Checks pragmatic solution feasibility and returns all found violations.
pub fn check_pragmatic_solution<F: Read>(
    problem_reader: BufReader<F>,
    solution_reader: BufReader<F>,
) -> Result<(), Vec<String>> {
    let problem = deserialize_problem(problem_reader).map_err(|err| vec![format!("cannot read problem: '{err}'")])?;
    let solution =
        deserialize_solution(solution_reader).map_err(|err| vec![format!("cannot read solution: '{err}'")])?;

    CheckerContext::new(problem, solution).check()
}
