#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use kargo_cli::extensions::check::check_pragmatic_solution;
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "problem-file";
const SOLUTION_ARG_NAME: &str = "solution-file";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check solution feasibility")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets problem file")
                .short('p')
                .long(PROBLEM_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution file")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(true),
        )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let problem_file = matches
        .get_one::<String>(PROBLEM_ARG_NAME)
        .map(|path| BufReader::new(open_file(path, "problem")))
        .ok_or_else(|| "problem file should be specified".to_string())?;
    let solution_file = matches
        .get_one::<String>(SOLUTION_ARG_NAME)
        .map(|path| BufReader::new(open_file(path, "solution")))
        .ok_or_else(|| "solution file should be specified".to_string())?;

    check_pragmatic_solution(problem_file, solution_file).map_err(format_checker_errors)
}
