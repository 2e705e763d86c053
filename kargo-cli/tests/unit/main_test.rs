use crate::cli::{get_app, run_subcommand};
use tempfile::TempDir;

const PROBLEM_PATH: &str = "../data/problem.json";

#[test]
fn can_run_solve_subcommand() {
    let tmpdir = TempDir::new().unwrap();
    let solution_path = tmpdir.path().join("solution.json");
    let args = vec!["kargo", "solve", PROBLEM_PATH, "--check", "-o", solution_path.to_str().unwrap()];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);

    assert!(solution_path.exists());
}

#[test]
fn can_reject_unknown_subcommand() {
    get_app().try_get_matches_from(vec!["kargo", "optimize"]).unwrap_err();
}
