//! A command line interface to cargo assignment solver.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::create_write_buffer;
    use super::commands::path::{get_path_app, run_path};
    use super::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Cargo Assignment Solver")
            .version("0.1")
            .about("A command line interface to assign pending station cargo to vehicles")
            .subcommand(get_solve_app())
            .subcommand(get_path_app())
            .subcommand(get_check_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
            Some(("path", path_matches)) => run_path(path_matches, create_write_buffer),
            Some(("check", check_matches)) => run_check(check_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    cli::run_subcommand(cli::get_app().get_matches());
}
