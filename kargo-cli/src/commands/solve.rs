#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use kargo_cli::core::prelude::*;
use kargo_cli::extensions::solve::config::*;
use kargo_cli::extensions::solve::{ParamsOverrides, apply_params_overrides};
use kargo_cli::get_errors_serialized;
use kargo_cli::pragmatic::checker::CheckerContext;
use kargo_cli::pragmatic::format::RoutingContext;
use kargo_cli::pragmatic::format::geometry::read_road_graph;
use kargo_cli::pragmatic::format::problem::{PragmaticProblem, deserialize_problem};
use kargo_cli::pragmatic::format::solution::{PragmaticSolution, create_solution};
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const GEOMETRY_ARG_NAME: &str = "geometry";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";
const FUEL_COST_ARG_NAME: &str = "fuel-cost";
const RENTAL_COST_ARG_NAME: &str = "rental-cost";
const RENTAL_CAPACITY_ARG_NAME: &str = "rental-capacity";
const MAX_VEHICLES_ARG_NAME: &str = "max-vehicles";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const GEO_JSON_ARG_NAME: &str = "geo-json";
const CHECK_ARG_NAME: &str = "check";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Assigns pending cargo at stations to company and rental vehicles")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(GEOMETRY_ARG_NAME)
                .help("Sets road geometry GeoJSON file, fallback graph is used when omitted")
                .short('g')
                .long(GEOMETRY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(FUEL_COST_ARG_NAME)
                .help("Overrides fuel cost per kilometer")
                .long(FUEL_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RENTAL_COST_ARG_NAME)
                .help("Overrides cost of one rental vehicle")
                .long(RENTAL_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RENTAL_CAPACITY_ARG_NAME)
                .help("Overrides rental vehicle capacity in kilograms")
                .long(RENTAL_CAPACITY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_VEHICLES_ARG_NAME)
                .help("Overrides maximum amount of company vehicles, non positive means unlimited")
                .long(MAX_VEHICLES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GEO_JSON_ARG_NAME)
                .help("Specifies path to solution output in GeoJSON format")
                .long(GEO_JSON_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final solution should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()?
        .unwrap_or_default();

    let environment = create_environment(&config, matches.get_flag(LOG_ARG_NAME));
    let assignment_config = create_assignment_config(&config)?;
    let overrides = get_params_overrides(matches)?;

    let problem_path =
        matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or_else(|| "problem file should be specified".to_string())?;
    let problem = deserialize_problem(BufReader::new(open_file(problem_path, "problem")))
        .map(|problem| apply_params_overrides(problem, &overrides))
        .map_err(|errors| format!("cannot read problem:\n{}", get_errors_serialized(&errors)))?;

    let geometry = matches.get_one::<String>(GEOMETRY_ARG_NAME).map(|path| BufReader::new(open_file(path, "geometry")));
    let routing = RoutingContext::new(read_road_graph(geometry, &environment.logger), create_network_config(&config));

    let core_problem = (problem.clone(), &routing)
        .read_pragmatic()
        .map_err(|errors| format!("cannot read problem:\n{}", get_errors_serialized(&errors)))?;

    let assignment = AssignmentSolver::new(assignment_config, environment.clone()).solve(&core_problem);

    if matches.get_flag(CHECK_ARG_NAME) {
        CheckerContext::new(problem, create_solution(&core_problem, &assignment))
            .check()
            .map_err(format_checker_errors)?;
        (environment.logger)("solution is feasible");
    }

    if let Some(path) = matches.get_one::<String>(GEO_JSON_ARG_NAME) {
        assignment.write_geo_json(&core_problem, BufWriter::new(create_file(path, "geojson solution")))?;
    }

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out solution"));

    assignment.write_pragmatic_json(&core_problem, out_writer_func(out_result))
}

fn get_params_overrides(matches: &ArgMatches) -> Result<ParamsOverrides, String> {
    Ok(ParamsOverrides {
        fuel_cost_per_km: parse_float_value(matches, FUEL_COST_ARG_NAME, "fuel cost")?,
        rental_cost_per_vehicle: parse_float_value(matches, RENTAL_COST_ARG_NAME, "rental cost")?,
        rental_capacity_kg: parse_int_value(matches, RENTAL_CAPACITY_ARG_NAME, "rental capacity")?,
        max_company_vehicles: parse_int_value(matches, MAX_VEHICLES_ARG_NAME, "max company vehicles")?,
    })
}
