#[cfg(test)]
#[path = "../../tests/unit/commands/path_test.rs"]
mod path_test;

use super::*;
use clap::{Arg, Command};
use kargo_cli::core::network::RoadNetwork;
use kargo_cli::core::utils::Environment;
use kargo_cli::extensions::path::{find_path, parse_coordinate, write_path_result};
use kargo_cli::pragmatic::format::geometry::read_road_graph;
use std::io::BufReader;
use std::sync::Arc;

const FROM_ARG_NAME: &str = "FROM";
const TO_ARG_NAME: &str = "TO";
const GEOMETRY_ARG_NAME: &str = "geometry";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_path_app() -> Command {
    Command::new("path")
        .about("Finds road path between two coordinates")
        .arg(
            Arg::new(FROM_ARG_NAME)
                .help("Sets start coordinate as 'lat,lng'")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new(TO_ARG_NAME)
                .help("Sets end coordinate as 'lat,lng'")
                .required(true)
                .allow_hyphen_values(true)
                .index(2),
        )
        .arg(
            Arg::new(GEOMETRY_ARG_NAME)
                .help("Sets road geometry GeoJSON file, fallback graph is used when omitted")
                .short('g')
                .long(GEOMETRY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_path(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let from = matches.get_one::<String>(FROM_ARG_NAME).ok_or_else(|| "start should be specified".to_string())?;
    let to = matches.get_one::<String>(TO_ARG_NAME).ok_or_else(|| "end should be specified".to_string())?;
    let (from, to) = (parse_coordinate(from)?, parse_coordinate(to)?);

    let geometry = matches.get_one::<String>(GEOMETRY_ARG_NAME).map(|path| BufReader::new(open_file(path, "geometry")));
    let graph = read_road_graph(geometry, &Environment::silent().logger);
    let network = RoadNetwork::new(Arc::new(graph));

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    write_path_result(out_writer_func(out_result), &find_path(&network, &from, &to))
}
