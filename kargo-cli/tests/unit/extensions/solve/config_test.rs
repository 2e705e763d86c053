use super::*;
use std::fs::File;

fn read_config_from_str(config: &str) -> Config {
    read_config(BufReader::new(config.as_bytes())).expect("cannot read config")
}

#[test]
fn can_read_full_config() {
    let file = File::open("../data/config.json").expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).expect("cannot read config");

    let assignment = config.assignment.as_ref().expect("no assignment config");
    assert_eq!(assignment.neighbours, Some(8));
    assert_eq!(assignment.max_iterations, Some(200));
    assert_eq!(assignment.far_percentile, Some(75.));
    assert_eq!(config.network.as_ref().and_then(|network| network.symmetric_distance), Some(true));

    let logging = config.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).expect("no logging");
    assert!(logging.enabled);
    assert_eq!(logging.prefix.as_deref(), Some("[kargo] "));
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config_from_str("{}");

    let assignment = create_assignment_config(&config).expect("cannot create assignment config");
    let network = create_network_config(&config);

    let default = AssignmentConfig::default();
    assert_eq!(assignment.neighbours, default.neighbours);
    assert_eq!(assignment.max_iterations, default.max_iterations);
    assert_eq!(assignment.far_percentile, default.far_percentile);
    assert!(network.symmetric_distance);
}

#[test]
fn can_override_part_of_assignment_config() {
    let config =
        read_config_from_str(r#"{ "assignment": { "maxIterations": 10 }, "network": { "symmetricDistance": false } }"#);

    let assignment = create_assignment_config(&config).expect("cannot create assignment config");
    let network = create_network_config(&config);

    assert_eq!(assignment.max_iterations, 10);
    assert_eq!(assignment.neighbours, AssignmentConfig::default().neighbours);
    assert!(!network.symmetric_distance);
}

parameterized_test! {can_reject_invalid_assignment_config, config, {
    can_reject_invalid_assignment_config_impl(config);
}}

can_reject_invalid_assignment_config! {
    case01_percentile_above: r#"{ "assignment": { "farPercentile": 101 } }"#,
    case02_percentile_below: r#"{ "assignment": { "farPercentile": -1 } }"#,
    case03_no_neighbours: r#"{ "assignment": { "neighbours": 0 } }"#,
    case04_no_iterations: r#"{ "assignment": { "maxIterations": 0 } }"#,
}

fn can_reject_invalid_assignment_config_impl(config: &str) {
    let config = read_config_from_str(config);

    assert!(create_assignment_config(&config).is_err());
}

#[test]
fn can_report_malformed_config() {
    let result = read_config(BufReader::new("{ \"assignment\": 1 }".as_bytes()));

    assert!(result.expect_err("no error returned").starts_with("cannot deserialize config"));
}

