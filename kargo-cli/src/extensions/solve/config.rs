//! This module is responsible for the logic which reads solver configuration from json.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use kargo_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// An algorithm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies assignment heuristic configuration.
    pub assignment: Option<AssignmentSettings>,
    /// Specifies road network configuration.
    pub network: Option<NetworkSettings>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// An assignment heuristic configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSettings {
    /// Amount of nearest neighbors kept per station.
    pub neighbours: Option<usize>,
    /// Iteration safety cap.
    pub max_iterations: Option<usize>,
    /// Percentile of hub distances which defines far stations, in `[0, 100]`.
    pub far_percentile: Option<f64>,
}

/// A road network configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettings {
    /// Specifies whether computed distance is cached in both directions.
    pub symmetric_distance: Option<bool>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies a prefix added to each log message.
    pub prefix: Option<String>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates assignment heuristic configuration, unspecified values are taken from default.
pub fn create_assignment_config(config: &Config) -> Result<AssignmentConfig, String> {
    let default = AssignmentConfig::default();

    let Some(settings) = config.assignment.as_ref() else {
        return Ok(default);
    };

    let far_percentile = settings.far_percentile.unwrap_or(default.far_percentile);
    if !(0. ..=100.).contains(&far_percentile) {
        return Err(format!("far percentile should be in [0, 100] range, got: {far_percentile}"));
    }

    let neighbours = settings.neighbours.unwrap_or(default.neighbours);
    if neighbours == 0 {
        return Err("amount of neighbours should be positive".to_string());
    }

    let max_iterations = settings.max_iterations.unwrap_or(default.max_iterations);
    if max_iterations == 0 {
        return Err("max iterations should be positive".to_string());
    }

    Ok(AssignmentConfig { neighbours, max_iterations, far_percentile, ..default })
}

/// Creates road network configuration.
pub fn create_network_config(config: &Config) -> NetworkConfig {
    let default = NetworkConfig::default();

    config
        .network
        .as_ref()
        .and_then(|network| network.symmetric_distance)
        .map_or(default, |symmetric_distance| NetworkConfig { symmetric_distance })
}

/// Creates environment with a logger enabled either by configuration or explicitly.
pub fn create_environment(config: &Config, is_logging_forced: bool) -> Environment {
    let logging = config.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref());

    match (logging, is_logging_forced) {
        (Some(LoggingConfig { enabled, prefix: Some(prefix) }), forced) if *enabled || forced => {
            Environment::with_prefix(prefix)
        }
        (Some(LoggingConfig { enabled: true, .. }), _) | (_, true) => Environment::default(),
        _ => Environment::silent(),
    }
}
