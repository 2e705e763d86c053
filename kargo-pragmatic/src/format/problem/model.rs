#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A hub definition. When omitted, the default hub is used.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HubDefinition {
    /// A hub name used in route breakdowns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

/// A station definition.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Station id, zero is reserved for the hub.
    pub id: u64,
    /// A human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

/// A pending cargo record.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cargo {
    /// An optional cargo id, used in validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// A station where cargo waits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<u64>,
    /// Total cargo weight in kilograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    /// Amount of items, one by default. Does not influence demand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// A vehicle from vehicle inventory.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Vehicle id.
    pub id: String,
    /// Capacity in kilograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    /// True (default) if vehicle belongs to the company fleet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_company_owned: Option<bool>,
    /// Informational fuel cost per kilometer, run parameter is used for costing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_cost_per_km: Option<f64>,
    /// Informational rental cost, run parameter is used for costing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_cost: Option<f64>,
}

/// Run parameters, all optional.
#[derive(Clone, Default, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunParameters {
    /// Fuel cost per kilometer, 1 by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_cost_per_km: Option<f64>,
    /// Cost of one rental vehicle, 200 by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_cost_per_vehicle: Option<f64>,
    /// Rental vehicle capacity, 500 kg by default. Non positive value means default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_capacity_kg: Option<i64>,
    /// Maximum amount of company vehicles to use. Missing or non positive means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_company_vehicles: Option<i64>,
}

/// A cargo assignment problem.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// A hub definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub: Option<HubDefinition>,
    /// Known stations.
    pub stations: Vec<Station>,
    /// Pending cargo.
    #[serde(default)]
    pub cargo: Vec<Cargo>,
    /// Vehicle inventory.
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    /// Run parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RunParameters>,
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new_with_details(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            "check input json".to_string(),
            err.to_string(),
        )
        .into()
    })
}

/// Serializes `problem` in json from `writer`.
pub fn serialize_problem<W: Write>(problem: &Problem, writer: &mut BufWriter<W>) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, problem).map_err(Error::from)
}
