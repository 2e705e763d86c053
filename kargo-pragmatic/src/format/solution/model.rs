use crate::format::problem::RunParameters;
use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// An overall solution status.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub enum SolutionStatus {
    /// There was no pending demand.
    NothingToDo,
    /// All demand is assigned.
    FullyServed,
    /// Some demand remained unassigned.
    PartiallyServed,
}

/// A quantity picked at a station.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Pickup {
    /// Station id.
    pub station_id: u64,
    /// Picked weight in kilograms.
    pub weight: i64,
}

/// One leg of a route breakdown.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Step number starting from one.
    pub step: usize,
    /// A name of the station where step starts.
    pub from: String,
    /// A name of the next station or the hub.
    pub to: String,
    /// Weight picked at `from` station.
    pub picked_kg: i64,
    /// Weight carried after pickup at `from` station.
    pub carried_kg: i64,
}

/// A committed route.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Company vehicle id, absent for rental vehicles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    /// True if route is served by a rental vehicle.
    pub rental: bool,
    /// Vehicle capacity in kilograms.
    pub capacity_kg: i64,
    /// Pickup sequence, the hub is implicit after the last station.
    pub stations: Vec<u64>,
    /// Picked quantity per station.
    pub pickups: Vec<Pickup>,
    /// Total loaded weight.
    pub loaded_kg: i64,
    /// Road distance.
    pub distance_km: f64,
    /// Fuel cost.
    pub fuel_cost: f64,
    /// Rental cost.
    pub rental_cost: f64,
    /// Total route cost.
    pub total_cost: f64,
    /// Route breakdown.
    pub steps: Vec<Step>,
    /// Road path as `[lat, lng]` pairs.
    pub path: Vec<[f64; 2]>,
}

/// An unserved station demand.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UnservedStation {
    /// Station id.
    pub station_id: u64,
    /// Remaining weight.
    pub weight: i64,
}

/// A group of stations which were rejected together.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RejectedGroup {
    /// Station ids.
    pub stations: Vec<u64>,
    /// Total remaining weight of the group.
    pub total_kg: i64,
}

/// Usage of a company vehicle.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUsage {
    /// Vehicle id.
    pub vehicle_id: String,
    /// Loaded weight.
    pub loaded_kg: i64,
}

/// Aggregated solution statistic.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    /// Total road distance.
    pub total_distance_km: f64,
    /// Total fuel cost.
    pub total_fuel_cost: f64,
    /// Amount of rental vehicles.
    pub rental_count: usize,
    /// Total rental cost.
    pub total_rental_cost: f64,
    /// Overall cost estimate.
    pub total_cost: f64,
    /// Served weight.
    pub served_kg: i64,
    /// Unserved weight.
    pub unserved_kg: i64,
}

/// Contains extra information about the run.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    /// Amount of iterations.
    pub iterations: usize,
    /// A reason why iterations stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<String>,
}

/// A cargo assignment solution.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Overall status.
    pub status: SolutionStatus,
    /// Total statistic.
    pub statistic: Statistic,
    /// Committed routes.
    pub routes: Vec<Route>,
    /// Unserved stations, ordered by station id.
    #[serde(default)]
    pub unserved: Vec<UnservedStation>,
    /// Rejected station groups.
    #[serde(default)]
    pub rejected: Vec<RejectedGroup>,
    /// Used company vehicles.
    #[serde(default)]
    pub company_vehicles: Vec<VehicleUsage>,
    /// Effective run parameters.
    pub params: RunParameters,
    /// An extra information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

/// Serializes solution into json format.
pub fn serialize_solution<W: Write>(writer: BufWriter<W>, solution: &Solution) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, solution).map_err(Error::from)
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new_with_details(
            "E0002".to_string(),
            "cannot deserialize solution".to_string(),
            "check solution json".to_string(),
            err.to_string(),
        )
        .into()
    })
}
