//! Problem domain models.

mod costs;
pub use self::costs::*;

mod fleet;
pub use self::fleet::*;

mod params;
pub use self::params::*;

mod stations;
pub use self::stations::*;

use std::sync::Arc;

/// A pending cargo record which contributes to demand of its station.
#[derive(Clone, Debug, PartialEq)]
pub struct Cargo {
    /// A station where cargo waits for pickup.
    pub station_id: crate::models::common::StationId,
    /// Cargo weight in kilograms.
    pub weight: crate::models::common::Weight,
}

/// Defines an assignment problem: one snapshot of stations, demand and available vehicles.
#[derive(Clone)]
pub struct Problem {
    /// Known stations together with the hub.
    pub stations: Arc<StationRegistry>,
    /// Pending cargo records.
    pub cargo: Vec<Cargo>,
    /// Available company vehicles, in the order they are considered.
    pub fleet: Vec<Vehicle>,
    /// Run parameters.
    pub params: RunParams,
    /// Road distance and path provider.
    pub transport: Arc<dyn TransportCost>,
}
