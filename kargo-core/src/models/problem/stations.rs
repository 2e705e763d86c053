#[cfg(test)]
#[path = "../../../tests/unit/models/problem/stations_test.rs"]
mod stations_test;

use crate::models::common::{Coordinate, HUB_ID, StationId};
use rustc_hash::FxHashMap;

/// A fixed location demand point.
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    /// Station identity.
    pub id: StationId,
    /// An optional human readable name.
    pub name: Option<String>,
    /// Station location.
    pub location: Coordinate,
}

/// A depot where all cargo is brought to.
#[derive(Clone, Debug, PartialEq)]
pub struct Hub {
    /// Hub name used in route breakdowns.
    pub name: String,
    /// Hub location.
    pub location: Coordinate,
}

impl Default for Hub {
    fn default() -> Self {
        Self { name: "Hub".to_string(), location: Coordinate::new(40.82224624200172, 29.92156586537241) }
    }
}

/// Keeps stations of one request indexed by their identity.
#[derive(Clone, Debug, Default)]
pub struct StationRegistry {
    hub: Hub,
    stations: FxHashMap<StationId, Station>,
}

impl StationRegistry {
    /// Creates a new instance of `StationRegistry`. Stations with the reserved hub identity are ignored.
    pub fn new(hub: Hub, stations: Vec<Station>) -> Self {
        let stations = stations.into_iter().filter(|station| station.id != HUB_ID).map(|s| (s.id, s)).collect();

        Self { hub, stations }
    }

    /// Returns the hub.
    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    /// Returns station by its identity.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Checks whether identity refers to a known station (hub excluded).
    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// Resolves station or hub identity to its coordinate.
    pub fn resolve(&self, id: StationId) -> Option<Coordinate> {
        if id == HUB_ID { Some(self.hub.location) } else { self.stations.get(&id).map(|station| station.location) }
    }

    /// Returns a display name for station or hub identity.
    pub fn name_of(&self, id: StationId) -> String {
        if id == HUB_ID {
            return self.hub.name.clone();
        }

        self.stations
            .get(&id)
            .and_then(|station| station.name.clone())
            .unwrap_or_else(|| format!("Station {id}"))
    }

    /// Returns amount of stations (hub excluded).
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
