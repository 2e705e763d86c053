use crate::models::common::{Coordinate, Cost, Distance, StationId, Weight};
use crate::models::problem::VehicleCandidate;

/// One vehicle's route together with its picked quantities, distance and cost.
#[derive(Clone, Debug)]
pub struct RoutePlan {
    /// Pickup sequence. The hub is implicit after the last stop.
    pub stops: Vec<StationId>,
    /// Picked quantity per station in the order stations were added to the route.
    pub picked: Vec<(StationId, Weight)>,
    /// Total loaded weight.
    pub loaded: Weight,
    /// Road distance of the route.
    pub distance: Distance,
    /// Fuel cost of the route.
    pub fuel_cost: Cost,
    /// Rental cost of the route, zero for company vehicles.
    pub rental_cost: Cost,
    /// A vehicle which serves the route.
    pub vehicle: VehicleCandidate,
    /// Road geometry of the route, filled when plan is committed.
    pub path: Vec<Coordinate>,
}

impl RoutePlan {
    /// Returns total cost of the route.
    pub fn total_cost(&self) -> Cost {
        self.fuel_cost + self.rental_cost
    }

    /// Returns picked quantity at the given station.
    pub fn picked_at(&self, station_id: StationId) -> Weight {
        self.picked
            .iter()
            .filter(|(id, _)| *id == station_id)
            .map(|(_, weight)| *weight)
            .fold(0, Weight::saturating_add)
    }
}
