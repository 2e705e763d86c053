//! This module reimports commonly used types.

pub use crate::models::common::{Coordinate, Distance, HUB_ID, StationId, Weight};
pub use crate::models::problem::{Cargo, Hub, RunParams, Station, StationRegistry, TransportCost, Vehicle};
pub use crate::models::solution::{Assignment, AssignmentStatus, RoutePlan};
pub use crate::models::Problem;

pub use crate::network::{InMemoryRoutingCache, NetworkConfig, RoadGraph, RoadNetwork, RoadTransportCost};

pub use crate::solver::{AssignmentConfig, AssignmentSolver};

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
