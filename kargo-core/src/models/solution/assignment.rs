use crate::models::common::{Cost, Distance, StationId, Weight};
use crate::models::problem::RunParams;
use crate::models::solution::RoutePlan;

/// An overall status of assignment run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignmentStatus {
    /// No pending demand was found.
    NothingToDo,
    /// All demand is assigned to routes.
    FullyServed,
    /// Some demand remained unassigned.
    PartiallyServed,
}

/// Specifies why iteration loop has stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TerminationReason {
    /// All demand is assigned.
    DemandExhausted,
    /// No seed station could be selected.
    NoSeed,
    /// No vehicle candidate produced a plan with positive load.
    NoFeasiblePlan,
    /// Iteration safety cap is reached.
    IterationLimit,
}

/// Aggregated costs of all committed routes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostSummary {
    /// Total road distance.
    pub total_distance: Distance,
    /// Total fuel cost.
    pub total_fuel_cost: Cost,
    /// Amount of used rental vehicles.
    pub rental_count: usize,
    /// Total rental cost.
    pub total_rental_cost: Cost,
}

impl CostSummary {
    /// Returns overall cost estimate.
    pub fn total_cost(&self) -> Cost {
        self.total_fuel_cost + self.total_rental_cost
    }
}

/// A result of assignment run.
#[derive(Clone, Debug)]
pub struct Assignment {
    /// Overall status.
    pub status: AssignmentStatus,
    /// Committed routes in commit order.
    pub routes: Vec<RoutePlan>,
    /// Stations with residual demand, ordered by station id.
    pub unserved: Vec<(StationId, Weight)>,
    /// Aggregated costs.
    pub summary: CostSummary,
    /// Effective run parameters.
    pub params: RunParams,
    /// Amount of iterations done.
    pub iterations: usize,
    /// A reason of loop termination, `None` when there was nothing to do.
    pub termination: Option<TerminationReason>,
}

impl Assignment {
    /// Creates an assignment for a run without pending demand.
    pub fn nothing_to_do(params: RunParams) -> Self {
        Self {
            status: AssignmentStatus::NothingToDo,
            routes: vec![],
            unserved: vec![],
            summary: CostSummary::default(),
            params,
            iterations: 0,
            termination: None,
        }
    }

    /// Returns total served weight.
    pub fn served_weight(&self) -> Weight {
        self.routes.iter().map(|route| route.loaded).fold(0, Weight::saturating_add)
    }

    /// Returns total unserved weight.
    pub fn unserved_weight(&self) -> Weight {
        self.unserved.iter().map(|(_, weight)| *weight).fold(0, Weight::saturating_add)
    }
}
