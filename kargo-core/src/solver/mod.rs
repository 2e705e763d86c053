//! The assignment solver: repeats seed selection and route construction until demand is
//! exhausted or no progress can be made.
//!
//! # Examples
//!
//! ```
//! # use kargo_core::prelude::*;
//! # fn run(problem: Problem) {
//! let solver = AssignmentSolver::new(AssignmentConfig::default(), Environment::silent());
//! let assignment = solver.solve(&problem);
//!
//! println!("{:?}: {} routes", assignment.status, assignment.routes.len());
//! # }
//! ```

mod candidates;
pub use self::candidates::*;

use crate::construction::{DensitySettings, InsertionContext, Topology, aggregate_demand, select_seed};
use crate::models::common::{Distance, Weight};
use crate::models::problem::{Problem, route_path};
use crate::models::solution::{Assignment, AssignmentStatus, CostSummary, RoutePlan, TerminationReason};
use crate::utils::{Environment, Float, Timer};

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

/// Specifies assignment algorithm settings.
#[derive(Clone, Debug)]
pub struct AssignmentConfig {
    /// Amount of nearest neighbors kept per station.
    pub neighbours: usize,
    /// Iteration safety cap.
    pub max_iterations: usize,
    /// Percentile of hub distances which defines far stations.
    pub far_percentile: Float,
    /// Amount of active neighbors used in density estimation.
    pub density_neighbours: usize,
    /// Isolation distance used for stations without active neighbors.
    pub isolation_fallback_km: Distance,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            neighbours: 12,
            max_iterations: 500,
            far_percentile: 75.,
            density_neighbours: 3,
            isolation_fallback_km: 50.,
        }
    }
}

/// Solves assignment problem using seed-and-grow heuristic.
pub struct AssignmentSolver {
    config: AssignmentConfig,
    environment: Environment,
}

impl AssignmentSolver {
    /// Creates a new instance of `AssignmentSolver`.
    pub fn new(config: AssignmentConfig, environment: Environment) -> Self {
        Self { config, environment }
    }

    /// Assigns pending demand of the problem to routes.
    pub fn solve(&self, problem: &Problem) -> Assignment {
        let logger = &self.environment.logger;
        let params = problem.params.clone();

        let mut demand = aggregate_demand(problem.cargo.as_slice(), &problem.stations, logger);
        if demand.is_exhausted() {
            (logger)("no pending demand, nothing to assign");
            return Assignment::nothing_to_do(params);
        }

        let topology = Topology::new(&demand, &problem.stations, self.config.neighbours, self.config.far_percentile);
        let density = DensitySettings {
            neighbours: self.config.density_neighbours,
            isolation_fallback: self.config.isolation_fallback_km,
        };
        let mut pool = VehiclePool::new(problem.fleet.as_slice());

        (logger)(
            format!(
                "assignment started: {} of {} stations with demand, total {} kg, far threshold {:.3} km",
                demand.active().count(),
                problem.stations.len(),
                demand.total(),
                topology.far_threshold()
            )
            .as_str(),
        );

        let timer = Timer::start();
        let mut routes: Vec<RoutePlan> = vec![];
        let mut iterations = 0;

        let termination = loop {
            if demand.is_exhausted() {
                break TerminationReason::DemandExhausted;
            }

            if iterations >= self.config.max_iterations {
                break TerminationReason::IterationLimit;
            }
            iterations += 1;

            let candidates = create_candidates(&pool, &params);
            let max_capacity = candidates.iter().map(|candidate| candidate.capacity()).max().unwrap_or(0);
            if max_capacity <= 0 {
                break TerminationReason::NoFeasiblePlan;
            }

            let Some(seed) = select_seed(&demand, &topology, &problem.stations, max_capacity, &density) else {
                break TerminationReason::NoSeed;
            };

            let ctx = InsertionContext {
                demand: &demand,
                topology: &topology,
                stations: &problem.stations,
                transport: problem.transport.as_ref(),
                max_capacity,
            };

            let Some(plan) = evaluate_candidates(&ctx, candidates.as_slice(), seed, &params) else {
                break TerminationReason::NoFeasiblePlan;
            };

            let applied = demand.apply(plan.picked.as_slice());
            if applied <= 0 {
                break TerminationReason::NoFeasiblePlan;
            }

            if let Some(id) = plan.vehicle.company_id() {
                pool.mark_used(id);
            }

            (logger)(
                format!(
                    "iteration {iterations}: {} vehicle ({} kg) serves {} stops, loaded {} kg, cost {:.3}",
                    plan.vehicle.company_id().unwrap_or("rental"),
                    plan.vehicle.capacity(),
                    plan.stops.len(),
                    plan.loaded,
                    plan.total_cost()
                )
                .as_str(),
            );

            routes.push(plan);
        };

        routes.iter_mut().for_each(|route| route.path = route_path(problem.transport.as_ref(), route.stops.as_slice()));

        let unserved = demand.unserved();
        let unserved_weight = unserved.iter().map(|(_, weight)| *weight).fold(0, Weight::saturating_add);
        let status =
            if unserved.is_empty() { AssignmentStatus::FullyServed } else { AssignmentStatus::PartiallyServed };

        (logger)(
            format!(
                "assignment finished in {}ms after {iterations} iterations: {termination:?}, {} routes, \
                 unserved {} kg at {} stations",
                timer.elapsed_millis(),
                routes.len(),
                unserved_weight,
                unserved.len()
            )
            .as_str(),
        );

        Assignment {
            status,
            summary: create_summary(routes.as_slice()),
            routes,
            unserved,
            params,
            iterations,
            termination: Some(termination),
        }
    }
}

fn create_summary(routes: &[RoutePlan]) -> CostSummary {
    routes.iter().fold(CostSummary::default(), |mut summary, route| {
        summary.total_distance += route.distance;
        summary.total_fuel_cost += route.fuel_cost;
        if !route.vehicle.is_company() {
            summary.rental_count += 1;
            summary.total_rental_cost += route.rental_cost;
        }
        summary
    })
}
