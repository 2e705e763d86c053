#[cfg(test)]
#[path = "../../tests/unit/construction/insertion_test.rs"]
mod insertion_test;

use super::{DemandMap, Topology};
use crate::models::common::{HUB_ID, StationId, Weight};
use crate::models::problem::{StationRegistry, TransportCost};
use crate::utils::{Float, compare_floats};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Keeps read-only data needed to build a route for one iteration.
pub struct InsertionContext<'a> {
    /// Remaining demand snapshot of the iteration.
    pub demand: &'a DemandMap,
    /// Request topology.
    pub topology: &'a Topology,
    /// Known stations.
    pub stations: &'a StationRegistry,
    /// Road distances.
    pub transport: &'a dyn TransportCost,
    /// The largest capacity among vehicle candidates of the iteration.
    pub max_capacity: Weight,
}

/// A route built by insertion heuristic, not yet costed.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteDraft {
    /// Pickup sequence.
    pub stops: Vec<StationId>,
    /// Picked quantity per station in insertion order.
    pub picked: Vec<(StationId, Weight)>,
    /// Total loaded weight.
    pub loaded: Weight,
}

#[derive(Clone, Copy)]
enum InsertionSide {
    Head,
    Tail,
}

/// Builds a route from the seed station by greedily extending it at either end.
///
/// Demand is consumed from a private copy of the snapshot, so the caller's snapshot is kept
/// intact. Returns `None` when capacity is not positive or nothing can be picked at the seed.
pub fn build_two_ended_route(ctx: &InsertionContext, capacity: Weight, seed: StationId) -> Option<RouteDraft> {
    if capacity <= 0 {
        return None;
    }

    let mut demand = ctx.demand.clone();
    let mut capacity_left = capacity;

    let taken = demand.take(seed, capacity_left);
    if taken <= 0 {
        return None;
    }
    capacity_left -= taken;

    let mut route = VecDeque::from(vec![seed]);
    let mut in_route = FxHashSet::from_iter([seed]);
    let mut picked = vec![(seed, taken)];

    while capacity_left > 0 {
        let (head, tail) = match (route.front(), route.back()) {
            (Some(&head), Some(&tail)) => (head, tail),
            _ => break,
        };

        let pool = get_candidate_pool(ctx, &demand, &in_route, head, tail);
        let tail_to_hub = ctx.transport.distance(tail, HUB_ID);

        let best = pool
            .into_iter()
            .filter(|&candidate| !in_route.contains(&candidate) && ctx.stations.contains(candidate))
            .filter_map(|candidate| {
                let remaining = demand.remaining(candidate);
                if remaining <= 0 {
                    return None;
                }

                if ctx.topology.is_far(candidate) && remaining <= ctx.max_capacity && capacity_left < remaining {
                    return None;
                }

                let take = capacity_left.min(remaining);
                let divider = take.max(1) as Float;

                let head_score = ctx.transport.distance(candidate, head) / divider;
                let tail_extra = ctx.transport.distance(tail, candidate) + ctx.transport.distance(candidate, HUB_ID)
                    - tail_to_hub;
                let tail_score = tail_extra.max(0.) / divider;

                Some([
                    (candidate, take, head_score, InsertionSide::Head),
                    (candidate, take, tail_score, InsertionSide::Tail),
                ])
            })
            .flatten()
            .fold(None, |best: Option<(StationId, Weight, Float, InsertionSide)>, insertion| match best {
                Some((_, _, best_score, _)) if compare_floats(insertion.2, best_score) != Ordering::Less => best,
                _ => Some(insertion),
            });

        let Some((station_id, take, _, side)) = best else { break };

        match side {
            InsertionSide::Head => route.push_front(station_id),
            InsertionSide::Tail => route.push_back(station_id),
        }
        in_route.insert(station_id);

        let taken = demand.take(station_id, take);
        capacity_left -= taken;
        picked.push((station_id, taken));
    }

    Some(RouteDraft { stops: route.into_iter().collect(), picked, loaded: capacity - capacity_left })
}

/// Returns ordered unique union of head and tail neighbors. Falls back to the station with the
/// largest remaining demand when both ends have no neighbors.
fn get_candidate_pool(
    ctx: &InsertionContext,
    demand: &DemandMap,
    in_route: &FxHashSet<StationId>,
    head: StationId,
    tail: StationId,
) -> Vec<StationId> {
    let neighbors = ctx.topology.neighbors();
    let mut seen = FxHashSet::default();
    let pool = neighbors
        .get(head)
        .iter()
        .chain(neighbors.get(tail).iter())
        .filter(|station_id| seen.insert(**station_id))
        .copied()
        .collect::<Vec<_>>();

    if !pool.is_empty() {
        return pool;
    }

    demand
        .active()
        .filter(|(station_id, _)| !in_route.contains(station_id) && ctx.stations.contains(*station_id))
        .fold(None, |best: Option<(StationId, Weight)>, (station_id, remaining)| match best {
            Some((_, best_remaining)) if remaining <= best_remaining => best,
            _ => Some((station_id, remaining)),
        })
        .map(|(station_id, _)| vec![station_id])
        .unwrap_or_default()
}
