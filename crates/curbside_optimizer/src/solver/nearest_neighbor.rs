use crate::problem::{
    collection_problem::CollectionProblem, location::Location, vehicle::Vehicle, waste_bin::BinIdx,
};

use super::route_search::{RouteSearchResult, RouteStops};

/// Deterministic greedy construction used when the exact search runs out
/// of budget: repeatedly append the nearest capacity- and
/// specialty-feasible bin, stopping at the soft load threshold or when no
/// eligible bin remains.
///
/// This is a heuristic with no optimality guarantee, but it terminates in
/// quadratic time and returns a non-empty route whenever at least one
/// eligible bin exists.
pub fn nearest_neighbor_route(
    problem: &CollectionProblem,
    vehicle: &Vehicle,
    candidates: &[BinIdx],
    start: Option<&Location>,
    capacity_stop_fraction: f64,
) -> RouteSearchResult {
    let mut stops = RouteStops::new();
    let mut visited = vec![false; candidates.len()];
    let mut position = start.copied();
    let mut load = 0.0;
    let mut distance = 0.0;
    let load_threshold = vehicle.capacity() * capacity_stop_fraction;

    loop {
        let mut nearest: Option<(usize, f64)> = None;

        for (index, &bin_id) in candidates.iter().enumerate() {
            let bin = problem.bin(bin_id);
            if visited[index]
                || load + bin.fill_level() > vehicle.capacity()
                || !vehicle.can_collect(bin)
            {
                continue;
            }

            let leg = position.map_or(0.0, |from| {
                from.euclidean_distance(problem.bin_location(bin_id))
            });

            // Strict comparison keeps the first candidate on ties, which
            // makes the construction deterministic.
            if nearest.is_none_or(|(_, best)| leg < best) {
                nearest = Some((index, leg));
            }
        }

        let Some((index, leg)) = nearest else { break };
        let bin_id = candidates[index];

        visited[index] = true;
        stops.push(bin_id);
        load += problem.bin(bin_id).fill_level();
        distance += leg;
        position = Some(*problem.bin_location(bin_id));

        if load >= load_threshold {
            break;
        }
    }

    RouteSearchResult { stops, distance }
}
