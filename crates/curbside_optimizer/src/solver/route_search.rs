use fixedbitset::FixedBitSet;
use jiff::Timestamp;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::trace;

use crate::problem::{
    collection_problem::CollectionProblem,
    location::Location,
    vehicle::Vehicle,
    waste_bin::BinIdx,
};

use super::{nearest_neighbor, search_params::RouteSearchParams};

pub type RouteStops = SmallVec<[BinIdx; 12]>;

#[derive(Debug, Clone, Serialize)]
pub struct RouteSearchResult {
    pub stops: RouteStops,
    pub distance: f64,
}

impl RouteSearchResult {
    pub fn empty() -> Self {
        RouteSearchResult {
            stops: RouteStops::new(),
            distance: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Time-bounded branch-and-bound over visiting orders for one vehicle and
/// one candidate bin set. When the budget expires before any complete
/// solution is recorded, a deterministic nearest-neighbor construction
/// supplies the route, so a feasible instance is never left unrouted.
pub struct RouteSearch {
    params: RouteSearchParams,
}

struct Best {
    order: SmallVec<[usize; 12]>,
    distance: f64,
}

/// All mutable search state, threaded explicitly through the recursion:
/// visited mask, partial route (indices into the working set), running
/// totals, best-so-far, and the deadline.
struct SearchState {
    visited: FixedBitSet,
    route: SmallVec<[usize; 12]>,
    load: f64,
    distance: f64,
    best: Option<Best>,
    deadline: Timestamp,
    expired: bool,
}

impl SearchState {
    fn new(size: usize, deadline: Timestamp) -> Self {
        SearchState {
            visited: FixedBitSet::with_capacity(size),
            route: SmallVec::new(),
            load: 0.0,
            distance: 0.0,
            best: None,
            deadline,
            expired: false,
        }
    }

    fn budget_exhausted(&mut self) -> bool {
        if !self.expired && Timestamp::now() > self.deadline {
            self.expired = true;
        }

        self.expired
    }

    fn record_if_better(&mut self) {
        let improved = self
            .best
            .as_ref()
            .is_none_or(|best| self.distance < best.distance);

        if improved {
            self.best = Some(Best {
                order: self.route.clone(),
                distance: self.distance,
            });
        }
    }
}

impl RouteSearch {
    pub fn new(params: RouteSearchParams) -> Self {
        RouteSearch { params }
    }

    pub fn params(&self) -> &RouteSearchParams {
        &self.params
    }

    pub fn search(
        &self,
        problem: &CollectionProblem,
        vehicle: &Vehicle,
        candidates: &[BinIdx],
        start: Option<&Location>,
    ) -> RouteSearchResult {
        let working = self.select_working_set(problem, vehicle, candidates);
        if working.is_empty() {
            return RouteSearchResult::empty();
        }

        let deadline = Timestamp::now() + self.params.time_budget;
        let mut state = SearchState::new(working.len(), deadline);

        self.explore(problem, vehicle, &working, start.copied(), &mut state);

        if let Some(best) = state.best {
            let stops: RouteStops = best.order.iter().map(|&index| working[index]).collect();
            return RouteSearchResult {
                stops,
                distance: best.distance,
            };
        }

        trace!(
            vehicle = vehicle.external_id(),
            bins = working.len(),
            "search budget expired with no complete solution, using fallback"
        );

        nearest_neighbor::nearest_neighbor_route(
            problem,
            vehicle,
            &working,
            start,
            self.params.capacity_stop_fraction,
        )
    }

    /// Prefilter and ranking of the candidate set: needing-emptying bins
    /// first, restricted to the vehicle's specialty when any match, falling
    /// back to all candidates when nothing needs emptying; sorted by
    /// descending fill and truncated to `max_bins`.
    pub(crate) fn select_working_set(
        &self,
        problem: &CollectionProblem,
        vehicle: &Vehicle,
        candidates: &[BinIdx],
    ) -> Vec<BinIdx> {
        let needing: Vec<BinIdx> = candidates
            .iter()
            .copied()
            .filter(|&bin_id| problem.bin(bin_id).needs_emptying())
            .collect();

        let mut working = if vehicle.specialty().is_some() {
            let matching: Vec<BinIdx> = needing
                .iter()
                .copied()
                .filter(|&bin_id| vehicle.can_collect(problem.bin(bin_id)))
                .collect();

            if matching.is_empty() { needing } else { matching }
        } else {
            needing
        };

        if working.is_empty() {
            working = candidates.to_vec();
        }

        working.sort_by(|&a, &b| {
            problem
                .bin(b)
                .fill_level()
                .total_cmp(&problem.bin(a).fill_level())
                .then(a.cmp(&b))
        });
        working.truncate(self.params.max_bins);

        working
    }

    fn explore(
        &self,
        problem: &CollectionProblem,
        vehicle: &Vehicle,
        working: &[BinIdx],
        position: Option<Location>,
        state: &mut SearchState,
    ) {
        if state.budget_exhausted() {
            return;
        }

        let all_visited = state.visited.count_ones(..) == working.len();
        let load_threshold = vehicle.capacity() * self.params.capacity_stop_fraction;
        if all_visited || state.load >= load_threshold {
            state.record_if_better();
            return;
        }

        // Feasible children, nearest first so good solutions are found
        // early and pruning bites under the time budget.
        let mut children: SmallVec<[(usize, f64); 12]> = working
            .iter()
            .enumerate()
            .filter(|&(index, &bin_id)| {
                let bin = problem.bin(bin_id);
                !state.visited.contains(index)
                    && state.load + bin.fill_level() <= vehicle.capacity()
                    && vehicle.can_collect(bin)
            })
            .map(|(index, &bin_id)| {
                let leg = position
                    .map_or(0.0, |from| from.euclidean_distance(problem.bin_location(bin_id)));
                (index, leg)
            })
            .collect();
        children.sort_by(|a, b| a.1.total_cmp(&b.1));

        for (index, leg) in children {
            if state.budget_exhausted() {
                return;
            }

            let bin = problem.bin(working[index]);
            let next_position = *problem.bin_location(working[index]);

            state.visited.insert(index);
            state.route.push(index);
            state.load += bin.fill_level();
            state.distance += leg;

            self.explore(problem, vehicle, working, Some(next_position), state);

            state.distance -= leg;
            state.load -= bin.fill_level();
            state.route.pop();
            state.visited.set(index, false);
        }
    }
}
