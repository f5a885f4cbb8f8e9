use fxhash::FxHashMap;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::problem::{
    collection_problem::CollectionProblem,
    fleet::VehiclePool,
    location::Location,
    vehicle::VehicleIdx,
    waste_bin::WasteCategory,
    zone::{Zone, ZoneIdx},
};

use super::{
    route_search::{RouteSearch, RouteStops},
    search_params::RouteSearchParams,
};

/// Needing-emptying fill totals for one zone, split by category. Drives
/// both the zone ranking (by total) and the specialized-vehicle matching
/// (by dominant category).
#[derive(Debug, Clone, Copy, Default)]
pub struct WasteProfile {
    pub recyclable: f64,
    pub non_recyclable: f64,
    pub mixed: f64,
}

impl WasteProfile {
    pub fn of_zone(problem: &CollectionProblem, zone: &Zone) -> Self {
        let mut profile = WasteProfile::default();

        for &bin_id in zone.bins() {
            let bin = problem.bin(bin_id);
            if !bin.needs_emptying() {
                continue;
            }

            match bin.category() {
                WasteCategory::Recyclable => profile.recyclable += bin.fill_level(),
                WasteCategory::NonRecyclable => profile.non_recyclable += bin.fill_level(),
                WasteCategory::Mixed => profile.mixed += bin.fill_level(),
            }
        }

        profile
    }

    pub fn total(&self) -> f64 {
        self.recyclable + self.non_recyclable + self.mixed
    }

    /// The category strictly exceeding both others, if any.
    pub fn dominant_category(&self) -> Option<WasteCategory> {
        if self.recyclable > self.non_recyclable && self.recyclable > self.mixed {
            Some(WasteCategory::Recyclable)
        } else if self.non_recyclable > self.recyclable && self.non_recyclable > self.mixed {
            Some(WasteCategory::NonRecyclable)
        } else if self.mixed > self.recyclable && self.mixed > self.non_recyclable {
            Some(WasteCategory::Mixed)
        } else {
            None
        }
    }
}

/// One finalized zone assignment. Immutable once produced; later phases
/// never touch a finalized route.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneAssignment {
    pub zone_id: ZoneIdx,
    pub vehicle_id: VehicleIdx,
    pub stops: RouteStops,
    pub distance: f64,
    pub load: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct AssignmentPlan {
    assignments: FxHashMap<ZoneIdx, ZoneAssignment>,
    unassigned: Vec<ZoneIdx>,
}

impl AssignmentPlan {
    pub fn assignments(&self) -> &FxHashMap<ZoneIdx, ZoneAssignment> {
        &self.assignments
    }

    pub fn assignment(&self, zone_id: ZoneIdx) -> Option<&ZoneAssignment> {
        self.assignments.get(&zone_id)
    }

    pub fn is_assigned(&self, zone_id: ZoneIdx) -> bool {
        self.assignments.contains_key(&zone_id)
    }

    /// Zones left without a vehicle or without a route, in ranking order.
    pub fn unassigned(&self) -> &[ZoneIdx] {
        &self.unassigned
    }

    pub fn total_distance(&self) -> f64 {
        self.assignments
            .values()
            .map(|assignment| assignment.distance)
            .sum()
    }
}

/// Two-phase truck-to-zone assignment. Phase one matches specialized
/// vehicles to zones dominated by their waste category; phase two hands the
/// remaining zones the largest remaining vehicles. Each vehicle serves at
/// most one zone per run and leftover capacity is never rebalanced.
pub struct FleetAssigner {
    search: RouteSearch,
}

impl FleetAssigner {
    pub fn new(params: RouteSearchParams) -> Self {
        FleetAssigner {
            search: RouteSearch::new(params),
        }
    }

    pub fn assign(&self, problem: &CollectionProblem) -> AssignmentPlan {
        // Collection start point: the depot at the map origin.
        let start = Location::from_cartesian(0.0, 0.0);

        let profiles: Vec<WasteProfile> = problem
            .zones()
            .par_iter()
            .map(|zone| WasteProfile::of_zone(problem, zone))
            .collect();

        let mut order: Vec<ZoneIdx> = (0..problem.zones().len()).map(ZoneIdx::new).collect();
        order.sort_by(|&a, &b| {
            profiles[b.get()]
                .total()
                .total_cmp(&profiles[a.get()].total())
                .then(a.cmp(&b))
        });

        let pool = VehiclePool::new(problem.fleet());
        let mut plan = AssignmentPlan::default();

        // Phase 1: specialized vehicles to dominant-category zones.
        for &zone_id in &order {
            let Some(category) = profiles[zone_id.get()].dominant_category() else {
                continue;
            };
            let Some(entry) = pool.claim_specialized(category) else {
                continue;
            };

            let vehicle = problem.vehicle(entry.vehicle_id());
            let result =
                self.search
                    .search(problem, vehicle, problem.zone(zone_id).bins(), Some(&start));

            if result.is_empty() {
                // The vehicle is not consumed; the zone is retried in
                // phase 2.
                pool.restore(entry);
                continue;
            }

            debug!(
                zone = problem.zone(zone_id).name(),
                vehicle = vehicle.external_id(),
                category = %category,
                "specialized assignment"
            );
            plan.assignments
                .insert(zone_id, self.finalize(problem, zone_id, entry.vehicle_id(), result));
        }

        // Phase 2: remaining zones by volume, largest vehicles first.
        for &zone_id in &order {
            if plan.is_assigned(zone_id) {
                continue;
            }

            let Some(entry) = pool.claim_largest() else {
                continue;
            };

            let vehicle = problem.vehicle(entry.vehicle_id());
            let result =
                self.search
                    .search(problem, vehicle, problem.zone(zone_id).bins(), Some(&start));

            if result.is_empty() {
                // No further vehicle is tried for this zone in this run.
                continue;
            }

            debug!(
                zone = problem.zone(zone_id).name(),
                vehicle = vehicle.external_id(),
                "capacity assignment"
            );
            plan.assignments
                .insert(zone_id, self.finalize(problem, zone_id, entry.vehicle_id(), result));
        }

        plan.unassigned = order
            .iter()
            .copied()
            .filter(|&zone_id| !plan.is_assigned(zone_id))
            .collect();

        info!(
            zones = problem.zones().len(),
            assigned = plan.assignments.len(),
            unassigned = plan.unassigned.len(),
            total_distance = plan.total_distance(),
            "assignment complete"
        );

        plan
    }

    fn finalize(
        &self,
        problem: &CollectionProblem,
        zone_id: ZoneIdx,
        vehicle_id: VehicleIdx,
        result: super::route_search::RouteSearchResult,
    ) -> ZoneAssignment {
        let load = result
            .stops
            .iter()
            .map(|&bin_id| problem.bin(bin_id).fill_level())
            .sum();

        ZoneAssignment {
            zone_id,
            vehicle_id,
            stops: result.stops,
            distance: result.distance,
            load,
        }
    }
}
