use super::{
    fleet::Fleet,
    location::{Location, LocationIdx},
    vehicle::{Vehicle, VehicleIdx},
    waste_bin::{BinIdx, WasteBin},
    zone::{Zone, ZoneIdx},
    zone_centroid_index::ZoneCentroidIndex,
};

/// The in-memory problem instance: zones with symmetric adjacency, bins
/// attached to their nearest zone, and the vehicle roster. Built once at
/// load time; the solver only reads it (coloring writes zone colors).
pub struct CollectionProblem {
    locations: Vec<Location>,
    zones: Vec<Zone>,
    bins: Vec<WasteBin>,
    fleet: Fleet,
}

impl CollectionProblem {
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zones_mut(&mut self) -> &mut [Zone] {
        &mut self.zones
    }

    pub fn zone(&self, zone_id: ZoneIdx) -> &Zone {
        &self.zones[zone_id]
    }

    pub fn bins(&self) -> &[WasteBin] {
        &self.bins
    }

    pub fn bin(&self, bin_id: BinIdx) -> &WasteBin {
        &self.bins[bin_id]
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, location_id: LocationIdx) -> &Location {
        &self.locations[location_id]
    }

    pub fn bin_location(&self, bin_id: BinIdx) -> &Location {
        &self.locations[self.bins[bin_id].location_id()]
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        self.fleet.vehicle(vehicle_id)
    }
}

#[derive(Default)]
pub struct CollectionProblemBuilder {
    locations: Option<Vec<Location>>,
    zones: Option<Vec<Zone>>,
    bins: Option<Vec<WasteBin>>,
    fleet: Option<Fleet>,
    adjacencies: Vec<(usize, usize)>,
}

impl CollectionProblemBuilder {
    pub fn set_locations(&mut self, locations: Vec<Location>) -> &mut CollectionProblemBuilder {
        self.locations = Some(locations);
        self
    }

    pub fn add_location(&mut self, location: Location) -> usize {
        let locations = self.locations.get_or_insert_with(Vec::new);
        locations.push(location);
        locations.len() - 1
    }

    pub fn set_zones(&mut self, zones: Vec<Zone>) -> &mut CollectionProblemBuilder {
        self.zones = Some(zones);
        self
    }

    pub fn set_bins(&mut self, bins: Vec<WasteBin>) -> &mut CollectionProblemBuilder {
        self.bins = Some(bins);
        self
    }

    pub fn set_fleet(&mut self, fleet: Fleet) -> &mut CollectionProblemBuilder {
        self.fleet = Some(fleet);
        self
    }

    /// Records an undirected adjacency edge between two zone indices.
    /// Self-loops and out-of-range indices are dropped at build time.
    pub fn add_adjacency(&mut self, a: usize, b: usize) -> &mut CollectionProblemBuilder {
        self.adjacencies.push((a, b));
        self
    }

    pub fn build(self) -> CollectionProblem {
        let locations = self.locations.expect("Expected list of locations");
        let mut zones = self.zones.expect("Expected list of zones");
        let bins = self.bins.unwrap_or_default();
        let fleet = self.fleet.expect("Expected fleet");

        for zone in zones.iter() {
            if zone.centroid().get() >= locations.len() {
                panic!("Zone centroid must be within the range of locations");
            }
        }

        for bin in bins.iter() {
            if bin.location_id().get() >= locations.len() {
                panic!("Bin location_id must be within the range of locations");
            }
        }

        // Both sides of each edge are written in one pass; the hash sets
        // make duplicate edges idempotent.
        for (a, b) in self.adjacencies {
            if a == b || a >= zones.len() || b >= zones.len() {
                continue;
            }

            zones[a].insert_adjacent(ZoneIdx::new(b));
            zones[b].insert_adjacent(ZoneIdx::new(a));
        }

        if !zones.is_empty() {
            let centroid_index = ZoneCentroidIndex::new(&zones, &locations);
            for (index, bin) in bins.iter().enumerate() {
                let location = &locations[bin.location_id()];
                if let Some(zone_id) = centroid_index.nearest_zone(location) {
                    zones[zone_id.get()].add_bin(BinIdx::new(index));
                }
            }
        }

        CollectionProblem {
            locations,
            zones,
            bins,
            fleet,
        }
    }
}
