use rand::{Rng, seq::IndexedRandom};

use crate::problem::{
    fleet::Fleet,
    vehicle::{Vehicle, VehicleBuilder},
    waste_bin::{NOMINAL_BIN_CAPACITY, WasteCategory},
};

use super::zones_csv::{AdjacencyRecord, ZoneRecord};

/// Side length of the square service area bins are scattered over.
pub const SERVICE_AREA_EXTENT: f64 = 50.0;

/// A bin placed on the map, either synthesized outright or built from a
/// dataset row plus a generated location.
#[derive(Debug, Clone)]
pub struct PlacedBin {
    pub x: f64,
    pub y: f64,
    pub capacity: f64,
    pub fill_level: f64,
    pub category: WasteCategory,
    pub container: String,
}

/// The default city map used when no zone file is present. Centroids are
/// drawn from the injected generator so runs stay reproducible per seed.
pub fn default_zone_records<R: Rng>(rng: &mut R) -> Vec<ZoneRecord> {
    ["Downtown", "Westside", "Eastside", "Northside", "Southside"]
        .iter()
        .enumerate()
        .map(|(index, &name)| ZoneRecord {
            zone_id: index as u32 + 1,
            name: String::from(name),
            centroid_x: rng.random_range(10.0..40.0),
            centroid_y: rng.random_range(10.0..40.0),
        })
        .collect()
}

pub fn default_adjacency_records() -> Vec<AdjacencyRecord> {
    [(1, 2), (1, 3), (1, 4), (1, 5), (2, 4), (3, 4), (3, 5)]
        .iter()
        .map(|&(zone_a, zone_b)| AdjacencyRecord { zone_a, zone_b })
        .collect()
}

/// Scatters a dataset bin over the service area.
pub fn place_bin<R: Rng>(
    fill_level: f64,
    category: WasteCategory,
    container: String,
    rng: &mut R,
) -> PlacedBin {
    PlacedBin {
        x: rng.random_range(0.0..SERVICE_AREA_EXTENT),
        y: rng.random_range(0.0..SERVICE_AREA_EXTENT),
        capacity: NOMINAL_BIN_CAPACITY,
        fill_level,
        category,
        container,
    }
}

/// Fully synthetic bins for runs without any dataset.
pub fn synthetic_bins<R: Rng>(count: usize, rng: &mut R) -> Vec<PlacedBin> {
    let capacities = [100.0, 200.0, 300.0];
    let categories = [
        WasteCategory::Recyclable,
        WasteCategory::NonRecyclable,
        WasteCategory::Mixed,
    ];
    let containers = ["Cubic", "Rectangular", "Silvertop-a"];

    (0..count)
        .map(|_| PlacedBin {
            x: rng.random_range(0.0..SERVICE_AREA_EXTENT),
            y: rng.random_range(0.0..SERVICE_AREA_EXTENT),
            capacity: *capacities.choose(rng).unwrap(),
            fill_level: rng.random_range(20.0..95.0),
            category: *categories.choose(rng).unwrap(),
            container: String::from(*containers.choose(rng).unwrap()),
        })
        .collect()
}

/// The fixed collection roster: two recyclable specialists, one
/// non-recyclable specialist and two general-purpose vehicles.
pub fn default_fleet() -> Fleet {
    let specs: [(&str, f64, Option<WasteCategory>); 5] = [
        ("truck-1", 1200.0, Some(WasteCategory::Recyclable)),
        ("truck-2", 1000.0, Some(WasteCategory::NonRecyclable)),
        ("truck-3", 1500.0, None),
        ("truck-4", 800.0, Some(WasteCategory::Recyclable)),
        ("truck-5", 900.0, None),
    ];

    let vehicles: Vec<Vehicle> = specs
        .iter()
        .map(|&(id, capacity, specialty)| {
            let mut builder = VehicleBuilder::default();
            builder.set_vehicle_id(String::from(id));
            builder.set_capacity(capacity);
            if let Some(specialty) = specialty {
                builder.set_specialty(specialty);
            }
            builder.build()
        })
        .collect();

    Fleet::new(vehicles)
}
