use crate::problem::{
    collection_problem::{CollectionProblem, CollectionProblemBuilder},
    fleet::Fleet,
    location::{Location, LocationIdx},
    vehicle::{Vehicle, VehicleBuilder},
    waste_bin::{BinIdx, WasteBin, WasteBinBuilder, WasteCategory},
    zone::{Zone, ZoneIdx},
};

pub fn create_locations(points: Vec<(f64, f64)>) -> Vec<Location> {
    points
        .iter()
        .map(|&(x, y)| Location::from_cartesian(x, y))
        .collect()
}

pub fn create_vehicles(specs: Vec<(f64, Option<WasteCategory>)>) -> Vec<Vehicle> {
    specs
        .iter()
        .enumerate()
        .map(|(index, &(capacity, specialty))| {
            let mut builder = VehicleBuilder::default();
            builder.set_vehicle_id(format!("v{}", index + 1));
            builder.set_capacity(capacity);
            if let Some(specialty) = specialty {
                builder.set_specialty(specialty);
            }
            builder.build()
        })
        .collect()
}

fn create_bin(index: usize, location_id: usize, fill: f64, category: WasteCategory) -> WasteBin {
    let mut builder = WasteBinBuilder::default();
    builder.set_external_id(format!("bin-{}", index + 1));
    builder.set_location_id(location_id);
    builder.set_fill_level(fill);
    builder.set_category(category);
    builder.build()
}

pub fn zone_bins(problem: &CollectionProblem, zone: usize) -> &[BinIdx] {
    problem.zone(ZoneIdx::new(zone)).bins()
}

/// One zone centered at the origin with the given bins and fleet.
pub fn single_zone_problem(
    bins: Vec<(f64, f64, f64, WasteCategory)>,
    vehicles: Vec<(f64, Option<WasteCategory>)>,
) -> CollectionProblem {
    let mut locations = vec![Location::from_cartesian(0.0, 0.0)];
    let mut waste_bins = Vec::new();

    for (index, &(x, y, fill, category)) in bins.iter().enumerate() {
        locations.push(Location::from_cartesian(x, y));
        waste_bins.push(create_bin(index, index + 1, fill, category));
    }

    let mut builder = CollectionProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_zones(vec![Zone::new(
        String::from("1"),
        String::from("Single"),
        LocationIdx::new(0),
    )]);
    builder.set_bins(waste_bins);
    builder.set_fleet(Fleet::new(create_vehicles(vehicles)));
    builder.build()
}

/// Two zones, centroids at the origin and at (40, 40), adjacent to each
/// other. Bins in `bins_a` should sit near the origin, `bins_b` near
/// (40, 40), so centroid attachment lands them in the intended zone.
pub fn two_zone_problem(
    bins_a: Vec<(f64, f64, f64, WasteCategory)>,
    bins_b: Vec<(f64, f64, f64, WasteCategory)>,
    vehicles: Vec<(f64, Option<WasteCategory>)>,
) -> CollectionProblem {
    let mut locations = create_locations(vec![(0.0, 0.0), (40.0, 40.0)]);
    let mut waste_bins = Vec::new();

    for (index, &(x, y, fill, category)) in bins_a.iter().chain(bins_b.iter()).enumerate() {
        locations.push(Location::from_cartesian(x, y));
        waste_bins.push(create_bin(index, index + 2, fill, category));
    }

    let mut builder = CollectionProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_zones(vec![
        Zone::new(String::from("1"), String::from("West"), LocationIdx::new(0)),
        Zone::new(String::from("2"), String::from("East"), LocationIdx::new(1)),
    ]);
    builder.add_adjacency(0, 1);
    builder.set_bins(waste_bins);
    builder.set_fleet(Fleet::new(create_vehicles(vehicles)));
    builder.build()
}

pub fn five_zone_builder() -> CollectionProblemBuilder {
    let centroids = [
        ("Downtown", 25.0, 25.0),
        ("Westside", 10.0, 25.0),
        ("Eastside", 40.0, 25.0),
        ("Northside", 25.0, 40.0),
        ("Southside", 25.0, 10.0),
    ];

    let bins = [
        (24.0, 24.0, 90.0, WasteCategory::Mixed),
        (26.0, 25.0, 75.0, WasteCategory::NonRecyclable),
        (25.0, 27.0, 68.0, WasteCategory::Recyclable),
        (23.0, 26.0, 30.0, WasteCategory::Mixed),
        (8.0, 24.0, 85.0, WasteCategory::Recyclable),
        (11.0, 26.0, 70.0, WasteCategory::Recyclable),
        (9.0, 23.0, 40.0, WasteCategory::Mixed),
        (39.0, 24.0, 88.0, WasteCategory::NonRecyclable),
        (41.0, 26.0, 72.0, WasteCategory::NonRecyclable),
        (40.0, 23.0, 20.0, WasteCategory::Recyclable),
        (24.0, 39.0, 80.0, WasteCategory::Mixed),
        (26.0, 41.0, 67.0, WasteCategory::Mixed),
        (24.0, 9.0, 92.0, WasteCategory::Recyclable),
        (26.0, 11.0, 66.0, WasteCategory::Mixed),
        (25.0, 8.0, 35.0, WasteCategory::NonRecyclable),
    ];

    let mut locations: Vec<Location> = centroids
        .iter()
        .map(|&(_, x, y)| Location::from_cartesian(x, y))
        .collect();
    let zones: Vec<Zone> = centroids
        .iter()
        .enumerate()
        .map(|(index, &(name, _, _))| {
            Zone::new(format!("{}", index + 1), String::from(name), LocationIdx::new(index))
        })
        .collect();

    let mut waste_bins = Vec::new();
    for (index, &(x, y, fill, category)) in bins.iter().enumerate() {
        locations.push(Location::from_cartesian(x, y));
        waste_bins.push(create_bin(index, centroids.len() + index, fill, category));
    }

    let mut builder = CollectionProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_zones(zones);
    builder.set_bins(waste_bins);
    builder.set_fleet(Fleet::new(create_vehicles(vec![
        (1200.0, Some(WasteCategory::Recyclable)),
        (1000.0, Some(WasteCategory::NonRecyclable)),
        (1500.0, None),
        (800.0, Some(WasteCategory::Recyclable)),
        (900.0, None),
    ])));

    // The default city map: Downtown touches everything, the cardinal
    // zones touch their neighbors.
    builder.add_adjacency(0, 1);
    builder.add_adjacency(0, 2);
    builder.add_adjacency(0, 3);
    builder.add_adjacency(0, 4);
    builder.add_adjacency(1, 3);
    builder.add_adjacency(2, 3);
    builder.add_adjacency(2, 4);

    builder
}

pub fn five_zone_problem() -> CollectionProblem {
    five_zone_builder().build()
}

/// `count` zones joined in a cycle, without bins.
pub fn zone_ring_builder(count: usize) -> CollectionProblemBuilder {
    let locations: Vec<Location> = (0..count)
        .map(|index| Location::from_cartesian(index as f64 * 10.0, 0.0))
        .collect();
    let zones: Vec<Zone> = (0..count)
        .map(|index| {
            Zone::new(
                format!("{}", index + 1),
                format!("ring-{index}"),
                LocationIdx::new(index),
            )
        })
        .collect();

    let mut builder = CollectionProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_zones(zones);
    builder.set_bins(Vec::new());
    builder.set_fleet(Fleet::new(create_vehicles(vec![(1000.0, None)])));

    for index in 0..count {
        builder.add_adjacency(index, (index + 1) % count);
    }

    builder
}

pub fn isolated_zones_problem(count: usize) -> CollectionProblem {
    let locations: Vec<Location> = (0..count)
        .map(|index| Location::from_cartesian(index as f64 * 10.0, 0.0))
        .collect();
    let zones: Vec<Zone> = (0..count)
        .map(|index| {
            Zone::new(
                format!("{}", index + 1),
                format!("solo-{index}"),
                LocationIdx::new(index),
            )
        })
        .collect();

    let mut builder = CollectionProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_zones(zones);
    builder.set_bins(Vec::new());
    builder.set_fleet(Fleet::new(create_vehicles(vec![(1000.0, None)])));
    builder.build()
}
