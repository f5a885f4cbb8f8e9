use std::path::Path;

use fxhash::FxHashMap;
use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, warn};

use crate::problem::{
    collection_problem::{CollectionProblem, CollectionProblemBuilder},
    location::{Location, LocationIdx},
    waste_bin::{WasteBin, WasteBinBuilder, ContainerShape},
    zone::Zone,
};

use super::{
    bins_csv,
    parser::DatasetLoader,
    synthetic::{self, PlacedBin},
    zones_csv,
};

/// Loads a `CollectionProblem` from a data directory containing
/// `zones.csv`, `zone_adjacency.csv` and `bins.csv`. Any missing file is
/// replaced by synthetic defaults generated from the configured seed, so a
/// bare directory still yields a runnable instance.
pub struct CsvDatasetLoader {
    /// Cap on loaded bins, matching the upstream dataset handling.
    pub bin_limit: usize,
    /// Seed for generated locations and synthetic fallbacks.
    pub seed: u64,
}

impl Default for CsvDatasetLoader {
    fn default() -> Self {
        Self {
            bin_limit: 100,
            seed: 0,
        }
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, anyhow::Error> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error.into()),
    }
}

impl DatasetLoader for CsvDatasetLoader {
    fn load<P: AsRef<Path>>(&self, dir: P) -> Result<CollectionProblem, anyhow::Error> {
        let dir = dir.as_ref();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let zone_records = match read_optional(&dir.join("zones.csv"))? {
            Some(text) => zones_csv::parse_zones(&text)?,
            None => {
                warn!("zones.csv not found, using the default city map");
                synthetic::default_zone_records(&mut rng)
            }
        };

        let adjacency_records = match read_optional(&dir.join("zone_adjacency.csv"))? {
            Some(text) => zones_csv::parse_adjacency(&text)?,
            None => synthetic::default_adjacency_records(),
        };

        let placed_bins: Vec<PlacedBin> = match read_optional(&dir.join("bins.csv"))? {
            Some(text) => bins_csv::parse_bins(&text)?
                .into_iter()
                .take(self.bin_limit)
                .map(|record| {
                    synthetic::place_bin(
                        record.fill_level,
                        record.category,
                        record.container,
                        &mut rng,
                    )
                })
                .collect(),
            None => {
                warn!("bins.csv not found, generating synthetic bins");
                synthetic::synthetic_bins(30, &mut rng)
            }
        };

        debug!(
            zones = zone_records.len(),
            edges = adjacency_records.len(),
            bins = placed_bins.len(),
            "dataset loaded"
        );

        let mut locations: Vec<Location> = zone_records
            .iter()
            .map(|record| Location::from_cartesian(record.centroid_x, record.centroid_y))
            .collect();

        let index_of_zone: FxHashMap<u32, usize> = zone_records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.zone_id, index))
            .collect();

        let zones: Vec<Zone> = zone_records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Zone::new(
                    record.zone_id.to_string(),
                    record.name.clone(),
                    LocationIdx::new(index),
                )
            })
            .collect();

        let bins: Vec<WasteBin> = placed_bins
            .into_iter()
            .enumerate()
            .map(|(index, placed)| {
                let location_id = locations.len();
                locations.push(Location::from_cartesian(placed.x, placed.y));

                let mut builder = WasteBinBuilder::default();
                builder.set_external_id(format!("bin-{}", index + 1));
                builder.set_location_id(location_id);
                builder.set_capacity(placed.capacity);
                builder.set_fill_level(placed.fill_level);
                builder.set_category(placed.category);
                builder.set_container(ContainerShape::new(placed.container));
                builder.build()
            })
            .collect();

        let mut builder = CollectionProblemBuilder::default();

        // Unknown zone identities in the adjacency file are ignored.
        for record in adjacency_records {
            let (Some(&a), Some(&b)) = (
                index_of_zone.get(&record.zone_a),
                index_of_zone.get(&record.zone_b),
            ) else {
                debug!(
                    zone_a = record.zone_a,
                    zone_b = record.zone_b,
                    "adjacency references unknown zone, skipping"
                );
                continue;
            };
            builder.add_adjacency(a, b);
        }

        builder.set_locations(locations);
        builder.set_zones(zones);
        builder.set_bins(bins);
        builder.set_fleet(synthetic::default_fleet());

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::CsvDatasetLoader;
    use crate::parsers::parser::DatasetLoader;

    fn write_dataset(dir: &std::path::Path) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(
            dir.join("zones.csv"),
            "zone_id,name,centroid_x,centroid_y\n\
             1,Downtown,25.0,25.0\n\
             2,Westside,10.0,25.0\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("zone_adjacency.csv"),
            "zone1_id,zone2_id\n1,2\n1,99\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("bins.csv"),
            "Container Type,Recyclable fraction,FL_B\n\
             Cubic,Recyclable,82.5\n\
             Rectangular,Mixed,30\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_from_csv_files() {
        let dir = std::env::temp_dir().join("curbside-dataset-test");
        write_dataset(&dir);

        let loader = CsvDatasetLoader::default();
        let problem = loader.load(&dir).unwrap();

        assert_eq!(problem.zones().len(), 2);
        assert_eq!(problem.bins().len(), 2);
        assert_eq!(problem.fleet().len(), 5);

        // The edge referencing the unknown zone 99 was dropped.
        assert_eq!(problem.zones()[0].degree(), 1);
        assert_eq!(problem.zones()[1].degree(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_directory_yields_synthetic_instance() {
        let loader = CsvDatasetLoader {
            seed: 13,
            ..CsvDatasetLoader::default()
        };

        let problem = loader
            .load("/nonexistent/curbside-data")
            .expect("synthetic fallback");

        assert_eq!(problem.zones().len(), 5);
        assert_eq!(problem.bins().len(), 30);
    }

    #[test]
    fn test_synthetic_fallback_is_deterministic_per_seed() {
        let loader = CsvDatasetLoader {
            seed: 21,
            ..CsvDatasetLoader::default()
        };

        let first = loader.load("/nonexistent/curbside-data").unwrap();
        let second = loader.load("/nonexistent/curbside-data").unwrap();

        let fills = |problem: &crate::problem::collection_problem::CollectionProblem| {
            problem
                .bins()
                .iter()
                .map(|bin| bin.fill_level())
                .collect::<Vec<f64>>()
        };
        assert_eq!(fills(&first), fills(&second));
    }
}
