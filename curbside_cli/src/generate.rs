use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Subcommand;
use curbside_optimizer::parsers::synthetic;
use rand::{SeedableRng, rngs::SmallRng};
use tracing::info;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Write a synthetic dataset (zones.csv, zone_adjacency.csv, bins.csv)
    Dataset {
        /// Output folder for the CSV files
        #[arg(long, short = 'o')]
        out: PathBuf,

        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Number of bins to generate
        #[arg(short, long, default_value_t = 30)]
        bins: usize,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::Dataset { out, seed, bins } => {
            let mut rng = SmallRng::seed_from_u64(seed);

            let mut zones_csv = String::from("zone_id,name,centroid_x,centroid_y\n");
            for zone in synthetic::default_zone_records(&mut rng) {
                writeln!(
                    zones_csv,
                    "{},{},{:.2},{:.2}",
                    zone.zone_id, zone.name, zone.centroid_x, zone.centroid_y
                )?;
            }

            let mut adjacency_csv = String::from("zone1_id,zone2_id\n");
            for edge in synthetic::default_adjacency_records() {
                writeln!(adjacency_csv, "{},{}", edge.zone_a, edge.zone_b)?;
            }

            let mut bins_csv = String::from("Container Type,Recyclable fraction,FL_B\n");
            for bin in synthetic::synthetic_bins(bins, &mut rng) {
                writeln!(
                    bins_csv,
                    "{},{},{:.1}",
                    bin.container,
                    bin.category.label(),
                    bin.fill_level
                )?;
            }

            std::fs::create_dir_all(&out)?;
            std::fs::write(out.join("zones.csv"), zones_csv)?;
            std::fs::write(out.join("zone_adjacency.csv"), adjacency_csv)?;
            std::fs::write(out.join("bins.csv"), bins_csv)?;

            info!("Dataset written to {:?}", out);
        }
    }

    Ok(())
}
