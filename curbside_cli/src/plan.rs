use std::path::PathBuf;

use clap::Args;
use curbside_optimizer::{
    coloring::{color_zones, conflicting_pairs},
    parsers::{dataset::CsvDatasetLoader, parser::DatasetLoader},
    solver::{assignment::FleetAssigner, search_params::RouteSearchParams},
};
use tracing::{info, warn};

use crate::{parsers, report};

#[derive(Args)]
pub struct PlanArgs {
    /// Dataset directory with zones.csv, zone_adjacency.csv and bins.csv.
    /// Missing files are replaced by synthetic defaults.
    #[arg(short = 'd', long)]
    data: PathBuf,

    /// Time budget per zone route search (e.g., "1s", "500ms", "PT5S")
    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "1s")]
    timeout: jiff::SignedDuration,

    /// Cap on bins considered per zone route
    #[arg(long, default_value_t = 10)]
    max_bins: usize,

    /// Number of collection-day colors available for the zone partition
    #[arg(short, long, default_value_t = 4)]
    colors: usize,

    /// Seed for generated bin locations and synthetic fallbacks
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Cap on bins loaded from the dataset
    #[arg(long, default_value_t = 100)]
    bin_limit: usize,

    /// Write the plan as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: PlanArgs) -> Result<(), anyhow::Error> {
    info!("Planning collection for dataset {:?}", args.data);

    let loader = CsvDatasetLoader {
        bin_limit: args.bin_limit,
        seed: args.seed,
    };
    let mut problem = loader.load(&args.data)?;

    color_zones(problem.zones_mut(), args.colors);
    for (a, b) in conflicting_pairs(problem.zones()) {
        warn!(
            "adjacent zones {} and {} share a collection day, consider more colors",
            problem.zone(a).name(),
            problem.zone(b).name()
        );
    }

    let assigner = FleetAssigner::new(RouteSearchParams {
        max_bins: args.max_bins,
        time_budget: args.timeout,
        ..RouteSearchParams::default()
    });
    let plan = assigner.assign(&problem);

    report::print_plan(&problem, &plan);

    if let Some(output) = args.output {
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&output, serde_json::to_string_pretty(&plan)?)?;
        info!("Plan written to {:?}", output);
    }

    Ok(())
}
