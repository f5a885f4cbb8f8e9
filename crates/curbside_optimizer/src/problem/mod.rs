pub mod collection_problem;
pub mod fleet;
pub mod location;
pub mod vehicle;
pub mod waste_bin;
pub mod zone;
pub mod zone_centroid_index;
