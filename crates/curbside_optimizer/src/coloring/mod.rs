mod zone_coloring;

pub use zone_coloring::{color_zones, conflicting_pairs};
