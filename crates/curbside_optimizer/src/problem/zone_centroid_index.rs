use rstar::{RTree, primitives::GeomWithData};

use super::{
    location::Location,
    zone::{Zone, ZoneIdx},
};

type CentroidObject = GeomWithData<[f64; 2], ZoneIdx>;

/// Spatial index over zone centroids, used to attach each bin to its
/// nearest zone at load time.
pub struct ZoneCentroidIndex {
    tree: RTree<CentroidObject>,
}

impl ZoneCentroidIndex {
    pub fn new(zones: &[Zone], locations: &[Location]) -> Self {
        let objects: Vec<CentroidObject> = zones
            .iter()
            .enumerate()
            .map(|(index, zone)| {
                let centroid = &locations[zone.centroid()];
                GeomWithData::new([centroid.x(), centroid.y()], ZoneIdx::new(index))
            })
            .collect();

        ZoneCentroidIndex {
            tree: RTree::bulk_load(objects),
        }
    }

    pub fn nearest_zone(&self, location: &Location) -> Option<ZoneIdx> {
        self.tree
            .nearest_neighbor(&[location.x(), location.y()])
            .map(|object| object.data)
    }
}
