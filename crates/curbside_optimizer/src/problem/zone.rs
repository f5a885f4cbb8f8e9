use fxhash::FxHashSet;
use serde::Serialize;

use crate::define_index_newtype;

use super::{location::LocationIdx, waste_bin::BinIdx};

define_index_newtype!(ZoneIdx, Zone);

/// A color slot in the caller-supplied palette, scanned in ascending order
/// by the partitioner.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorIdx(usize);

impl ColorIdx {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ColorIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A service zone. Adjacency is stored as a set of indices into the flat
/// zone collection, so the symmetric relation carries no owning
/// back-references.
#[derive(Debug, Clone)]
pub struct Zone {
    external_id: String,
    name: String,
    centroid: LocationIdx,
    adjacent: FxHashSet<ZoneIdx>,
    color: Option<ColorIdx>,
    bins: Vec<BinIdx>,
}

impl Zone {
    pub fn new(external_id: String, name: String, centroid: LocationIdx) -> Self {
        Zone {
            external_id,
            name,
            centroid,
            adjacent: FxHashSet::default(),
            color: None,
            bins: Vec::new(),
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn centroid(&self) -> LocationIdx {
        self.centroid
    }

    pub fn adjacent(&self) -> &FxHashSet<ZoneIdx> {
        &self.adjacent
    }

    pub fn is_adjacent_to(&self, other: ZoneIdx) -> bool {
        self.adjacent.contains(&other)
    }

    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub fn color(&self) -> Option<ColorIdx> {
        self.color
    }

    pub fn set_color(&mut self, color: ColorIdx) {
        self.color = Some(color);
    }

    pub fn bins(&self) -> &[BinIdx] {
        &self.bins
    }

    pub(crate) fn insert_adjacent(&mut self, other: ZoneIdx) {
        self.adjacent.insert(other);
    }

    pub(crate) fn add_bin(&mut self, bin_id: BinIdx) {
        self.bins.push(bin_id);
    }
}
