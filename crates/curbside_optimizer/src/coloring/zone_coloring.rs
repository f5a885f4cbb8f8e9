use fxhash::FxHashSet;
use tracing::debug;

use crate::problem::zone::{ColorIdx, Zone, ZoneIdx};

/// Greedy partitioning of zones into non-conflicting display groups.
///
/// Zones are colored in descending adjacency-degree order (high-degree
/// zones are the hardest to satisfy late), each taking the first palette
/// color unused by an already-colored neighbor. There is no backtracking:
/// when the palette is too small for the adjacency structure the result is
/// best-effort and may leave conflicts, or leave a zone uncolored when all
/// palette colors are taken by its neighbors. Callers needing a hard
/// guarantee should run [`conflicting_pairs`] afterwards.
pub fn color_zones(zones: &mut [Zone], palette_size: usize) {
    let mut order: Vec<usize> = (0..zones.len()).collect();
    order.sort_by_key(|&index| (std::cmp::Reverse(zones[index].degree()), index));

    for index in order {
        let used: FxHashSet<ColorIdx> = zones[index]
            .adjacent()
            .iter()
            .filter_map(|&neighbor| zones[neighbor.get()].color())
            .collect();

        let color = (0..palette_size)
            .map(ColorIdx::new)
            .find(|color| !used.contains(color));

        match color {
            Some(color) => zones[index].set_color(color),
            None => debug!(
                zone = zones[index].external_id(),
                degree = zones[index].degree(),
                "palette exhausted, zone left uncolored"
            ),
        }
    }
}

/// Validation pass over a colored zone set: returns every adjacent pair
/// sharing a color, each edge reported once (lower index first).
pub fn conflicting_pairs(zones: &[Zone]) -> Vec<(ZoneIdx, ZoneIdx)> {
    let mut conflicts = Vec::new();

    for (index, zone) in zones.iter().enumerate() {
        let Some(color) = zone.color() else { continue };

        for &neighbor in zone.adjacent() {
            if neighbor.get() > index && zones[neighbor.get()].color() == Some(color) {
                conflicts.push((ZoneIdx::new(index), neighbor));
            }
        }
    }

    conflicts.sort();
    conflicts
}
