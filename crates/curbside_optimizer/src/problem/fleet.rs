use parking_lot::Mutex;

use super::{
    vehicle::{Vehicle, VehicleIdx},
    waste_bin::WasteCategory,
};

pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Fleet { vehicles }
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

/// A claimed pool slot. Holding an entry means the vehicle is reserved for
/// one zone; restoring it puts the vehicle back in capacity order.
#[derive(Debug, Clone, Copy)]
pub struct PoolEntry {
    vehicle_id: VehicleIdx,
    capacity: f64,
    specialty: Option<WasteCategory>,
}

impl PoolEntry {
    pub fn vehicle_id(&self) -> VehicleIdx {
        self.vehicle_id
    }
}

/// Claim/restore view over a fleet for one assignment run. Claims are
/// atomic read-modify-write operations, so per-zone searches may run
/// concurrently without two zones claiming the same vehicle. Order is
/// capacity-descending, fixed at construction, ties broken by vehicle
/// index.
pub struct VehiclePool {
    available: Mutex<Vec<PoolEntry>>,
}

impl VehiclePool {
    pub fn new(fleet: &Fleet) -> Self {
        let mut entries: Vec<PoolEntry> = fleet
            .vehicles()
            .iter()
            .enumerate()
            .map(|(index, vehicle)| PoolEntry {
                vehicle_id: VehicleIdx::new(index),
                capacity: vehicle.capacity(),
                specialty: vehicle.specialty(),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.capacity
                .total_cmp(&a.capacity)
                .then(a.vehicle_id.cmp(&b.vehicle_id))
        });

        VehiclePool {
            available: Mutex::new(entries),
        }
    }

    /// Claims the largest remaining vehicle with the given specialty, if any.
    pub fn claim_specialized(&self, category: WasteCategory) -> Option<PoolEntry> {
        let mut available = self.available.lock();
        let position = available
            .iter()
            .position(|entry| entry.specialty == Some(category))?;

        Some(available.remove(position))
    }

    /// Claims the largest remaining vehicle regardless of specialty.
    pub fn claim_largest(&self) -> Option<PoolEntry> {
        let mut available = self.available.lock();
        if available.is_empty() {
            return None;
        }

        Some(available.remove(0))
    }

    /// Returns an unconsumed claim to the pool, keeping capacity order.
    pub fn restore(&self, entry: PoolEntry) {
        let mut available = self.available.lock();
        let position = available
            .iter()
            .position(|other| {
                entry
                    .capacity
                    .total_cmp(&other.capacity)
                    .then(other.vehicle_id.cmp(&entry.vehicle_id))
                    .is_gt()
            })
            .unwrap_or(available.len());

        available.insert(position, entry);
    }

    pub fn remaining(&self) -> usize {
        self.available.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Fleet, VehiclePool};
    use crate::problem::{vehicle::VehicleBuilder, waste_bin::WasteCategory};

    fn fleet() -> Fleet {
        let specs = [
            ("v1", 1200.0, Some(WasteCategory::Recyclable)),
            ("v2", 1000.0, Some(WasteCategory::NonRecyclable)),
            ("v3", 1500.0, None),
            ("v4", 800.0, Some(WasteCategory::Recyclable)),
            ("v5", 900.0, None),
        ];

        Fleet::new(
            specs
                .iter()
                .map(|(id, capacity, specialty)| {
                    let mut builder = VehicleBuilder::default();
                    builder.set_vehicle_id(String::from(*id));
                    builder.set_capacity(*capacity);
                    if let Some(specialty) = specialty {
                        builder.set_specialty(*specialty);
                    }
                    builder.build()
                })
                .collect(),
        )
    }

    #[test]
    fn test_claims_follow_capacity_order() {
        let fleet = fleet();
        let pool = VehiclePool::new(&fleet);

        let first = pool.claim_largest().unwrap();
        assert_eq!(fleet.vehicle(first.vehicle_id()).external_id(), "v3");

        let second = pool.claim_largest().unwrap();
        assert_eq!(fleet.vehicle(second.vehicle_id()).external_id(), "v1");

        assert_eq!(pool.remaining(), 3);
    }

    #[test]
    fn test_specialized_claim_takes_largest_match() {
        let fleet = fleet();
        let pool = VehiclePool::new(&fleet);

        let entry = pool.claim_specialized(WasteCategory::Recyclable).unwrap();
        assert_eq!(fleet.vehicle(entry.vehicle_id()).external_id(), "v1");

        let entry = pool.claim_specialized(WasteCategory::Recyclable).unwrap();
        assert_eq!(fleet.vehicle(entry.vehicle_id()).external_id(), "v4");

        assert!(pool.claim_specialized(WasteCategory::Recyclable).is_none());
        assert_eq!(pool.remaining(), 3);
    }

    #[test]
    fn test_restore_keeps_capacity_order() {
        let fleet = fleet();
        let pool = VehiclePool::new(&fleet);

        let claimed = pool.claim_specialized(WasteCategory::NonRecyclable).unwrap();
        assert_eq!(fleet.vehicle(claimed.vehicle_id()).external_id(), "v2");

        pool.restore(claimed);
        assert_eq!(pool.remaining(), 5);

        // v3 (1500) and v1 (1200) still come out ahead of the restored v2.
        let ids: Vec<&str> = std::iter::from_fn(|| pool.claim_largest())
            .map(|entry| fleet.vehicle(entry.vehicle_id()).external_id())
            .collect();
        assert_eq!(ids, vec!["v3", "v1", "v2", "v5", "v4"]);
    }
}
