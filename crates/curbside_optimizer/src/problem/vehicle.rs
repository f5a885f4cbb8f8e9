use serde::Serialize;

use crate::define_index_newtype;

use super::waste_bin::{WasteBin, WasteCategory};

define_index_newtype!(VehicleIdx, Vehicle);

#[derive(Serialize, Debug, Clone)]
pub struct Vehicle {
    external_id: String,
    capacity: f64,
    specialty: Option<WasteCategory>,
}

impl Vehicle {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn specialty(&self) -> Option<WasteCategory> {
        self.specialty
    }

    /// Specialty rule: a general-purpose vehicle collects anything, a
    /// specialized vehicle collects its own category plus mixed bins.
    pub fn can_collect(&self, bin: &WasteBin) -> bool {
        match self.specialty {
            Some(specialty) => {
                bin.category() == specialty || bin.category() == WasteCategory::Mixed
            }
            None => true,
        }
    }
}

#[derive(Default)]
pub struct VehicleBuilder {
    external_id: Option<String>,
    capacity: Option<f64>,
    specialty: Option<WasteCategory>,
}

impl VehicleBuilder {
    pub fn set_vehicle_id(&mut self, external_id: String) -> &mut VehicleBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_capacity(&mut self, capacity: f64) -> &mut VehicleBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn set_specialty(&mut self, specialty: WasteCategory) -> &mut VehicleBuilder {
        self.specialty = Some(specialty);
        self
    }

    pub fn build(self) -> Vehicle {
        Vehicle {
            external_id: self.external_id.expect("External ID is required"),
            capacity: self.capacity.expect("Capacity is required"),
            specialty: self.specialty,
        }
    }
}
