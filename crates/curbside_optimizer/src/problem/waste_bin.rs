use serde::{Deserialize, Serialize};

use crate::define_index_newtype;

use super::location::LocationIdx;

define_index_newtype!(BinIdx, WasteBin);

/// Fill level above which a bin is flagged for collection.
pub const EMPTYING_THRESHOLD: f64 = 65.0;

/// Nominal bin capacity when the dataset does not override it.
pub const NOMINAL_BIN_CAPACITY: f64 = 100.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasteCategory {
    Recyclable,
    NonRecyclable,
    Mixed,
}

impl WasteCategory {
    /// Parses the category labels used by the Smart-Bin datasets. Unknown
    /// labels are treated as mixed waste.
    pub fn from_label(label: &str) -> WasteCategory {
        match label.trim() {
            "Recyclable" => WasteCategory::Recyclable,
            "Non Recyclable" => WasteCategory::NonRecyclable,
            _ => WasteCategory::Mixed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteCategory::Recyclable => "Recyclable",
            WasteCategory::NonRecyclable => "Non Recyclable",
            WasteCategory::Mixed => "Mixed",
        }
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Descriptive container tag from the dataset ("Cubic", "Silvertop-a", ...).
/// Carried through for reporting, never used by the solver.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerShape(String);

impl ContainerShape {
    pub fn new(shape: String) -> Self {
        ContainerShape(shape)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct WasteBin {
    external_id: String,
    location_id: LocationIdx,
    capacity: f64,
    fill_level: f64,
    category: WasteCategory,
    container: ContainerShape,
}

impl WasteBin {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn location_id(&self) -> LocationIdx {
        self.location_id
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn fill_level(&self) -> f64 {
        self.fill_level
    }

    pub fn category(&self) -> WasteCategory {
        self.category
    }

    pub fn container(&self) -> &ContainerShape {
        &self.container
    }

    pub fn needs_emptying(&self) -> bool {
        self.fill_level > EMPTYING_THRESHOLD
    }

    pub fn fill_percentage(&self) -> f64 {
        (self.fill_level / self.capacity) * 100.0
    }
}

#[derive(Default)]
pub struct WasteBinBuilder {
    external_id: Option<String>,
    location_id: Option<usize>,
    capacity: Option<f64>,
    fill_level: Option<f64>,
    category: Option<WasteCategory>,
    container: Option<ContainerShape>,
}

impl WasteBinBuilder {
    pub fn set_external_id(&mut self, external_id: String) -> &mut WasteBinBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_location_id(&mut self, location_id: usize) -> &mut WasteBinBuilder {
        self.location_id = Some(location_id);
        self
    }

    pub fn set_capacity(&mut self, capacity: f64) -> &mut WasteBinBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn set_fill_level(&mut self, fill_level: f64) -> &mut WasteBinBuilder {
        self.fill_level = Some(fill_level);
        self
    }

    pub fn set_category(&mut self, category: WasteCategory) -> &mut WasteBinBuilder {
        self.category = Some(category);
        self
    }

    pub fn set_container(&mut self, container: ContainerShape) -> &mut WasteBinBuilder {
        self.container = Some(container);
        self
    }

    pub fn build(self) -> WasteBin {
        WasteBin {
            external_id: self.external_id.expect("External ID is required"),
            location_id: self.location_id.expect("Location ID is required").into(),
            capacity: self.capacity.unwrap_or(NOMINAL_BIN_CAPACITY),
            fill_level: self.fill_level.expect("Fill level is required"),
            category: self.category.unwrap_or(WasteCategory::Mixed),
            container: self
                .container
                .unwrap_or_else(|| ContainerShape::new(String::from("Standard"))),
        }
    }
}
