//! Data models for houses, heat pumps and quotes

use serde::Deserialize;

/// A surveyed house, as supplied by the houses file
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingProfile {
    pub id: String,
    pub floor_area: f64,
    pub heating_factor: f64,
    pub insulation_factor: f64,
    pub design_region: String,
}

/// Degree-day figure for a design region
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateData {
    pub location: String,
    pub degree_days: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostItem {
    pub label: String,
    pub cost: f64,
}

impl CostItem {
    pub fn new(label: impl Into<String>, cost: f64) -> Self {
        Self {
            label: label.into(),
            cost,
        }
    }
}

/// A heat pump package from the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub label: String,
    pub capacity_kw: f64,
    pub costs: Vec<CostItem>,
}

/// Priced recommendation for one house
///
/// `breakdown` holds the equipment's own cost lines in catalog order,
/// followed by exactly one tax line.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    pub label: String,
    pub capacity_kw: f64,
    pub base_cost: f64,
    pub tax: f64,
    pub total_cost: f64,
    pub breakdown: Vec<CostItem>,
}

impl SelectionResult {
    /// Cost lines taken from the equipment, without the tax line
    pub fn base_items(&self) -> &[CostItem] {
        self.breakdown
            .split_last()
            .map(|(_, rest)| rest)
            .unwrap_or(&[])
    }

    pub fn tax_item(&self) -> Option<&CostItem> {
        self.breakdown.last()
    }
}

// Raw records as they appear in the JSON files. Converted into the
// types above by the catalog module.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRecord {
    pub submission_id: String,
    pub floor_area: f64,
    pub heating_factor: f64,
    pub insulation_factor: f64,
    pub design_region: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatPumpRecord {
    pub label: String,
    pub output_capacity: f64,
    #[serde(default)]
    pub costs: Vec<CostRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CostRecord {
    pub label: String,
    pub cost: f64,
}
