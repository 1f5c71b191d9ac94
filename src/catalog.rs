//! House and heat pump catalogs loaded from JSON files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::{BuildingProfile, CostItem, Equipment, HeatPumpRecord, HouseRecord};

/// Load all houses in file order
pub fn load_houses(path: &Path) -> Result<Vec<BuildingProfile>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    parse_houses(&content).with_context(|| format!("Invalid houses file {}", path.display()))
}

/// Load the heat pump catalog, preserving its order
pub fn load_heat_pumps(path: &Path) -> Result<Vec<Equipment>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    parse_heat_pumps(&content).with_context(|| format!("Invalid heat pump file {}", path.display()))
}

pub fn parse_houses(json: &str) -> Result<Vec<BuildingProfile>> {
    let records: Vec<HouseRecord> = serde_json::from_str(json)?;

    let mut houses = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let house = house_from_record(record).with_context(|| format!("house #{}", index))?;
        houses.push(house);
    }
    Ok(houses)
}

pub fn parse_heat_pumps(json: &str) -> Result<Vec<Equipment>> {
    let records: Vec<HeatPumpRecord> = serde_json::from_str(json)?;

    let mut pumps = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let pump = heat_pump_from_record(record).with_context(|| format!("heat pump #{}", index))?;
        pumps.push(pump);
    }
    Ok(pumps)
}

// Only structural problems are rejected here. A house with a zero or
// negative factor is still loaded and fails on its own during quoting.
fn house_from_record(record: HouseRecord) -> Result<BuildingProfile> {
    if record.submission_id.trim().is_empty() {
        bail!("submissionId is empty");
    }
    if record.design_region.trim().is_empty() {
        bail!("designRegion is empty for {}", record.submission_id);
    }
    for (field, value) in [
        ("floorArea", record.floor_area),
        ("heatingFactor", record.heating_factor),
        ("insulationFactor", record.insulation_factor),
    ] {
        if !value.is_finite() {
            bail!("{} is not a finite number for {}", field, record.submission_id);
        }
    }

    Ok(BuildingProfile {
        id: record.submission_id,
        floor_area: record.floor_area,
        heating_factor: record.heating_factor,
        insulation_factor: record.insulation_factor,
        design_region: record.design_region,
    })
}

fn heat_pump_from_record(record: HeatPumpRecord) -> Result<Equipment> {
    if record.label.trim().is_empty() {
        bail!("label is empty");
    }
    if !record.output_capacity.is_finite() || record.output_capacity < 0.0 {
        bail!(
            "outputCapacity of {} must be a non-negative number, got {}",
            record.label,
            record.output_capacity
        );
    }

    let mut costs = Vec::with_capacity(record.costs.len());
    for item in record.costs {
        if !item.cost.is_finite() {
            bail!("cost '{}' of {} is not a finite number", item.label, record.label);
        }
        costs.push(CostItem::new(item.label, item.cost));
    }

    Ok(Equipment {
        label: record.label,
        capacity_kw: record.output_capacity,
        costs,
    })
}
