//! Heat loss, power requirement, heat pump selection and pricing

use crate::error::{QuoteError, Result};
use crate::models::{BuildingProfile, CostItem, Equipment, SelectionResult};

/// VAT applied to the base cost of every quote
pub const TAX_RATE: f64 = 0.05;
pub const TAX_LABEL: &str = "VAT (5%)";

/// Estimate the seasonal heat loss of a house in kWh
///
/// floor area * heating factor * insulation factor. Every factor must be
/// strictly positive.
pub fn estimate_heat_loss(profile: &BuildingProfile) -> Result<f64> {
    let factors = [
        ("floorArea", profile.floor_area),
        ("heatingFactor", profile.heating_factor),
        ("insulationFactor", profile.insulation_factor),
    ];

    for (field, value) in factors {
        // NaN fails this too
        if !(value > 0.0) {
            return Err(QuoteError::InvalidProfile { field, value });
        }
    }

    Ok(profile.floor_area * profile.heating_factor * profile.insulation_factor)
}

/// Convert seasonal heat loss into the peak power (kW) a heat pump must deliver
pub fn power_heat_loss(heat_loss: f64, degree_days: f64) -> Result<f64> {
    if !(degree_days > 0.0) {
        return Err(QuoteError::InvalidClimateData { degree_days });
    }
    Ok(heat_loss / degree_days)
}

/// Pick the first heat pump, in catalog order, that covers the required power
///
/// Catalog order is the tie-break: a later, cheaper or closer match is never
/// preferred over an earlier one.
pub fn select_equipment(catalog: &[Equipment], required_kw: f64) -> Result<&Equipment> {
    catalog
        .iter()
        .find(|equipment| equipment.capacity_kw >= required_kw)
        .ok_or(QuoteError::NoSuitableEquipment { required_kw })
}

/// Price a heat pump: sum its cost lines and add VAT as a final line
pub fn aggregate_costs(equipment: &Equipment) -> SelectionResult {
    // fold from +0.0: an empty f64 sum() yields -0.0
    let base_cost = equipment.costs.iter().fold(0.0, |acc, item| acc + item.cost);
    let tax = base_cost * TAX_RATE;

    let mut breakdown = Vec::with_capacity(equipment.costs.len() + 1);
    breakdown.extend(equipment.costs.iter().cloned());
    breakdown.push(CostItem::new(TAX_LABEL, tax));

    SelectionResult {
        label: equipment.label.clone(),
        capacity_kw: equipment.capacity_kw,
        base_cost,
        tax,
        total_cost: base_cost + tax,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile(floor_area: f64, heating_factor: f64, insulation_factor: f64) -> BuildingProfile {
        BuildingProfile {
            id: "house-1".to_string(),
            floor_area,
            heating_factor,
            insulation_factor,
            design_region: "Borders (Boulmer)".to_string(),
        }
    }

    fn pump(label: &str, capacity_kw: f64, costs: &[(&str, f64)]) -> Equipment {
        Equipment {
            label: label.to_string(),
            capacity_kw,
            costs: costs.iter().map(|(l, c)| CostItem::new(*l, *c)).collect(),
        }
    }

    #[test]
    fn heat_loss_is_product_of_factors() {
        let cases = [(100.0, 1.2, 0.8), (92.0, 101.0, 1.3), (0.5, 0.25, 4.0)];
        for (area, heating, insulation) in cases {
            let heat_loss = estimate_heat_loss(&profile(area, heating, insulation)).unwrap();
            assert_relative_eq!(heat_loss, area * heating * insulation);
        }
    }

    #[test]
    fn heat_loss_rejects_non_positive_factors() {
        assert_eq!(
            estimate_heat_loss(&profile(0.0, 1.2, 0.8)),
            Err(QuoteError::InvalidProfile { field: "floorArea", value: 0.0 })
        );
        assert_eq!(
            estimate_heat_loss(&profile(100.0, -1.0, 0.8)),
            Err(QuoteError::InvalidProfile { field: "heatingFactor", value: -1.0 })
        );
        assert!(matches!(
            estimate_heat_loss(&profile(100.0, 1.2, f64::NAN)),
            Err(QuoteError::InvalidProfile { field: "insulationFactor", .. })
        ));
    }

    #[test]
    fn power_heat_loss_divides_by_degree_days() {
        assert_relative_eq!(power_heat_loss(29710.8, 2483.0).unwrap(), 29710.8 / 2483.0);
        assert_relative_eq!(power_heat_loss(96.0, 2483.0).unwrap(), 0.038663, epsilon = 1e-6);
    }

    #[test]
    fn power_heat_loss_rejects_non_positive_degree_days() {
        for heat_loss in [5000.0, 0.0, -12.5, 1e12] {
            for degree_days in [0.0, -0.0, -2483.0] {
                assert!(matches!(
                    power_heat_loss(heat_loss, degree_days),
                    Err(QuoteError::InvalidClimateData { .. })
                ));
            }
        }
    }

    #[test]
    fn selects_first_pump_meeting_requirement() {
        let catalog = vec![
            pump("HP-1000", 5.0, &[("Unit", 5000.0)]),
            pump("HP-2000", 10.0, &[("Unit", 8000.0)]),
            pump("HP-3000", 15.0, &[("Unit", 12000.0)]),
        ];

        let selected = select_equipment(&catalog, 8.0).unwrap();
        assert_eq!(selected.label, "HP-2000");

        // Exact capacity qualifies
        let selected = select_equipment(&catalog, 5.0).unwrap();
        assert_eq!(selected.label, "HP-1000");
    }

    #[test]
    fn selection_follows_catalog_order_not_best_fit() {
        let catalog = vec![
            pump("Large", 16.0, &[("Unit", 9000.0)]),
            pump("Small", 5.0, &[("Unit", 4000.0)]),
        ];

        let selected = select_equipment(&catalog, 4.0).unwrap();
        assert_eq!(selected.label, "Large");
    }

    #[test]
    fn selection_fails_when_nothing_is_big_enough() {
        let catalog = vec![pump("HP-1000", 5.0, &[]), pump("HP-2000", 6.0, &[])];
        assert_eq!(
            select_equipment(&catalog, 10.0),
            Err(QuoteError::NoSuitableEquipment { required_kw: 10.0 })
        );
        assert!(matches!(
            select_equipment(&[], 0.1),
            Err(QuoteError::NoSuitableEquipment { .. })
        ));
    }

    #[test]
    fn aggregate_appends_vat_line() {
        let equipment = pump(
            "8kW Package",
            8.0,
            &[("Component Cost", 5000.0), ("Installation Cost", 3000.0)],
        );

        let result = aggregate_costs(&equipment);

        assert_eq!(result.label, "8kW Package");
        assert_relative_eq!(result.base_cost, 8000.0);
        assert_relative_eq!(result.tax, 400.0);
        assert_relative_eq!(result.total_cost, 8400.0);
        assert_eq!(result.breakdown.len(), equipment.costs.len() + 1);
        assert_eq!(result.base_items(), equipment.costs.as_slice());
        assert_eq!(result.tax_item(), Some(&CostItem::new(TAX_LABEL, 400.0)));
    }

    #[test]
    fn breakdown_sums_to_total() {
        let equipment = pump(
            "5kW Package",
            5.0,
            &[("Components", 3947.0), ("Installation", 2900.0), ("Thermostat", 150.5)],
        );

        let result = aggregate_costs(&equipment);
        let sum: f64 = result.breakdown.iter().map(|item| item.cost).sum();

        assert_relative_eq!(sum, result.total_cost, epsilon = 1e-9);
        assert_relative_eq!(result.tax, result.base_cost * TAX_RATE);
    }

    #[test]
    fn empty_cost_list_is_priced_at_zero() {
        let result = aggregate_costs(&pump("Bare", 3.0, &[]));

        assert_eq!(result.base_cost, 0.0);
        assert_eq!(result.tax, 0.0);
        assert_eq!(result.total_cost, 0.0);
        assert!(result.base_cost.is_sign_positive());
        assert!(result.tax.is_sign_positive());
        assert!(result.total_cost.is_sign_positive());
        assert_eq!(result.breakdown, vec![CostItem::new(TAX_LABEL, 0.0)]);
    }
}
