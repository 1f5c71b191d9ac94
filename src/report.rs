//! Plain-text quote report

use crate::models::{BuildingProfile, SelectionResult};

const RULE_WIDTH: usize = 38;

/// Format a quote for one house
///
/// Equipment cost lines print as whole numbers when they have no
/// fractional part; the VAT line and the total always carry two decimals.
pub fn format_report(
    profile: &BuildingProfile,
    heat_loss: f64,
    power_heat_loss: f64,
    selection: &SelectionResult,
) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str(&format!("{}\n{}\n{}\n", rule, profile.id, rule));
    output.push_str(&format!("  Estimated Heat Loss = {:.1} kWh\n", heat_loss));
    output.push_str(&format!("  Design Region = {}\n", profile.design_region));
    output.push_str(&format!("  Power Heat Loss = {:.3} kW\n", power_heat_loss));
    output.push_str(&format!("  Recommended Heat Pump = {}\n", selection.label));
    output.push_str("  Cost Breakdown\n");

    for item in selection.base_items() {
        output.push_str(&format!("    {}, {}\n", item.label, format_cost(item.cost)));
    }
    if let Some(tax) = selection.tax_item() {
        output.push_str(&format!("    {}, {:.2}\n", tax.label, tax.cost));
    }

    output.push_str(&format!(
        "  Total Cost, including VAT = {:.2}",
        selection.total_cost
    ));

    output
}

fn format_cost(cost: f64) -> String {
    // -0.0 + 0.0 is +0.0
    let cost = cost + 0.0;
    if cost.fract() == 0.0 {
        format!("{:.0}", cost)
    } else {
        format!("{:.2}", cost)
    }
}
