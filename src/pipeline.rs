//! Quoting houses one at a time

use crate::calculator;
use crate::error::Result;
use crate::models::{BuildingProfile, Equipment};
use crate::report;
use crate::weather::WeatherProvider;

/// Produce the report for a single house
///
/// The weather lookup is the only suspension point; everything around it
/// is plain computation.
pub async fn quote_house<W: WeatherProvider>(
    house: &BuildingProfile,
    catalog: &[Equipment],
    weather: &W,
) -> Result<String> {
    let heat_loss = calculator::estimate_heat_loss(house)?;

    let climate = weather.fetch(&house.design_region).await?;
    let power_heat_loss = calculator::power_heat_loss(heat_loss, climate.degree_days)?;

    let equipment = calculator::select_equipment(catalog, power_heat_loss)?;
    let selection = calculator::aggregate_costs(equipment);
    tracing::debug!(
        heat_loss,
        power_heat_loss,
        heat_pump = %selection.label,
        capacity_kw = selection.capacity_kw,
        base_cost = selection.base_cost,
        tax = selection.tax,
        "Selected heat pump"
    );

    Ok(report::format_report(
        house,
        heat_loss,
        power_heat_loss,
        &selection,
    ))
}

/// Quote every house in order, handing each report to `emit`
///
/// A failure for one house is logged and counted; the batch carries on.
pub async fn quote_all<W, F>(
    houses: &[BuildingProfile],
    catalog: &[Equipment],
    weather: &W,
    mut emit: F,
) -> BatchSummary
where
    W: WeatherProvider,
    F: FnMut(&str),
{
    let mut summary = BatchSummary::default();

    for house in houses {
        tracing::info!("Processing Submission ID: {}", house.id);
        summary.processed += 1;

        match quote_house(house, catalog, weather).await {
            Ok(report) => {
                emit(&report);
                summary.quoted += 1;
            }
            Err(e) => {
                tracing::error!(submission_id = %house.id, "Error processing house {}: {}", house.id, e);
                summary.failed.push(house.id.clone());
            }
        }
    }

    summary
}

#[derive(Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub processed: usize,
    pub quoted: usize,
    pub failed: Vec<String>,
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Processed {} houses: {} quoted, {} failed",
            self.processed,
            self.quoted,
            self.failed.len()
        )?;
        if !self.failed.is_empty() {
            write!(f, " ({})", self.failed.join(", "))?;
        }
        Ok(())
    }
}
