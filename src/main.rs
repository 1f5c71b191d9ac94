//! Heat pump quoting
//!
//! Estimates each surveyed house's heat loss, normalises it against the
//! degree days of its design region, recommends a heat pump from the
//! catalog and prints a costed quote.

mod calculator;
mod catalog;
mod error;
mod models;
mod pipeline;
mod report;
mod settings;
mod weather;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};

use crate::settings::Settings;
use crate::weather::HttpWeatherProvider;

#[derive(Parser)]
#[command(name = "heatpump-quote")]
#[command(about = "Heat loss estimation and heat pump quotes for surveyed houses")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "heatpump.toml")]
    config: PathBuf,

    /// Houses JSON file (overrides the configured path)
    #[arg(long)]
    houses: Option<PathBuf>,

    /// Heat pump catalog JSON file (overrides the configured path)
    #[arg(long)]
    heat_pumps: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote every house in the houses file (default)
    Report,

    /// Quote a single house
    House {
        /// Submission ID of the house
        id: String,
    },

    /// List the heat pump catalog in selection order
    ListHeatPumps,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::new(&cli.config)
        .with_context(|| format!("Error reading configuration from {}", cli.config.display()))?;
    if let Some(houses) = cli.houses {
        settings.data.houses = houses;
    }
    if let Some(heat_pumps) = cli.heat_pumps {
        settings.data.heat_pumps = heat_pumps;
    }

    settings.logs.init().context("Error initializing logging")?;

    let heat_pumps = catalog::load_heat_pumps(&settings.data.heat_pumps)?;

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => {
            let houses = catalog::load_houses(&settings.data.houses)?;
            let weather = HttpWeatherProvider::new(&settings.weather)?;

            tracing::info!(
                "Quoting {} houses against {} heat pumps",
                houses.len(),
                heat_pumps.len()
            );
            let summary = pipeline::quote_all(&houses, &heat_pumps, &weather, |report| {
                println!("{}", report);
            })
            .await;
            println!("\n{}", summary);
        }

        Commands::House { id } => {
            let houses = catalog::load_houses(&settings.data.houses)?;
            let house = houses
                .iter()
                .find(|h| h.id == id)
                .ok_or_else(|| anyhow!("House '{}' not found in {}", id, settings.data.houses.display()))?;
            let weather = HttpWeatherProvider::new(&settings.weather)?;

            let report = pipeline::quote_house(house, &heat_pumps, &weather)
                .await
                .with_context(|| format!("Error processing house {}", id))?;
            println!("{}", report);
        }

        Commands::ListHeatPumps => {
            if heat_pumps.is_empty() {
                println!("No heat pumps in {}", settings.data.heat_pumps.display());
            } else {
                println!("{:<30} {:>10} {:>12}", "Heat Pump", "Output (kW)", "Base Cost");
                println!("{}", "-".repeat(54));
                for pump in &heat_pumps {
                    let base_cost = pump.costs.iter().fold(0.0, |acc, c| acc + c.cost);
                    println!("{:<30} {:>10.1} {:>12.2}", pump.label, pump.capacity_kw, base_cost);
                }
            }
        }
    }

    Ok(())
}
