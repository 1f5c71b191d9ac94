//! Layered configuration and log setup

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::weather::WeatherConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub weather: WeatherConfig,
    pub data: DataSettings,
    pub logs: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub houses: PathBuf,
    pub heat_pumps: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub default_level: String,
    pub filters: Vec<String>,
}

impl Settings {
    /// Read `config_file` (optional) layered under `HEATPUMP__*` environment variables
    ///
    /// `weather.base_url` and `weather.api_key` default to empty; they are only
    /// checked when a weather provider is built.
    pub fn new(config_file: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("weather.base_url", "")?
            .set_default("weather.api_key", "")?
            .set_default("weather.timeout_secs", 10)?
            .set_default("data.houses", "data/houses.json")?
            .set_default("data.heat_pumps", "data/heatPumpData.json")?
            .set_default("logs.default_level", "info")?
            .set_default("logs.filters", Vec::<String>::new())?
            .add_source(File::from(config_file).required(false))
            .add_source(
                Environment::with_prefix("HEATPUMP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("logs.filters"),
            )
            .build()?
            .try_deserialize()
    }
}

impl LogSettings {
    /// `default_level` must be a plain level (`info`, `debug`, ...), not a directive
    pub fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        let level: LevelFilter = self
            .default_level
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid logs.default_level '{}': {}", self.default_level, e))?;

        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .parse(self.filters.join(","))?;
        Ok(filter)
    }

    /// Install the global fmt subscriber. Logs go to stderr so reports on
    /// stdout stay clean.
    pub fn init(&self) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter()?)
            .with_writer(std::io::stderr)
            .init();
        Ok(())
    }
}
