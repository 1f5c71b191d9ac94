//! Per-house quoting errors

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Failures scoped to a single house. None of them stops a batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteError {
    #[error("invalid house profile: {field} must be greater than zero (got {value})")]
    InvalidProfile { field: &'static str, value: f64 },
    #[error("invalid climate data: heating degree days must be greater than zero (got {degree_days})")]
    InvalidClimateData { degree_days: f64 },
    #[error("design region '{0}' not found")]
    RegionNotFound(String),
    #[error("error fetching weather data: {0}")]
    WeatherService(String),
    #[error("no suitable heat pump found for {required_kw:.3} kW")]
    NoSuitableEquipment { required_kw: f64 },
}
