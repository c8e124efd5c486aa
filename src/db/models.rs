use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Row models for the `measurement` and `station` tables
#[derive(Debug, Clone, FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

/// Earliest and latest measurement dates, both `None` when the table is empty.
#[derive(Debug, Clone, FromRow)]
pub struct DateBounds {
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct StationRow {
    pub station: String,
}

// API response DTOs
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct TemperatureStats {
    pub min_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
}
