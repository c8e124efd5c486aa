use crate::db::DbError;

/// Failures surfaced by the climate services.
///
/// The first four are caller-facing and map to HTTP 400; the rest are faults.
#[derive(Debug, thiserror::Error)]
pub enum ClimateError {
    #[error("Invalid date format. Please use 'YYYY-MM-DD'.")]
    InvalidDateFormat,
    #[error("Start date is outside the valid range. Please use a date within the range {min} to {max}")]
    StartOutOfRange { min: String, max: String },
    #[error("Dates are outside the valid range. Please use dates within the range {min} to {max}")]
    RangeOutOfBounds { min: String, max: String },
    #[error("No data available")]
    NoData,
    #[error("Stored measurement date is not YYYY-MM-DD: {0}")]
    InvalidStoredDate(String),
    #[error(transparent)]
    Database(#[from] DbError),
}

impl ClimateError {
    /// Whether the error was caused by the request rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ClimateError::InvalidDateFormat
                | ClimateError::StartOutOfRange { .. }
                | ClimateError::RangeOutOfBounds { .. }
                | ClimateError::NoData
        )
    }
}
