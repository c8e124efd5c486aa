use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

use crate::db::{MeasurementRepository, TemperatureObservation, TemperatureStats};
use crate::services::ClimateError;
use crate::utils::{format_iso_date, parse_iso_date, year_window_start};

#[derive(Clone)]
pub struct ClimateService {
    measurement_repo: MeasurementRepository,
}

impl ClimateService {
    pub fn new(measurement_repo: MeasurementRepository) -> Self {
        Self { measurement_repo }
    }

    /// Precipitation keyed by date for the year ending at the latest measurement.
    ///
    /// Rows sharing a date collapse to the last one returned.
    #[instrument(skip(self))]
    pub async fn get_precipitation_last_year(
        &self,
    ) -> Result<BTreeMap<String, Option<f64>>, ClimateError> {
        let bounds = self.measurement_repo.find_date_bounds().await?;
        let Some(max_date) = bounds.max_date else {
            debug!("No measurements, returning empty precipitation map");
            return Ok(BTreeMap::new());
        };

        let cutoff = format_iso_date(year_window_start(Self::parse_stored_date(&max_date)?));
        let rows = self
            .measurement_repo
            .find_precipitation_since(&cutoff)
            .await?;

        let row_count = rows.len();
        let precipitation: BTreeMap<String, Option<f64>> =
            rows.into_iter().map(|row| (row.date, row.prcp)).collect();

        info!(
            "Collected {} precipitation rows into {} dates since {}",
            row_count,
            precipitation.len(),
            cutoff
        );
        Ok(precipitation)
    }

    /// Temperatures of the most active station over its own latest year
    #[instrument(skip(self))]
    pub async fn get_most_active_temperatures(
        &self,
    ) -> Result<Vec<TemperatureObservation>, ClimateError> {
        let Some(station_id) = self.measurement_repo.find_most_active_station().await? else {
            return Ok(Vec::new());
        };

        let Some(latest) = self
            .measurement_repo
            .find_latest_date_for_station(&station_id)
            .await?
        else {
            return Ok(Vec::new());
        };

        let cutoff = format_iso_date(year_window_start(Self::parse_stored_date(&latest)?));
        let observations = self
            .measurement_repo
            .find_temperatures_for_station_since(&station_id, &cutoff)
            .await?;

        info!(
            "Retrieved {} temperature observations for station {} since {}",
            observations.len(),
            station_id,
            cutoff
        );
        Ok(observations)
    }

    /// Temperature stats for every measurement on or after `start`
    #[instrument(skip(self))]
    pub async fn get_stats_from(&self, start: &str) -> Result<TemperatureStats, ClimateError> {
        let start = parse_iso_date(start).ok_or(ClimateError::InvalidDateFormat)?;
        let (min, max) = self.observed_range().await?;

        if start < min || start > max {
            warn!("Start date {} outside observed range {} to {}", start, min, max);
            return Err(ClimateError::StartOutOfRange {
                min: format_iso_date(min),
                max: format_iso_date(max),
            });
        }

        let stats = self
            .measurement_repo
            .temperature_stats(&format_iso_date(start), None)
            .await?;
        Ok(stats)
    }

    /// Temperature stats for measurements between `start` and `end`, inclusive
    #[instrument(skip(self))]
    pub async fn get_stats_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureStats, ClimateError> {
        let start = parse_iso_date(start).ok_or(ClimateError::InvalidDateFormat)?;
        let end = parse_iso_date(end).ok_or(ClimateError::InvalidDateFormat)?;
        let (min, max) = self.observed_range().await?;

        let in_range = |date: NaiveDate| date >= min && date <= max;
        if !in_range(start) || !in_range(end) {
            warn!(
                "Dates {} to {} outside observed range {} to {}",
                start, end, min, max
            );
            return Err(ClimateError::RangeOutOfBounds {
                min: format_iso_date(min),
                max: format_iso_date(max),
            });
        }

        let end = format_iso_date(end);
        let stats = self
            .measurement_repo
            .temperature_stats(&format_iso_date(start), Some(&end))
            .await?;
        Ok(stats)
    }

    // Business logic helpers (private)

    async fn observed_range(&self) -> Result<(NaiveDate, NaiveDate), ClimateError> {
        let bounds = self.measurement_repo.find_date_bounds().await?;
        match (bounds.min_date, bounds.max_date) {
            (Some(min), Some(max)) => Ok((
                Self::parse_stored_date(&min)?,
                Self::parse_stored_date(&max)?,
            )),
            _ => Err(ClimateError::NoData),
        }
    }

    fn parse_stored_date(value: &str) -> Result<NaiveDate, ClimateError> {
        parse_iso_date(value).ok_or_else(|| ClimateError::InvalidStoredDate(value.to_string()))
    }
}
