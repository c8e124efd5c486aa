use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use crate::db::{DateBounds, DbError, PrecipitationRow, TemperatureObservation, TemperatureStats};

#[derive(Clone)]
pub struct MeasurementRepository {
    pool: SqlitePool,
}

impl MeasurementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Earliest and latest measurement dates across all stations
    #[instrument(skip(self))]
    pub async fn find_date_bounds(&self) -> Result<DateBounds, DbError> {
        debug!("Querying global measurement date bounds");

        let bounds = sqlx::query_as::<_, DateBounds>(
            r#"
            SELECT MIN(date) AS min_date, MAX(date) AS max_date
            FROM measurement
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        debug!("Date bounds: {:?} to {:?}", bounds.min_date, bounds.max_date);
        Ok(bounds)
    }

    /// Precipitation rows dated on or after `cutoff` (inclusive, `YYYY-MM-DD`)
    #[instrument(skip(self))]
    pub async fn find_precipitation_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<PrecipitationRow>, DbError> {
        debug!("Querying precipitation since {}", cutoff);

        let rows = sqlx::query_as::<_, PrecipitationRow>(
            r#"
            SELECT date, prcp
            FROM measurement
            WHERE date >= ?1
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} precipitation rows", rows.len());
        Ok(rows)
    }

    /// Station with the most measurement rows.
    ///
    /// Equal counts resolve to the lexicographically smallest station id.
    #[instrument(skip(self))]
    pub async fn find_most_active_station(&self) -> Result<Option<String>, DbError> {
        debug!("Querying for most active station");

        let station = sqlx::query_scalar::<_, String>(
            r#"
            SELECT station
            FROM measurement
            GROUP BY station
            ORDER BY COUNT(*) DESC, station ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        match &station {
            Some(id) => info!("Most active station is {}", id),
            None => debug!("No measurements found in database"),
        }

        Ok(station)
    }

    /// Latest measurement date recorded for one station
    #[instrument(skip(self))]
    pub async fn find_latest_date_for_station(
        &self,
        station_id: &str,
    ) -> Result<Option<String>, DbError> {
        let latest = sqlx::query_scalar::<_, Option<String>>(
            r#"
            SELECT MAX(date)
            FROM measurement
            WHERE station = ?1
            "#,
        )
        .bind(station_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(latest)
    }

    #[instrument(skip(self))]
    pub async fn find_temperatures_for_station_since(
        &self,
        station_id: &str,
        cutoff: &str,
    ) -> Result<Vec<TemperatureObservation>, DbError> {
        debug!("Querying temperatures for {} since {}", station_id, cutoff);

        let observations = sqlx::query_as::<_, TemperatureObservation>(
            r#"
            SELECT date, tobs
            FROM measurement
            WHERE station = ?1 AND date >= ?2
            "#,
        )
        .bind(station_id)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} temperature observations", observations.len());
        Ok(observations)
    }

    /// Min/avg/max observed temperature between `start` and an optional `end`, both inclusive
    #[instrument(skip(self))]
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureStats, DbError> {
        debug!("Aggregating temperatures from {} to {:?}", start, end);

        let stats = sqlx::query_as::<_, TemperatureStats>(
            r#"
            SELECT MIN(tobs) AS min_temperature,
                   AVG(tobs) AS avg_temperature,
                   MAX(tobs) AS max_temperature
            FROM measurement
            WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}
