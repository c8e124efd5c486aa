use sqlx::SqlitePool;
use tracing::{debug, instrument};

use crate::db::{DbError, StationRow};

#[derive(Clone)]
pub struct StationRepository {
    pool: SqlitePool,
}

impl StationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All station rows in the order the database returns them
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<StationRow>, DbError> {
        debug!("Querying all stations");

        let stations = sqlx::query_as::<_, StationRow>("SELECT station FROM station")
            .fetch_all(&self.pool)
            .await?;

        debug!("Found {} stations", stations.len());
        Ok(stations)
    }
}
