use tracing::instrument;

use crate::db::StationRepository;
use crate::services::ClimateError;

#[derive(Clone)]
pub struct StationService {
    station_repo: StationRepository,
}

impl StationService {
    pub fn new(station_repo: StationRepository) -> Self {
        Self { station_repo }
    }

    /// Identifiers of every known station
    #[instrument(skip(self))]
    pub async fn get_station_ids(&self) -> Result<Vec<String>, ClimateError> {
        let stations = self.station_repo.find_all().await?;
        Ok(stations.into_iter().map(|s| s.station).collect())
    }
}
