use sqlx::SqlitePool;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::db::{MeasurementRepository, StationRepository};
use crate::services::{ClimateService, StationService};

/// Running application: the spawned HTTP server
pub struct Application {
    pub server_handle: JoinHandle<Result<(), std::io::Error>>,
}

impl Application {
    /// Wire repositories and services over the pool, then spawn the server.
    ///
    /// Every handler borrows a pooled connection per query, so requests on
    /// different worker threads never share a connection.
    pub async fn build(
        config: Config,
        pool: SqlitePool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Initializing application components");

        let measurement_repo = MeasurementRepository::new(pool.clone());
        let station_repo = StationRepository::new(pool);

        let app_state = AppState {
            climate_service: ClimateService::new(measurement_repo),
            station_service: StationService::new(station_repo),
        };
        let app = create_router(app_state).layer(TraceLayer::new_for_http());

        let addr = config.server_addr();
        info!("Starting HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let server_handle = tokio::spawn(async move { axum::serve(listener, app).await });

        info!("Application initialized successfully");

        Ok(Self { server_handle })
    }

    /// Run until the server stops
    pub async fn run_until_stopped(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server_handle.await??;
        Ok(())
    }
}
