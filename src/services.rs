pub mod climate_service;
pub mod error;
pub mod station_service;

pub use climate_service::ClimateService;
pub use error::ClimateError;
pub use station_service::StationService;
