// Tests for MeasurementRepository query methods against an in-memory database

mod common;

use climate_api::db::{MeasurementRepository, StationRepository, TemperatureObservation};

#[tokio::test]
async fn test_date_bounds_empty_table() {
    let pool = common::test_pool().await;
    let repo = MeasurementRepository::new(pool);

    let bounds = repo.find_date_bounds().await.unwrap();

    assert!(bounds.min_date.is_none());
    assert!(bounds.max_date.is_none());
}

#[tokio::test]
async fn test_date_bounds_span_all_stations() {
    let pool = common::test_pool().await;
    common::seed_hawaii_sample(&pool).await;
    let repo = MeasurementRepository::new(pool);

    let bounds = repo.find_date_bounds().await.unwrap();

    assert_eq!(bounds.min_date.as_deref(), Some("2010-01-01"));
    assert_eq!(bounds.max_date.as_deref(), Some("2017-08-23"));
}

#[tokio::test]
async fn test_precipitation_since_is_inclusive() {
    let pool = common::test_pool().await;
    common::seed_hawaii_sample(&pool).await;
    let repo = MeasurementRepository::new(pool);

    let rows = repo.find_precipitation_since("2016-08-23").await.unwrap();

    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.date.as_str() >= "2016-08-23"));
    assert!(rows.iter().any(|r| r.date == "2016-08-23"));
    assert!(
        rows.iter().any(|r| r.prcp.is_none()),
        "Null precipitation should be preserved"
    );
}

#[tokio::test]
async fn test_most_active_station_by_row_count() {
    let pool = common::test_pool().await;
    for day in 1..=5 {
        common::insert_measurement(&pool, "A", &format!("2017-01-0{}", day), None, 70.0).await;
    }
    for day in 1..=3 {
        common::insert_measurement(&pool, "B", &format!("2017-02-0{}", day), None, 60.0).await;
    }
    let repo = MeasurementRepository::new(pool);

    let station = repo.find_most_active_station().await.unwrap();

    assert_eq!(station.as_deref(), Some("A"));
}

#[tokio::test]
async fn test_most_active_station_tie_prefers_smallest_id() {
    let pool = common::test_pool().await;
    // Insert the larger id first so row order cannot decide the tie
    common::insert_measurement(&pool, "USC00519397", "2017-01-01", None, 70.0).await;
    common::insert_measurement(&pool, "USC00519397", "2017-01-02", None, 70.0).await;
    common::insert_measurement(&pool, "USC00513117", "2017-01-01", None, 70.0).await;
    common::insert_measurement(&pool, "USC00513117", "2017-01-02", None, 70.0).await;
    let repo = MeasurementRepository::new(pool);

    let station = repo.find_most_active_station().await.unwrap();

    assert_eq!(station.as_deref(), Some("USC00513117"));
}

#[tokio::test]
async fn test_most_active_station_empty_table() {
    let pool = common::test_pool().await;
    let repo = MeasurementRepository::new(pool);

    assert!(repo.find_most_active_station().await.unwrap().is_none());
}

#[tokio::test]
async fn test_latest_date_for_station() {
    let pool = common::test_pool().await;
    common::seed_hawaii_sample(&pool).await;
    let repo = MeasurementRepository::new(pool);

    let latest = repo
        .find_latest_date_for_station("USC00519281")
        .await
        .unwrap();
    assert_eq!(latest.as_deref(), Some("2017-08-18"));

    let unknown = repo.find_latest_date_for_station("NOPE").await.unwrap();
    assert!(unknown.is_none());
}

#[tokio::test]
async fn test_temperatures_for_station_since() {
    let pool = common::test_pool().await;
    common::seed_hawaii_sample(&pool).await;
    let repo = MeasurementRepository::new(pool);

    let mut observations = repo
        .find_temperatures_for_station_since("USC00519281", "2016-08-18")
        .await
        .unwrap();
    observations.sort_by(|a, b| a.date.cmp(&b.date));

    assert_eq!(
        observations,
        vec![
            TemperatureObservation { date: "2016-08-18".to_string(), tobs: 80.0 },
            TemperatureObservation { date: "2017-02-02".to_string(), tobs: 59.0 },
            TemperatureObservation { date: "2017-08-18".to_string(), tobs: 79.0 },
        ]
    );
}

#[tokio::test]
async fn test_temperature_stats_open_and_bounded() {
    let pool = common::test_pool().await;
    common::insert_measurement(&pool, "A", "2017-01-01", None, 60.0).await;
    common::insert_measurement(&pool, "A", "2017-01-02", None, 70.0).await;
    common::insert_measurement(&pool, "B", "2017-01-03", None, 80.0).await;
    common::insert_measurement(&pool, "B", "2017-01-04", None, 90.0).await;
    let repo = MeasurementRepository::new(pool);

    let open = repo.temperature_stats("2017-01-02", None).await.unwrap();
    assert_eq!(open.min_temperature, Some(70.0));
    assert_eq!(open.avg_temperature, Some(80.0));
    assert_eq!(open.max_temperature, Some(90.0));

    let bounded = repo
        .temperature_stats("2017-01-01", Some("2017-01-03"))
        .await
        .unwrap();
    assert_eq!(bounded.min_temperature, Some(60.0));
    assert_eq!(bounded.avg_temperature, Some(70.0));
    assert_eq!(bounded.max_temperature, Some(80.0));
}

#[tokio::test]
async fn test_temperature_stats_no_matching_rows() {
    let pool = common::test_pool().await;
    common::insert_measurement(&pool, "A", "2017-01-01", None, 60.0).await;
    let repo = MeasurementRepository::new(pool);

    let stats = repo
        .temperature_stats("2017-02-01", Some("2017-01-01"))
        .await
        .unwrap();

    assert!(stats.min_temperature.is_none());
    assert!(stats.avg_temperature.is_none());
    assert!(stats.max_temperature.is_none());
}

#[tokio::test]
async fn test_station_repository_lists_all() {
    let pool = common::test_pool().await;
    common::seed_hawaii_sample(&pool).await;
    let repo = StationRepository::new(pool);

    let mut ids: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.station)
        .collect();
    ids.sort();

    assert_eq!(ids, vec!["USC00513117", "USC00519281", "USC00519397"]);
}
