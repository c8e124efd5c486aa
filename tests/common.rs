#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const MEASUREMENT_TABLE: &str = r#"
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        station TEXT NOT NULL,
        date TEXT NOT NULL,
        prcp FLOAT,
        tobs FLOAT NOT NULL
    )
"#;

const STATION_TABLE: &str = r#"
    CREATE TABLE station (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        station TEXT NOT NULL,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )
"#;

/// Fresh in-memory database with the climate tables and no rows.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    create_schema(&pool).await;
    pool
}

pub async fn create_schema(pool: &SqlitePool) {
    sqlx::query(MEASUREMENT_TABLE)
        .execute(pool)
        .await
        .expect("Failed to create measurement table");
    sqlx::query(STATION_TABLE)
        .execute(pool)
        .await
        .expect("Failed to create station table");
}

pub async fn insert_measurement(
    pool: &SqlitePool,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: f64,
) {
    sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(pool)
        .await
        .expect("Failed to insert measurement");
}

pub async fn insert_station(pool: &SqlitePool, station: &str, name: &str) {
    sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
        .bind(station)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert station");
}

/// Three stations over 2010-01-01..2017-08-23, with USC00519281 the most active
pub async fn seed_hawaii_sample(pool: &SqlitePool) {
    insert_station(pool, "USC00519397", "WAIKIKI 717.2, HI US").await;
    insert_station(pool, "USC00513117", "KANEOHE 838.1, HI US").await;
    insert_station(pool, "USC00519281", "WAIHEE 837.5, HI US").await;

    let rows = [
        ("USC00519397", "2010-01-01", Some(0.08), 65.0),
        ("USC00519397", "2016-08-22", Some(0.40), 79.0),
        ("USC00519397", "2016-08-23", Some(0.00), 81.0),
        ("USC00519397", "2017-08-23", Some(0.00), 81.0),
        ("USC00513117", "2016-12-01", None, 70.0),
        ("USC00513117", "2017-03-15", Some(1.25), 68.0),
        ("USC00519281", "2015-06-01", Some(0.10), 74.0),
        ("USC00519281", "2016-08-17", Some(0.01), 76.0),
        ("USC00519281", "2016-08-18", Some(0.00), 80.0),
        ("USC00519281", "2017-02-02", Some(0.05), 59.0),
        ("USC00519281", "2017-08-18", Some(0.06), 79.0),
    ];

    for (station, date, prcp, tobs) in rows {
        insert_measurement(pool, station, date, prcp, tobs).await;
    }
}
