use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use crate::db::DbError;

/// Open a read-only pool over an existing SQLite database.
///
/// The database file is never created; a missing file is a connection error.
/// A `max_connections` of zero is raised to one.
#[instrument]
pub async fn connect_read_only(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, DbError> {
    debug!("Opening read-only pool with {} connections", max_connections);
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    Ok(pool)
}
