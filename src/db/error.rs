/// Failure talking to the climate database
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Climate database error: {0}")]
    SqlxError(#[from] sqlx::Error),
}
