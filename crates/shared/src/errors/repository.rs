use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found: {0}")]
    NotFound(String),
}
