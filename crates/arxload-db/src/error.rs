//! Loader error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    /// The arxiv_id uniqueness constraint rejected the row.
    #[error("duplicate arxiv_id: {0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}
