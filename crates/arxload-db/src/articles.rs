//! Article store.
//!
//! Owns the `articles` table: idempotent schema creation and the
//! one-row-per-record insert. Each insert is its own statement and commits
//! as its own transaction; rows are never updated or deleted here.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::debug;

use arxload_common::ArticleRecord;

use crate::error::{DbError, Result};

/// Destination table DDL. The serial `index` column is the surrogate key;
/// `arxiv_id` carries the external uniqueness constraint.
const CREATE_ARTICLES: &str = "CREATE TABLE IF NOT EXISTS articles (
    index serial PRIMARY KEY,
    title text,
    authors text,
    subject text,
    abstract text,
    last_submitted date,
    arxiv_id text UNIQUE
)";

const INSERT_ARTICLE: &str = "INSERT INTO articles \
    (title, authors, subject, abstract, last_submitted, arxiv_id) \
    VALUES ($1, $2, $3, $4, $5, $6)";

/// Store for the `articles` table.
#[derive(Clone)]
pub struct ArticleStore {
    pool: PgPool,
}

impl ArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the named database.
    ///
    /// Host, port, user and password come from the standard `PG*`
    /// environment variables, libpq-style; only the database name is taken
    /// from the caller. The pool holds a single connection: processing is
    /// strictly sequential, so there is nothing for more to do.
    pub async fn connect(dbname: &str) -> Result<Self> {
        let opts = PgConnectOptions::new().database(dbname);
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `articles` table if it does not exist.
    ///
    /// Safe to call repeatedly; an existing table is left untouched.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_ARTICLES).execute(&self.pool).await?;
        debug!("articles table ensured");
        Ok(())
    }

    /// Insert one record as a new row.
    ///
    /// Returns [`DbError::Duplicate`] when the arxiv_id uniqueness
    /// constraint rejects the row, [`DbError::Storage`] for every other
    /// database-level failure.
    pub async fn insert(&self, record: &ArticleRecord) -> Result<()> {
        let result = sqlx::query(INSERT_ARTICLE)
            .bind(&record.title)
            .bind(&record.authors)
            .bind(&record.subject)
            .bind(&record.abstract_text)
            .bind(record.last_submitted)
            .bind(record.arxiv_id.as_deref())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err))
                if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                Err(DbError::Duplicate(
                    record.arxiv_id.clone().unwrap_or_default(),
                ))
            }
            Err(e) => Err(DbError::Storage(e)),
        }
    }

    /// Total rows in the `articles` table.
    pub async fn article_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
