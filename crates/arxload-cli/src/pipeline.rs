//! Sequential per-file ingestion.
//!
//! Each file moves through extract → insert on its own; a failure at either
//! step is counted by kind and the loop moves to the next file. Nothing is
//! retried and nothing partial is kept. Re-running over the same directory
//! reprocesses every file and the uniqueness constraint turns the
//! already-loaded ones into counted duplicate failures.

use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use arxload_db::{ArticleStore, DbError};
use arxload_extract::{extract, ExtractError};

/// Emit a progress line every this many attempts.
const PROGRESS_EVERY: usize = 500;

/// Everything that can sink a single file.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Aggregate counters for one run.
///
/// The total wins/fails pair is the reported contract; the per-kind
/// breakdown exists so a run's failures can be diagnosed after the fact.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub inserted: usize,
    pub failed: usize,
    pub failed_io: usize,
    pub failed_parse: usize,
    pub failed_missing_field: usize,
    pub failed_bad_date: usize,
    pub failed_duplicate: usize,
    pub failed_storage: usize,
}

impl RunSummary {
    pub(crate) fn count_failure(&mut self, err: &IngestError) {
        self.failed += 1;
        match err {
            IngestError::Io(_) => self.failed_io += 1,
            IngestError::Extract(ExtractError::Parse(_)) => self.failed_parse += 1,
            IngestError::Extract(ExtractError::MissingField(_))
            | IngestError::Extract(ExtractError::MissingText(_)) => {
                self.failed_missing_field += 1
            }
            IngestError::Extract(ExtractError::DateFormat { .. }) => self.failed_bad_date += 1,
            IngestError::Db(DbError::Duplicate(_)) => self.failed_duplicate += 1,
            IngestError::Db(DbError::Storage(_)) => self.failed_storage += 1,
        }
    }
}

/// Extract one file and insert its record.
async fn ingest_file(store: &ArticleStore, path: &Path) -> Result<(), IngestError> {
    let xml = tokio::fs::read_to_string(path).await?;
    let record = extract(&xml)?;
    store.insert(&record).await?;
    Ok(())
}

/// Process every file in `data_dir`, one at a time, in enumeration order.
///
/// Per-file errors are counted and swallowed; only failures to list the
/// directory or ensure the schema abort the run.
pub async fn run(store: &ArticleStore, data_dir: &Path) -> anyhow::Result<RunSummary> {
    store.ensure_schema().await?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(data_dir)? {
        files.push(entry?.path());
    }

    info!(n_files = files.len(), "embarking on processing");

    let t0 = Instant::now();
    let mut summary = RunSummary::default();

    for path in &files {
        summary.attempted += 1;
        match ingest_file(store, path).await {
            Ok(()) => summary.inserted += 1,
            Err(e) => {
                debug!(file = %path.display(), error = %e, "file failed");
                summary.count_failure(&e);
            }
        }

        if summary.attempted % PROGRESS_EVERY == 0 {
            info!(
                inserted = summary.inserted,
                failed = summary.failed,
                elapsed_secs = t0.elapsed().as_secs_f64(),
                "progress"
            );
        }
    }

    info!(
        attempted = summary.attempted,
        inserted = summary.inserted,
        failed = summary.failed,
        failed_parse = summary.failed_parse,
        failed_missing_field = summary.failed_missing_field,
        failed_bad_date = summary.failed_bad_date,
        failed_duplicate = summary.failed_duplicate,
        failed_storage = summary.failed_storage,
        failed_io = summary.failed_io,
        elapsed_secs = t0.elapsed().as_secs_f64(),
        "run complete"
    );

    Ok(summary)
}
