//! The normalized article record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Separator used when joining creator names into the `authors` column.
pub const AUTHOR_SEP: &str = "|";

/// One article's Dublin Core metadata, normalized and ready for storage.
///
/// Immutable once constructed: a record is written exactly once and never
/// updated in place. `arxiv_id` is the external uniqueness key; the table's
/// UNIQUE constraint, not the extractor, rejects re-ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    /// All creator names joined with [`AUTHOR_SEP`], in document order.
    pub authors: String,
    pub subject: String,
    pub abstract_text: String,
    /// Most recent of the document's date elements.
    pub last_submitted: NaiveDate,
    /// Identifier tail after `http://arxiv.org/abs/`, when present.
    pub arxiv_id: Option<String>,
}
