//! arxload-extract — Dublin Core record extraction.
//!
//! Parses one per-document XML file into a [`DcDocument`] and derives the
//! normalized [`ArticleRecord`](arxload_common::ArticleRecord) from it via
//! field-specific selectors. Extraction is atomic: any selector failure
//! means the document is wholly unprocessable and no record is produced.

pub mod dc;
pub mod document;
pub mod error;
pub mod extractor;

pub use document::DcDocument;
pub use error::{ExtractError, Result};
pub use extractor::extract;
