//! Extraction error types.

use thiserror::Error;

use crate::dc::DcField;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("malformed XML: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("no {} elements in document", .0.as_str())]
    MissingField(DcField),

    #[error("{} element has no text", .0.as_str())]
    MissingText(DcField),

    #[error("date not in YYYY-MM-DD format: {value:?}")]
    DateFormat { value: String },
}
