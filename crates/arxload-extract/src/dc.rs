//! Dublin Core vocabulary constants.
//!
//! The tag-to-field mapping lives here once so the selectors cannot drift
//! out of sync on namespace or spelling.

/// Namespace all metadata elements are qualified under.
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Identifier prefix that marks an arXiv abstract URL.
pub const ARXIV_ABS_PREFIX: &str = "http://arxiv.org/abs/";

/// The Dublin Core fields this system reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DcField {
    Title,
    Creator,
    Subject,
    Description,
    Identifier,
    Date,
}

impl DcField {
    /// Map an element's local name to a field, if it is one we collect.
    pub fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title"       => Some(DcField::Title),
            b"creator"     => Some(DcField::Creator),
            b"subject"     => Some(DcField::Subject),
            b"description" => Some(DcField::Description),
            b"identifier"  => Some(DcField::Identifier),
            b"date"        => Some(DcField::Date),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DcField::Title       => "title",
            DcField::Creator     => "creator",
            DcField::Subject     => "subject",
            DcField::Description => "description",
            DcField::Identifier  => "identifier",
            DcField::Date        => "date",
        }
    }
}
