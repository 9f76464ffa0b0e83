//! Field selectors over a parsed [`DcDocument`].
//!
//! Each selector is a pure function of the document; [`extract`] composes
//! them into one [`ArticleRecord`] or fails without producing anything.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use arxload_common::record::{ArticleRecord, AUTHOR_SEP};

use crate::dc::{DcField, ARXIV_ABS_PREFIX};
use crate::document::DcDocument;
use crate::error::{ExtractError, Result};

lazy_static! {
    // chrono alone accepts variable-width years; this pins the zero-padded
    // YYYY-MM-DD shape before calendar validation.
    static ref DATE_RE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Parse one XML document and derive its normalized record.
pub fn extract(xml: &str) -> Result<ArticleRecord> {
    let doc = DcDocument::parse(xml)?;
    Ok(ArticleRecord {
        title: select_title(&doc)?,
        authors: select_authors(&doc),
        subject: select_subject(&doc)?,
        abstract_text: select_abstract(&doc)?,
        last_submitted: select_last_submitted(&doc)?,
        arxiv_id: select_arxiv_id(&doc),
    })
}

/// Text of the last title element. The schema permits only one in practice.
pub fn select_title(doc: &DcDocument) -> Result<String> {
    doc.titles
        .last()
        .cloned()
        .ok_or(ExtractError::MissingField(DcField::Title))
}

/// All creator texts joined with `|`, in document order.
/// A document with no creators yields an empty string, not a failure.
pub fn select_authors(doc: &DcDocument) -> String {
    doc.creators.join(AUTHOR_SEP)
}

/// Text of the first subject element; later ones are discarded.
pub fn select_subject(doc: &DcDocument) -> Result<String> {
    doc.subjects
        .first()
        .cloned()
        .ok_or(ExtractError::MissingField(DcField::Subject))
}

/// The longest description text, ties broken by document order.
///
/// The shorter description on arXiv records is the submitter comment; the
/// longest one is the abstract. Newlines are collapsed to spaces and outer
/// whitespace is trimmed.
pub fn select_abstract(doc: &DcDocument) -> Result<String> {
    if doc.descriptions.is_empty() {
        return Err(ExtractError::MissingField(DcField::Description));
    }

    let mut longest: Option<(&str, usize)> = None;
    for candidate in &doc.descriptions {
        let text = candidate
            .as_deref()
            .ok_or(ExtractError::MissingText(DcField::Description))?;
        let len = text.chars().count();
        // Strictly greater keeps the first occurrence on ties.
        if longest.is_none_or(|(_, max)| len > max) {
            longest = Some((text, len));
        }
    }

    let (abstract_text, _) = longest.ok_or(ExtractError::MissingField(DcField::Description))?;
    Ok(abstract_text.replace('\n', " ").trim().to_string())
}

/// The most recent of the document's date elements.
/// Every date text must match `YYYY-MM-DD` exactly.
pub fn select_last_submitted(doc: &DcDocument) -> Result<NaiveDate> {
    if doc.dates.is_empty() {
        return Err(ExtractError::MissingField(DcField::Date));
    }

    let mut latest: Option<NaiveDate> = None;
    for raw in &doc.dates {
        if !DATE_RE.is_match(raw) {
            return Err(ExtractError::DateFormat { value: raw.clone() });
        }
        let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ExtractError::DateFormat { value: raw.clone() })?;
        if latest.is_none_or(|d| parsed > d) {
            latest = Some(parsed);
        }
    }

    latest.ok_or(ExtractError::MissingField(DcField::Date))
}

/// Tail of the first identifier that is an arXiv abstract URL.
/// Returns `None`, not an error, when no identifier matches.
pub fn select_arxiv_id(doc: &DcDocument) -> Option<String> {
    doc.identifiers
        .iter()
        .find(|id| id.starts_with(ARXIV_ABS_PREFIX))
        .and_then(|id| id.rsplit('/').next())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_descriptions(descriptions: Vec<Option<&str>>) -> DcDocument {
        DcDocument {
            descriptions: descriptions
                .into_iter()
                .map(|d| d.map(str::to_string))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_takes_last() {
        let doc = DcDocument {
            titles: vec!["first".into(), "second".into()],
            ..Default::default()
        };
        assert_eq!(select_title(&doc).unwrap(), "second");
    }

    #[test]
    fn test_title_missing_is_error() {
        let err = select_title(&DcDocument::default()).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField(DcField::Title)));
    }

    #[test]
    fn test_authors_join_preserves_order() {
        let doc = DcDocument {
            creators: vec!["a".into(), "b".into(), "c".into()],
            ..Default::default()
        };
        assert_eq!(select_authors(&doc), "a|b|c");
    }

    #[test]
    fn test_authors_empty_is_empty_string() {
        assert_eq!(select_authors(&DcDocument::default()), "");
    }

    #[test]
    fn test_subject_takes_first() {
        let doc = DcDocument {
            subjects: vec!["math.OC".into(), "stat.ML".into()],
            ..Default::default()
        };
        assert_eq!(select_subject(&doc).unwrap(), "math.OC");
    }

    #[test]
    fn test_subject_missing_is_error() {
        let err = select_subject(&DcDocument::default()).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField(DcField::Subject)));
    }

    #[test]
    fn test_abstract_picks_longest() {
        let doc = doc_with_descriptions(vec![
            Some("Comment: 10 pages"),
            Some("A considerably longer abstract describing the result."),
            Some("short"),
        ]);
        assert_eq!(
            select_abstract(&doc).unwrap(),
            "A considerably longer abstract describing the result."
        );
    }

    #[test]
    fn test_abstract_tie_keeps_first() {
        let doc = doc_with_descriptions(vec![Some("aaaa"), Some("bbbb")]);
        assert_eq!(select_abstract(&doc).unwrap(), "aaaa");
    }

    #[test]
    fn test_abstract_collapses_newlines_and_trims() {
        let doc = doc_with_descriptions(vec![Some("  line one\nline two\nline three  ")]);
        assert_eq!(select_abstract(&doc).unwrap(), "line one line two line three");
    }

    #[test]
    fn test_abstract_length_in_chars_not_bytes() {
        // Multi-byte text must not win on byte length alone.
        let doc = doc_with_descriptions(vec![Some("héllo"), Some("abcdef")]);
        assert_eq!(select_abstract(&doc).unwrap(), "abcdef");
    }

    #[test]
    fn test_abstract_missing_is_error() {
        let err = select_abstract(&DcDocument::default()).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField(DcField::Description)));
    }

    #[test]
    fn test_abstract_textless_element_is_error() {
        let doc = doc_with_descriptions(vec![Some("real abstract"), None]);
        let err = select_abstract(&doc).unwrap_err();
        assert!(matches!(err, ExtractError::MissingText(DcField::Description)));
    }

    #[test]
    fn test_date_takes_maximum() {
        let doc = DcDocument {
            dates: vec!["2020-01-01".into(), "2019-06-15".into()],
            ..Default::default()
        };
        assert_eq!(
            select_last_submitted(&doc).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_date_invalid_month_is_error() {
        let doc = DcDocument {
            dates: vec!["2020-13-01".into()],
            ..Default::default()
        };
        let err = select_last_submitted(&doc).unwrap_err();
        assert!(matches!(err, ExtractError::DateFormat { .. }));
    }

    #[test]
    fn test_date_wrong_layout_is_error() {
        let doc = DcDocument {
            dates: vec!["01-01-2020".into()],
            ..Default::default()
        };
        let err = select_last_submitted(&doc).unwrap_err();
        assert!(matches!(err, ExtractError::DateFormat { .. }));
    }

    #[test]
    fn test_date_rejects_unpadded_year() {
        let doc = DcDocument {
            dates: vec!["820-01-01".into()],
            ..Default::default()
        };
        let err = select_last_submitted(&doc).unwrap_err();
        assert!(matches!(err, ExtractError::DateFormat { .. }));
    }

    #[test]
    fn test_date_one_bad_value_fails_whole_selector() {
        let doc = DcDocument {
            dates: vec!["2020-01-01".into(), "next tuesday".into()],
            ..Default::default()
        };
        assert!(select_last_submitted(&doc).is_err());
    }

    #[test]
    fn test_date_missing_is_error() {
        let err = select_last_submitted(&DcDocument::default()).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField(DcField::Date)));
    }

    #[test]
    fn test_arxiv_id_from_first_matching_identifier() {
        let doc = DcDocument {
            identifiers: vec![
                "doi:10.1000/xyz".into(),
                "http://arxiv.org/abs/2101.00001".into(),
                "http://arxiv.org/abs/9999.99999".into(),
            ],
            ..Default::default()
        };
        assert_eq!(select_arxiv_id(&doc).as_deref(), Some("2101.00001"));
    }

    #[test]
    fn test_arxiv_id_absent_when_no_match() {
        let doc = DcDocument {
            identifiers: vec!["https://arxiv.org/abs/2101.00001".into()],
            ..Default::default()
        };
        // https scheme does not match the literal prefix.
        assert_eq!(select_arxiv_id(&doc), None);
    }

    #[test]
    fn test_extract_full_document() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<oai_dc:dc xmlns:oai_dc="http://www.openarchives.org/OAI/2.0/oai_dc/"
           xmlns:dc="http://purl.org/dc/elements/1.1/">
  <dc:title>Sparse recovery guarantees</dc:title>
  <dc:creator>Ada Lovelace</dc:creator>
  <dc:creator>Charles Babbage</dc:creator>
  <dc:subject>math.OC</dc:subject>
  <dc:description>Comment: 12 pages, 3 figures</dc:description>
  <dc:description>We prove recovery guarantees for sparse signals
under restricted isometry assumptions.</dc:description>
  <dc:date>2019-06-15</dc:date>
  <dc:date>2020-01-01</dc:date>
  <dc:identifier>http://arxiv.org/abs/2101.00001</dc:identifier>
  <dc:identifier>doi:10.1000/xyz</dc:identifier>
</oai_dc:dc>"#;

        let record = extract(xml).unwrap();
        assert_eq!(record.title, "Sparse recovery guarantees");
        assert_eq!(record.authors, "Ada Lovelace|Charles Babbage");
        assert_eq!(record.subject, "math.OC");
        assert_eq!(
            record.abstract_text,
            "We prove recovery guarantees for sparse signals under restricted isometry assumptions."
        );
        assert_eq!(
            record.last_submitted,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert_eq!(record.arxiv_id.as_deref(), Some("2101.00001"));
    }

    #[test]
    fn test_extract_fails_atomically_on_missing_subject() {
        let xml = r#"<oai_dc:dc xmlns:oai_dc="http://www.openarchives.org/OAI/2.0/oai_dc/"
                                xmlns:dc="http://purl.org/dc/elements/1.1/">
  <dc:title>No subject here</dc:title>
  <dc:description>An abstract.</dc:description>
  <dc:date>2020-01-01</dc:date>
</oai_dc:dc>"#;

        let err = extract(xml).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField(DcField::Subject)));
    }
}
