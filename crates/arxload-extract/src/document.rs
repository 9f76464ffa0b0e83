//! Parsed Dublin Core document.
//!
//! [`DcDocument::parse`] walks the XML event stream once and collects the
//! text of every DC-namespaced element we care about, in document order.
//! The selectors in [`crate::extractor`] then operate on the collected
//! collections without touching the XML again.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::dc::{DcField, DC_NS};
use crate::error::Result;

/// Per-field element texts from one document, in document order.
///
/// Description texts are kept as `Option<String>` because a description
/// element with no text node at all is a hard extraction failure, while the
/// other fields treat a textless element as empty text.
#[derive(Debug, Default, Clone)]
pub struct DcDocument {
    pub titles: Vec<String>,
    pub creators: Vec<String>,
    pub subjects: Vec<String>,
    pub descriptions: Vec<Option<String>>,
    pub identifiers: Vec<String>,
    pub dates: Vec<String>,
}

impl DcDocument {
    /// Parse one XML document and collect its Dublin Core element texts.
    ///
    /// Elements are matched by resolved namespace plus local name, at any
    /// depth, so both bare `oai_dc:dc` roots and envelope-wrapped OAI
    /// records parse identically. Elements outside [`DC_NS`] are ignored.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut doc = DcDocument::default();
        // Field currently being captured, and its accumulated text.
        // `text` stays None until a text event arrives, so a childless
        // element is distinguishable from an empty-text one.
        let mut current: Option<DcField> = None;
        let mut text: Option<String> = None;

        loop {
            match reader.read_resolved_event()? {
                (ResolveResult::Bound(Namespace(ns)), Event::Start(e))
                    if ns == DC_NS.as_bytes() =>
                {
                    if current.is_none() {
                        current = DcField::from_local_name(e.local_name().as_ref());
                        text = None;
                    }
                }
                (ResolveResult::Bound(Namespace(ns)), Event::Empty(e))
                    if ns == DC_NS.as_bytes() =>
                {
                    if current.is_none() {
                        if let Some(field) = DcField::from_local_name(e.local_name().as_ref()) {
                            doc.push(field, None);
                        }
                    }
                }
                (_, Event::Text(e)) => {
                    if current.is_some() {
                        let unescaped = e.unescape()?;
                        text.get_or_insert_with(String::new).push_str(&unescaped);
                    }
                }
                (ResolveResult::Bound(Namespace(ns)), Event::End(e))
                    if ns == DC_NS.as_bytes() =>
                {
                    if let Some(field) = current {
                        if DcField::from_local_name(e.local_name().as_ref()) == Some(field) {
                            doc.push(field, text.take());
                            current = None;
                        }
                    }
                }
                (_, Event::Eof) => break,
                _ => {}
            }
        }

        Ok(doc)
    }

    fn push(&mut self, field: DcField, text: Option<String>) {
        match field {
            DcField::Title => self.titles.push(text.unwrap_or_default()),
            DcField::Creator => self.creators.push(text.unwrap_or_default()),
            DcField::Subject => self.subjects.push(text.unwrap_or_default()),
            DcField::Description => self.descriptions.push(text),
            DcField::Identifier => self.identifiers.push(text.unwrap_or_default()),
            DcField::Date => self.dates.push(text.unwrap_or_default()),
        }
    }
}
