use std::{borrow::Cow, io::BufRead};

use quick_xml::{
    events::{BytesStart, BytesText, Event},
    Reader,
};
use thiserror::Error;

use super::{Attribute, Document, Element, Node};
use crate::constants::TAG_REPORT;

#[derive(Error, Debug)]
pub enum ReportParseError {
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
    #[error("malformed XML: {0}")]
    Malformed(#[from] quick_xml::Error),
    #[error("invalid UTF-8 in {0}")]
    InvalidUtf8(&'static str),
    #[error("no root element found")]
    RootNotFound,
    #[error("multiple root elements found")]
    RootMultipleFound,
    #[error("root element is <{0}>, expected <testsuites>")]
    RootMisnamed(String),
    #[error("text found outside of the root element")]
    TextOutsideRoot,
    #[error("element <{0}> is never closed")]
    UnclosedElement(String),
}

/// Builds a [`Document`] from a stream of quick-xml events.
///
/// Whitespace-only text is discarded, so the tree only carries content that
/// is meaningful once the document is re-indented on write.
#[derive(Debug, Default)]
pub struct ReportParser {
    doctype: Option<String>,
    prolog: Vec<Node>,
    epilog: Vec<Node>,
    root: Option<Element>,
    open_elements: Vec<Element>,
}

impl ReportParser {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn parse<R: BufRead>(mut self, xml: R) -> Result<Document, ReportParseError> {
        let mut reader = Reader::from_reader(xml);

        let mut buf = Vec::new();
        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|source| ReportParseError::Xml {
                    position: reader.error_position(),
                    source,
                })?;
            if let Event::Eof = event {
                break;
            }
            self.match_event(event)?;
            buf.clear();
        }

        self.into_document()
    }

    fn match_event(&mut self, event: Event) -> Result<(), ReportParseError> {
        match event {
            Event::Start(e) => {
                let element = open_element(&e)?;
                self.open_elements.push(element);
            }
            // quick-xml rejects end tags that do not match the open element.
            Event::End(_) => {
                if let Some(element) = self.open_elements.pop() {
                    self.attach(Node::Element(element))?;
                }
            }
            Event::Empty(e) => {
                let element = open_element(&e)?;
                self.attach(Node::Element(element))?;
            }
            Event::Text(e) => {
                if let Some(text) = text_value(&e)? {
                    self.attach(Node::Text(text))?;
                }
            }
            Event::CData(e) => {
                let value = decode(&e, "CDATA section")?;
                self.attach(Node::CData(value.into_owned()))?;
            }
            Event::Comment(e) => {
                let value = decode(&e, "comment")?;
                self.attach(Node::Comment(value.into_owned()))?;
            }
            Event::PI(e) => {
                let value = decode(&e, "processing instruction")?;
                self.attach(Node::ProcessingInstruction(value.into_owned()))?;
            }
            Event::DocType(e) => {
                let value = decode(&e, "DOCTYPE")?;
                self.doctype = Some(value.trim().to_string());
            }
            // The declaration is regenerated on write.
            _ => (),
        };
        Ok(())
    }

    fn attach(&mut self, node: Node) -> Result<(), ReportParseError> {
        if let Some(parent) = self.open_elements.last_mut() {
            parent.push_child(node);
            return Ok(());
        }

        match node {
            Node::Element(element) => {
                if self.root.is_some() {
                    return Err(ReportParseError::RootMultipleFound);
                }
                self.root = Some(element);
            }
            Node::Text(_) | Node::CData(_) => return Err(ReportParseError::TextOutsideRoot),
            other => {
                if self.root.is_some() {
                    self.epilog.push(other);
                } else {
                    self.prolog.push(other);
                }
            }
        }
        Ok(())
    }

    fn into_document(mut self) -> Result<Document, ReportParseError> {
        if let Some(unclosed) = self.open_elements.pop() {
            return Err(ReportParseError::UnclosedElement(unclosed.name().to_string()));
        }

        let root = self.root.ok_or(ReportParseError::RootNotFound)?;
        if !root.is_named(TAG_REPORT) {
            return Err(ReportParseError::RootMisnamed(root.name().to_string()));
        }

        Ok(Document {
            doctype: self.doctype,
            prolog: self.prolog,
            root,
            epilog: self.epilog,
        })
    }
}

pub fn parse_document<R: BufRead>(xml: R) -> Result<Document, ReportParseError> {
    ReportParser::new().parse(xml)
}

fn open_element(e: &BytesStart) -> Result<Element, ReportParseError> {
    let mut element = Element::new(decode(e.name().as_ref(), "element name")?);
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let name = decode(attr.key.as_ref(), "attribute name")?;
        let value = attr.unescape_value()?;
        element.attributes.push(Attribute::new(name, value));
    }
    Ok(element)
}

fn text_value(e: &BytesText) -> Result<Option<String>, ReportParseError> {
    let value = e.unescape()?;
    if value.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(value.into_owned()))
}

fn decode<'a>(bytes: &'a [u8], what: &'static str) -> Result<Cow<'a, str>, ReportParseError> {
    std::str::from_utf8(bytes)
        .map(Cow::Borrowed)
        .map_err(|_| ReportParseError::InvalidUtf8(what))
}
