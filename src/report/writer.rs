use std::io::Write;

use quick_xml::{
    events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event},
    Writer,
};
use thiserror::Error;

use super::{Document, Element, Node};

const INDENT_CHAR: u8 = b' ';
const INDENT_SIZE: usize = 4;

#[derive(Error, Debug)]
pub enum ReportWriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
}

/// Serializes `document` with a fixed declaration and indentation, so equal
/// trees always produce equal bytes.
pub fn write_document<W: Write>(document: &Document, out: W) -> Result<(), ReportWriteError> {
    let mut writer = Writer::new_with_indent(out, INDENT_CHAR, INDENT_SIZE);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    if let Some(doctype) = &document.doctype {
        writer.write_event(Event::DocType(BytesText::from_escaped(doctype.as_str())))?;
    }
    for node in &document.prolog {
        write_node(&mut writer, node)?;
    }
    write_element(&mut writer, &document.root)?;
    for node in &document.epilog {
        write_node(&mut writer, node)?;
    }

    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

pub fn to_bytes(document: &Document) -> Result<Vec<u8>, ReportWriteError> {
    let mut bytes = Vec::new();
    write_document(document, &mut bytes)?;
    Ok(bytes)
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> Result<(), ReportWriteError> {
    match node {
        Node::Element(element) => write_element(writer, element)?,
        Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        Node::CData(text) => writer.write_event(Event::CData(BytesCData::new(text.as_str())))?,
        Node::Comment(text) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?
        }
        Node::ProcessingInstruction(text) => {
            writer.write_event(Event::PI(BytesPI::new(text.as_str())))?
        }
    };
    Ok(())
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &Element,
) -> Result<(), ReportWriteError> {
    let mut start = BytesStart::new(element.name());
    for attribute in element.attributes() {
        start.push_attribute((attribute.name.as_str(), attribute.value.as_str()));
    }

    if element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in element.children() {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
