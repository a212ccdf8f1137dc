//! [`XmlBackend`] built on the `quick-xml` pull reader

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

use super::error::{SyntaxError, SyntaxErrorKind};
use super::tree::{Document, NodeId};
use super::XmlBackend;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickXmlBackend;

impl XmlBackend for QuickXmlBackend {
    fn parse(&self, input: &str) -> Result<Document, SyntaxError> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().check_end_names = true;

        let mut document = Document::new();
        let mut open: Vec<NodeId> = Vec::new();

        loop {
            let position = reader.buffer_position() as usize;
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    let id = open_element(&mut document, &open, &start, position)?;
                    open.push(id);
                }
                Ok(Event::Empty(start)) => {
                    open_element(&mut document, &open, &start, position)?;
                }
                Ok(Event::End(_)) => {
                    open.pop();
                }
                Ok(Event::Text(text)) => {
                    let value = text.unescape().map_err(|e| {
                        SyntaxError::from_reader(
                            &quick_xml::Error::from(e),
                            reader.buffer_position() as usize,
                        )
                    })?;
                    append_text(&mut document, &open, &value, position)?;
                }
                Ok(Event::CData(data)) => {
                    let bytes = data.into_inner();
                    let value = std::str::from_utf8(&bytes).map_err(|_| {
                        SyntaxError::new(
                            SyntaxErrorKind::InvalidCharacter,
                            "CDATA section is not valid UTF-8",
                            position,
                        )
                    })?;
                    append_text(&mut document, &open, value, position)?;
                }
                Ok(Event::Eof) => break,
                // Comments, declarations, processing instructions, DOCTYPE
                Ok(_) => {}
                Err(error) => {
                    return Err(SyntaxError::from_reader(
                        &error,
                        reader.error_position() as usize,
                    ));
                }
            }
        }

        if let Some(&unclosed) = open.last() {
            let name = document.element(unclosed).name().to_string();
            return Err(SyntaxError::new(
                SyntaxErrorKind::UnclosedTag,
                format!("unclosed tag <{name}> at end of input"),
                input.len(),
            ));
        }

        if document.root().is_none() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::Truncated,
                "document ends before any root element",
                input.len(),
            ));
        }

        trace!(elements = document.len(), "Built XML tree");
        Ok(document)
    }
}

fn open_element(
    document: &mut Document,
    open: &[NodeId],
    start: &BytesStart<'_>,
    position: usize,
) -> Result<NodeId, SyntaxError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|_| {
            SyntaxError::new(
                SyntaxErrorKind::InvalidCharacter,
                "element name is not valid UTF-8",
                position,
            )
        })?
        .to_string();

    if !is_xml_name(&name) {
        return Err(SyntaxError::new(
            SyntaxErrorKind::InvalidCharacter,
            format!("invalid element name <{name}>"),
            position,
        ));
    }

    let parent = open.last().copied();
    if parent.is_none() && document.root().is_some() {
        return Err(SyntaxError::new(
            SyntaxErrorKind::Unknown,
            format!("extra content at the end of the document: <{name}>"),
            position,
        ));
    }

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| {
            SyntaxError::from_reader(&quick_xml::Error::InvalidAttr(e), position)
        })?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|_| {
                SyntaxError::new(
                    SyntaxErrorKind::InvalidCharacter,
                    "attribute name is not valid UTF-8",
                    position,
                )
            })?
            .to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| SyntaxError::from_reader(&quick_xml::Error::from(e), position))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(document.push_element(parent, name, attributes, position))
}

fn append_text(
    document: &mut Document,
    open: &[NodeId],
    text: &str,
    position: usize,
) -> Result<(), SyntaxError> {
    match open.last() {
        Some(&parent) => {
            document.push_text(parent, text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(SyntaxError::new(
            SyntaxErrorKind::Unknown,
            "text content outside the root element",
            position,
        )),
    }
}

/// Loose check of the XML `Name` production: no leading digit or
/// punctuation, and only name characters after that.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let valid_start = |c: char| c.is_alphabetic() || c == '_' || c == ':';
    valid_start(first)
        && chars.all(|c| valid_start(c) || c.is_alphanumeric() || matches!(c, '-' | '.'))
}
