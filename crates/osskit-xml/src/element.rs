//! A minimal owned XML element tree.
//!
//! Models are mapped onto this tree rather than onto a streaming reader so
//! that path-valued renames (`AccessControlList/Grant`) can be resolved by
//! walking children. Attributes, comments and processing instructions are
//! ignored.

use std::io::{self, Write};

use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::XmlError;

/// An XML element with its text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local name of the element.
    pub name: String,
    /// Concatenated character data directly inside this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a leaf element holding `text`.
    #[must_use]
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Append a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// The first child named `name`, created and appended if absent.
    pub fn child_or_insert(&mut self, name: &str) -> &mut Element {
        let index = match self.children.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.children.push(Element::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// The first descendant matching a `/`-delimited path of child names.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Element> {
        self.find_all(path).into_iter().next()
    }

    /// Every descendant matching a `/`-delimited path of child names, in
    /// document order.
    #[must_use]
    pub fn find_all(&self, path: &str) -> Vec<&Element> {
        let mut current = vec![self];
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .into_iter()
                .flat_map(|e| e.children.iter().filter(move |c| c.name == segment))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// Parse a document and return its root element.
    pub fn parse(xml: &[u8]) -> Result<Element, XmlError> {
        let mut reader = Reader::from_reader(xml);
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    stack.push(Element::new(decode_name(e.local_name().as_ref())?));
                }
                Event::Empty(e) => {
                    let element = Element::new(decode_name(e.local_name().as_ref())?);
                    match stack.last_mut() {
                        Some(parent) => parent.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Text(e) => {
                    if let Some(top) = stack.last_mut() {
                        let decoded = e
                            .decode()
                            .map_err(|err| XmlError::ParseError(err.to_string()))?;
                        top.text.push_str(&decoded);
                    }
                }
                Event::CData(e) => {
                    if let Some(top) = stack.last_mut() {
                        let text = std::str::from_utf8(&e)
                            .map_err(|err| XmlError::ParseError(err.to_string()))?;
                        top.text.push_str(text);
                    }
                }
                Event::GeneralRef(e) => {
                    if let Some(top) = stack.last_mut() {
                        if let Some(ch) = e.resolve_char_ref()? {
                            top.text.push(ch);
                        } else {
                            let name = e
                                .decode()
                                .map_err(|err| XmlError::ParseError(err.to_string()))?;
                            let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                                .ok_or_else(|| {
                                    XmlError::ParseError(format!("unknown entity &{name};"))
                                })?;
                            top.text.push_str(resolved);
                        }
                    }
                }
                Event::End(_) => {
                    let Some(element) = stack.pop() else {
                        return Err(XmlError::UnexpectedElement("unbalanced end tag".to_owned()));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Eof => {
                    return Err(XmlError::MissingElement("root element".to_owned()));
                }
                _ => {}
            }
        }
    }

    /// Render the element as a document, optionally preceded by an XML declaration.
    pub fn to_bytes(&self, declaration: bool) -> Result<Vec<u8>, XmlError> {
        let mut buf = Vec::with_capacity(256);
        let mut writer = Writer::new(&mut buf);
        if declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        write_element(&mut writer, self)?;
        Ok(buf)
    }
}

fn decode_name(raw: &[u8]) -> Result<String, XmlError> {
    std::str::from_utf8(raw)
        .map(str::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> io::Result<()> {
    let start = writer.create_element(element.name.as_str());
    if element.children.is_empty() {
        if element.text.is_empty() {
            start.write_empty()?;
        } else {
            start.write_text_content(BytesText::new(&element.text))?;
        }
        return Ok(());
    }
    start.write_inner_content(|w| -> io::Result<()> {
        for child in &element.children {
            write_element(w, child)?;
        }
        Ok(())
    })?;
    Ok(())
}
