//! Minimal generic markup-tree reader on top of quick-xml.
//!
//! The descriptor parser needs whole-subtree access (child lookup by name,
//! text content) rather than streaming, so the event stream is folded into
//! a small document tree first.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::SvdError;

/// One element of a parsed markup document.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Concatenated text content directly inside this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Parse a markup document and return its root element.
    pub fn parse(xml: &str) -> Result<Element, SvdError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);
        let mut buf = Vec::new();

        // The bottom entry is a synthetic document container collecting
        // top-level elements.
        let mut stack = vec![Element::default()];

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => stack.push(element_from(e)?),
                Ok(Event::Empty(ref e)) => {
                    let element = element_from(e)?;
                    stack.last_mut().unwrap().children.push(element);
                }
                Ok(Event::End(_)) => {
                    if stack.len() < 2 {
                        return Err(SvdError::Syntax("unexpected closing tag".into()));
                    }
                    let element = stack.pop().unwrap();
                    stack.last_mut().unwrap().children.push(element);
                }
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .unescape()
                        .map_err(|err| SvdError::Syntax(err.to_string()))?;
                    stack.last_mut().unwrap().text.push_str(&text);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => return Err(SvdError::Syntax(err.to_string())),
            }
            buf.clear();
        }

        if stack.len() != 1 {
            return Err(SvdError::Syntax(
                "unexpected end of document: unclosed element".into(),
            ));
        }
        let mut document = stack.pop().unwrap();
        if document.children.len() != 1 {
            return Err(SvdError::Syntax(format!(
                "expected a single root element, found {}",
                document.children.len()
            )));
        }
        Ok(document.children.remove(0))
    }

    /// First child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Trimmed text of the first child with the given tag name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|child| child.text.trim())
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn element_from(start: &BytesStart<'_>) -> Result<Element, SvdError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|err| SvdError::Syntax(err.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| SvdError::Syntax(err.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}
