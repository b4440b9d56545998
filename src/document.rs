// src/document.rs
//! Minimal element tree built from a `quick-xml` event stream.
//!
//! Only what the listing parser needs: element names, the text that appears
//! before an element's first child, and ordered children. Attributes,
//! comments and processing instructions are dropped.

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{ReportError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Character data before the first child element, verbatim.
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// First direct child with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first direct child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.find(name).map(|c| c.text.as_str())
    }

    fn push_text(&mut self, s: &str) {
        // Text after a child element is a tail, not this element's text.
        if self.children.is_empty() {
            self.text.push_str(s);
        }
    }
}

/// XML end-of-line handling: `\r\n` and a lone `\r` both become `\n`.
/// Character references such as `&#13;` are untouched, they expand later.
pub fn normalize_line_endings(xml: &str) -> Cow<'_, str> {
    if xml.contains('\r') {
        Cow::Owned(xml.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(xml)
    }
}

/// Parse a whole document and return its root element.
pub fn parse_document(xml: &str) -> Result<Element> {
    let xml = normalize_line_endings(xml);
    let mut reader = Reader::from_str(&xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            ReportError::Parse(format!("at byte {}: {e}", reader.buffer_position()))
        })?;

        match event {
            Event::Start(ref e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if stack.is_empty() && root.is_some() {
                    return Err(ReportError::Parse(format!(
                        "second root element <{name}>"
                    )));
                }
                stack.push(Element::new(name));
            }
            Event::Empty(ref e) => {
                let el = Element::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| ReportError::Parse("closing tag without opening tag".into()))?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(ref t) => {
                let text = t
                    .unescape()
                    .map_err(|e| ReportError::Parse(format!("bad character data: {e}")))?;
                match stack.last_mut() {
                    Some(parent) => parent.push_text(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(ReportError::Parse(
                            "character data outside the root element".into(),
                        ))
                    }
                }
            }
            Event::CData(ref c) => {
                let text = String::from_utf8_lossy(c);
                match stack.last_mut() {
                    Some(parent) => parent.push_text(&text),
                    None => {
                        return Err(ReportError::Parse(
                            "CDATA section outside the root element".into(),
                        ))
                    }
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ReportError::Parse(format!(
            "document ended with <{}> still open",
            open.name
        )));
    }
    root.ok_or_else(|| ReportError::Parse("document has no root element".into()))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_none() => *root = Some(el),
        None => {
            return Err(ReportError::Parse(format!(
                "second root element <{}>",
                el.name
            )))
        }
    }
    Ok(())
}
