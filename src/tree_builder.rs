//! Builds a navigable `XmlDocument` from raw bytes.
//!
//! The reader never expands entities and refuses DTDs outright: a `<!DOCTYPE>` is an error no
//! matter what it declares, and any entity reference besides the five predefined ones (or a
//! character reference) fails to unescape. This closes off external entity resolution and entity
//! expansion bombs without any configuration.

use crate::err::{ParseError, ParseResult};
use crate::model::xml::{ElementId, XmlAttribute, XmlDocument, XmlElement};

use log::trace;
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Namespace resolution result, detached from the reader's namespace buffer.
enum ResolvedNamespace {
    Bound(String),
    Unbound,
    Unknown(String),
}

impl From<ResolveResult<'_>> for ResolvedNamespace {
    fn from(result: ResolveResult<'_>) -> Self {
        match result {
            ResolveResult::Bound(ns) => {
                ResolvedNamespace::Bound(String::from_utf8_lossy(ns.as_ref()).into_owned())
            }
            ResolveResult::Unbound => ResolvedNamespace::Unbound,
            ResolveResult::Unknown(prefix) => {
                ResolvedNamespace::Unknown(String::from_utf8_lossy(&prefix).into_owned())
            }
        }
    }
}

#[derive(Default)]
struct TreeBuilder {
    elements: Vec<XmlElement>,
    open: Vec<ElementId>,
}

impl TreeBuilder {
    fn open_element(
        &mut self,
        namespace: ResolvedNamespace,
        start: &BytesStart<'_>,
        position: u64,
    ) -> ParseResult<()> {
        if self.open.is_empty() && !self.elements.is_empty() {
            return Err(ParseError::IllFormed {
                position,
                message: "document has more than one root element".to_owned(),
            });
        }

        let namespace = match namespace {
            ResolvedNamespace::Bound(uri) => Some(uri),
            ResolvedNamespace::Unbound => None,
            ResolvedNamespace::Unknown(prefix) => {
                return Err(ParseError::IllFormed {
                    position,
                    message: format!("namespace prefix `{}` is not bound", prefix),
                });
            }
        };

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| ParseError::MalformedXml {
                position,
                source: e.into(),
            })?;
            if attr.value.contains(&b'<') {
                return Err(ParseError::IllFormed {
                    position,
                    message: "`<` is not allowed in attribute values".to_owned(),
                });
            }
            let value = attr
                .unescape_value()
                .map_err(|source| ParseError::EntityReference { position, source })?;
            check_chars(&value, position)?;
            attributes.push(XmlAttribute {
                name: utf8(attr.key.as_ref(), position)?,
                value: value.into_owned(),
            });
        }

        let id = self.elements.len();
        if let Some(&parent) = self.open.last() {
            self.elements[parent].children.push(id);
        }

        self.elements.push(XmlElement {
            namespace,
            local_name: utf8(start.local_name().as_ref(), position)?,
            qualified_name: utf8(start.name().as_ref(), position)?,
            attributes,
            children: Vec::new(),
            text: String::new(),
        });
        self.open.push(id);

        Ok(())
    }

    fn close_element(&mut self, position: u64) -> ParseResult<()> {
        match self.open.pop() {
            Some(_) => Ok(()),
            None => Err(ParseError::IllFormed {
                position,
                message: "unexpected closing tag".to_owned(),
            }),
        }
    }

    fn characters(&mut self, text: &str, position: u64) -> ParseResult<()> {
        if self.open.is_empty() {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(ParseError::IllFormed {
                position,
                message: "text is not allowed outside of the root element".to_owned(),
            });
        }

        for &id in &self.open {
            self.elements[id].text.push_str(text);
        }
        Ok(())
    }

    fn finish(self, position: u64) -> ParseResult<XmlDocument> {
        if let Some(&id) = self.open.last() {
            return Err(ParseError::IllFormed {
                position,
                message: format!(
                    "unexpected end of input, `<{}>` is not closed",
                    self.elements[id].qualified_name
                ),
            });
        }
        if self.elements.is_empty() {
            return Err(ParseError::MissingRoot);
        }

        Ok(XmlDocument {
            elements: self.elements,
        })
    }
}

fn utf8(bytes: &[u8], position: u64) -> ParseResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| ParseError::IllFormed {
            position,
            message: format!("invalid UTF-8: {}", e),
        })
}

/// XML 1.0 allows no C0 controls besides tab, line feed and carriage return, and excludes the
/// two noncharacters at the end of the BMP.
fn check_chars(text: &str, position: u64) -> ParseResult<()> {
    let illegal = text.chars().find(|&c| {
        matches!(
            c,
            '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
        )
    });
    match illegal {
        Some(c) => Err(ParseError::IllFormed {
            position,
            message: format!("character U+{:04X} is not allowed in XML", c as u32),
        }),
        None => Ok(()),
    }
}

/// Parses `xml` into an element tree, failing closed on anything that is not well-formed.
pub fn build_tree(xml: &[u8]) -> ParseResult<XmlDocument> {
    let xml = xml.strip_prefix(UTF8_BOM).unwrap_or(xml);
    let mut reader = NsReader::from_reader(xml);
    reader.config_mut().check_comments = true;
    let mut builder = TreeBuilder::default();

    loop {
        let position = reader.buffer_position() as u64;
        let (namespace, event) = match reader
            .read_resolved_event()
            .map(|(ns, event)| (ResolvedNamespace::from(ns), event))
        {
            Ok(next) => next,
            Err(source) => {
                return Err(ParseError::MalformedXml {
                    position: reader.error_position() as u64,
                    source,
                });
            }
        };

        match event {
            Event::Start(start) => builder.open_element(namespace, &start, position)?,
            Event::Empty(start) => {
                builder.open_element(namespace, &start, position)?;
                builder.close_element(position)?;
            }
            Event::End(_) => builder.close_element(position)?,
            Event::Text(text) => {
                if text.windows(3).any(|w| w == b"]]>") {
                    return Err(ParseError::IllFormed {
                        position,
                        message: "`]]>` is not allowed in character data".to_owned(),
                    });
                }
                let text = text
                    .unescape()
                    .map_err(|source| ParseError::EntityReference { position, source })?;
                check_chars(&text, position)?;
                builder.characters(&text, position)?;
            }
            Event::CData(cdata) => {
                let text = utf8(&cdata, position)?;
                check_chars(&text, position)?;
                builder.characters(&text, position)?;
            }
            Event::DocType(_) => return Err(ParseError::DoctypeDisallowed { position }),
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) => {}
            Event::Eof => break,
        }
    }

    let document = builder.finish(reader.buffer_position() as u64)?;
    trace!("built XML tree with {} elements", document.len());
    Ok(document)
}
