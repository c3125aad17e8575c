//! SAX-style event delivery on top of `quick-xml`.
//!
//! `parse_document` pulls events from the parser and hands each one to a
//! `DocumentHandler`. Element and attribute names are namespace-local, and
//! attribute values and text arrive already unescaped. Character content may
//! be split across several `characters` calls (text around a CDATA section,
//! for instance), so handlers must accumulate it.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::XmlDictError;

/// Attributes of one start tag, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a mandatory attribute; its absence is a structural error.
    pub fn require(&self, element: &str, name: &str) -> Result<&str, XmlDictError> {
        self.get(name).ok_or_else(|| {
            XmlDictError::Structure(format!("<{element}> is missing attribute \"{name}\""))
        })
    }

    /// Parse a mandatory integer attribute. Surrounding whitespace is an error.
    pub fn require_int(&self, element: &str, name: &str) -> Result<i32, XmlDictError> {
        let value = self.require(element, name)?;
        value
            .parse()
            .map_err(|source| XmlDictError::Format {
                attr: name.to_string(),
                value: value.to_string(),
                source,
            })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Receiver of document events, called in document order.
pub trait DocumentHandler {
    fn start_element(&mut self, name: &str, attrs: &Attributes) -> Result<(), XmlDictError>;

    fn characters(&mut self, _text: &str) -> Result<(), XmlDictError> {
        Ok(())
    }

    fn end_element(&mut self, _name: &str) -> Result<(), XmlDictError> {
        Ok(())
    }
}

/// Parse one complete document from `source`, feeding `handler`.
///
/// Fails on the first parser error or handler error; the handler may have
/// seen a prefix of the document by then.
pub fn parse_document<R: BufRead, H: DocumentHandler>(
    source: R,
    handler: &mut H,
) -> Result<(), XmlDictError> {
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                enter_element(&mut depth, &mut seen_root)?;
                let (name, attrs) = read_start(&e)?;
                handler.start_element(&name, &attrs)?;
            }
            Event::Empty(e) => {
                enter_element(&mut depth, &mut seen_root)?;
                let (name, attrs) = read_start(&e)?;
                handler.start_element(&name, &attrs)?;
                handler.end_element(&name)?;
                depth -= 1;
            }
            Event::End(e) => {
                if depth == 0 {
                    return Err(XmlDictError::Structure(
                        "closing tag without matching opening tag".into(),
                    ));
                }
                depth -= 1;
                let name = utf8(e.local_name().into_inner())?;
                handler.end_element(name)?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                if depth == 0 {
                    if !text.trim().is_empty() {
                        return Err(XmlDictError::Structure(
                            "text outside the root element".into(),
                        ));
                    }
                } else {
                    handler.characters(&text)?;
                }
            }
            Event::CData(e) => {
                if depth == 0 {
                    return Err(XmlDictError::Structure(
                        "CDATA outside the root element".into(),
                    ));
                }
                handler.characters(utf8(&e)?)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes.
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(XmlDictError::Structure(format!(
            "unexpected end of document with {depth} unclosed element(s)"
        )));
    }
    if !seen_root {
        return Err(XmlDictError::Structure("document has no root element".into()));
    }
    Ok(())
}

fn enter_element(depth: &mut usize, seen_root: &mut bool) -> Result<(), XmlDictError> {
    if *depth == 0 {
        if *seen_root {
            return Err(XmlDictError::Structure(
                "more than one root element".into(),
            ));
        }
        *seen_root = true;
    }
    *depth += 1;
    Ok(())
}

fn read_start(e: &BytesStart<'_>) -> Result<(String, Attributes), XmlDictError> {
    let name = utf8(e.local_name().into_inner())?.to_string();
    let mut pairs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| {
            XmlDictError::Structure(format!("invalid attribute in <{name}>: {err}"))
        })?;
        // `xmlns` and `xmlns:*` declare namespaces; they are not attributes.
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = utf8(attr.key.local_name().into_inner())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        pairs.push((key, value));
    }
    Ok((name, Attributes { pairs }))
}

fn utf8(bytes: &[u8]) -> Result<&str, XmlDictError> {
    std::str::from_utf8(bytes)
        .map_err(|e| XmlDictError::Structure(format!("invalid UTF-8 in document: {e}")))
}
