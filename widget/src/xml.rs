//! XHTML parsing and serialization for the in-memory [`Document`].
//!
//! DESIGN
//! ======
//! Parsing uses `quick-xml`'s `NsReader`, so every element and attribute is
//! stored with its resolved namespace URI rather than its source prefix. That
//! is what parameter discovery matches on, and it means a page may bind the
//! params namespace to any prefix (or as the default namespace).
//!
//! TRADE-OFFS
//! ==========
//! Prefixes are not preserved. The serializer re-declares default namespaces
//! where they change and invents `nsN` prefixes for namespaced attributes.
//! The output is equivalent XML, not byte-identical to the input.

#[cfg(test)]
#[path = "xml_test.rs"]
mod xml_test;

use quick_xml::NsReader;
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::Event;
use quick_xml::events::attributes::AttrError;
use quick_xml::name::ResolveResult;

use crate::consts::XML_NS;
use crate::document::{Document, NodeId, NodeKind};
use crate::dom::{Dom, DomError};

/// Error returned by [`parse`].
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The input is not well-formed XML.
    #[error("malformed XML at byte {position}: {source}")]
    Syntax {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
    /// An attribute could not be read.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),
    /// An element or attribute uses a prefix with no namespace binding.
    #[error("unbound namespace prefix '{0}'")]
    UnboundPrefix(String),
    /// The input ended inside an element.
    #[error("unclosed element <{0}>")]
    Unclosed(String),
    /// A tree operation failed while building the document.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Named entities accepted on top of the five predefined XML ones.
fn resolve_entity(name: &str) -> Option<&'static str> {
    match name {
        "nbsp" => Some("\u{a0}"),
        "copy" => Some("\u{a9}"),
        "mdash" => Some("\u{2014}"),
        "hellip" => Some("\u{2026}"),
        _ => None,
    }
}

fn namespace_of(resolved: ResolveResult<'_>) -> Result<Option<String>, XmlError> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(String::from_utf8_lossy(ns.as_ref()).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(XmlError::UnboundPrefix(String::from_utf8_lossy(&prefix).into_owned())),
    }
}

/// Parse an XHTML (or any XML) document.
pub fn parse(source: &str) -> Result<Document, XmlError> {
    let mut doc = Document::new();
    let mut reader = NsReader::from_str(source);
    reader.config_mut().trim_text(false);

    // Open elements; the bottom entry is the document node.
    let mut stack: Vec<(NodeId, String)> = vec![(doc.root(), String::new())];

    loop {
        let position = u64::try_from(reader.buffer_position()).unwrap_or(u64::MAX);
        let (resolved, event) = reader
            .read_resolved_event()
            .map_err(|source| XmlError::Syntax { position, source })?;

        let parent = stack.last().map_or(doc.root(), |(id, _)| *id);

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let namespace = namespace_of(resolved)?;
                let local = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                let element = doc.create_element_ns(namespace.as_deref(), &local);

                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_namespace_binding().is_some() {
                        continue;
                    }
                    let (attr_resolved, attr_local) = reader.resolve_attribute(attr.key);
                    let attr_namespace = namespace_of(attr_resolved)?;
                    let name = String::from_utf8_lossy(attr_local.as_ref()).into_owned();
                    let value = attr
                        .unescape_value_with(resolve_entity)
                        .map_err(|source| XmlError::Syntax { position, source })?;
                    doc.set_attribute_ns(element, attr_namespace.as_deref(), &name, &value)?;
                }

                doc.append_child(&parent, &element)?;
                if matches!(event, Event::Start(_)) {
                    stack.push((element, local));
                }
            }
            Event::End(_) => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            Event::Text(ref t) => {
                let text = t
                    .unescape_with(resolve_entity)
                    .map_err(|source| XmlError::Syntax { position, source })?;
                if !text.is_empty() {
                    let node = doc.create_node(NodeKind::Text(text.into_owned()));
                    doc.append_child(&parent, &node)?;
                }
            }
            Event::CData(c) => {
                let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                let node = doc.create_node(NodeKind::Text(text));
                doc.append_child(&parent, &node)?;
            }
            Event::Comment(ref t) => {
                let node = doc.create_node(NodeKind::Comment(String::from_utf8_lossy(t).into_owned()));
                doc.append_child(&parent, &node)?;
            }
            Event::PI(ref p) => {
                let node = doc.create_node(NodeKind::ProcessingInstruction(String::from_utf8_lossy(p).into_owned()));
                doc.append_child(&parent, &node)?;
            }
            Event::DocType(ref t) => {
                let node = doc.create_node(NodeKind::Doctype(String::from_utf8_lossy(t).trim().to_owned()));
                doc.append_child(&parent, &node)?;
            }
            Event::Decl(ref d) => {
                doc.set_declaration(Some(String::from_utf8_lossy(d).into_owned()));
            }
            Event::Eof => break,
        }
    }

    if let Some((_, name)) = stack.get(1) {
        return Err(XmlError::Unclosed(name.clone()));
    }
    Ok(doc)
}

/// Serialize a document back to XML text.
#[must_use]
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    if let Some(declaration) = doc.declaration() {
        out.push_str("<?");
        out.push_str(declaration);
        out.push_str("?>");
    }
    for child in doc.children_of(doc.root()) {
        write_node(doc, *child, None, &mut out);
    }
    out
}

fn write_node(doc: &Document, id: NodeId, inherited_ns: Option<&str>, out: &mut String) {
    match doc.kind(id) {
        Some(NodeKind::Element { name, attributes }) => {
            out.push('<');
            out.push_str(&name.local);

            let namespace = name.namespace.as_deref();
            if namespace != inherited_ns {
                out.push_str(" xmlns=\"");
                out.push_str(&escape(namespace.unwrap_or("")));
                out.push('"');
            }

            let mut prefixes: Vec<&str> = Vec::new();
            for attr in attributes {
                out.push(' ');
                match attr.namespace.as_deref() {
                    None => {}
                    Some(XML_NS) => out.push_str("xml:"),
                    Some(ns) => {
                        let found = prefixes.iter().position(|p| *p == ns);
                        let index = if let Some(index) = found {
                            index
                        } else {
                            prefixes.push(ns);
                            prefixes.len() - 1
                        };
                        out.push_str(&format!("ns{index}:"));
                    }
                }
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&escape(attr.value.as_str()));
                out.push('"');
            }
            for (index, ns) in prefixes.iter().enumerate() {
                out.push_str(&format!(" xmlns:ns{index}=\"{}\"", escape(*ns)));
            }

            let children = doc.children_of(id);
            if children.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in children {
                write_node(doc, *child, namespace, out);
            }
            out.push_str("</");
            out.push_str(&name.local);
            out.push('>');
        }
        Some(NodeKind::Text(text)) => out.push_str(&partial_escape(text.as_str())),
        Some(NodeKind::Comment(body)) => {
            out.push_str("<!--");
            out.push_str(body);
            out.push_str("-->");
        }
        Some(NodeKind::ProcessingInstruction(body)) => {
            out.push_str("<?");
            out.push_str(body);
            out.push_str("?>");
        }
        Some(NodeKind::Doctype(body)) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(body);
            out.push('>');
        }
        Some(NodeKind::Document) => {
            for child in doc.children_of(id) {
                write_node(doc, *child, inherited_ns, out);
            }
        }
        None => {}
    }
}
