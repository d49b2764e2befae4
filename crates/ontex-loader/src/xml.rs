//! Namespace-resolved element tree built from quick-xml events
//!
//! The loader only ever looks at the root element's direct children and their
//! direct children, so a small owned tree is simpler to query than a
//! streaming state machine. Every element and attribute name is resolved to
//! its namespace URI; prefixes never leak past this module.
//!
//! Input is raw bytes. The encoding comes from a byte-order mark or the XML
//! declaration, and every name, attribute and text node is decoded with it.

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, QName, ResolveResult};
use quick_xml::NsReader;

use crate::error::LoadError;

/// An XML name resolved against the in-scope namespace declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedName {
    /// Namespace URI, `None` when the name is unqualified and no default applies
    pub namespace: Option<String>,
    /// Local part of the name
    pub local: String,
}

impl ExpandedName {
    /// Whether this name is `{namespace}local`
    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.local == local && self.namespace.as_deref() == Some(namespace)
    }

    /// Whether this name lives in `namespace`
    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.namespace.as_deref() == Some(namespace)
    }
}

/// An attribute with a resolved name and unescaped value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Resolved attribute name
    pub name: ExpandedName,
    /// Unescaped value
    pub value: String,
}

/// An element with its attributes, leading text and child elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Resolved element name
    pub name: ExpandedName,
    /// Attributes in document order (namespace declarations excluded)
    pub attributes: Vec<Attribute>,
    /// Text content before the first child element
    pub text: String,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Value of the attribute `{namespace}local`
    pub fn attribute(&self, namespace: &str, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.is(namespace, local))
            .map(|a| a.value.as_str())
    }

    /// Direct children named `{namespace}local`, in document order
    pub fn children_named<'a>(
        &'a self,
        namespace: &'a str,
        local: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name.is(namespace, local))
    }

    /// First direct child named `{namespace}local`
    pub fn child_named(&self, namespace: &str, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name.is(namespace, local))
    }
}

/// Parse a whole document into its root element
///
/// # Errors
/// Returns [`LoadError::Xml`] for syntax errors, mismatched or unclosed tags,
/// malformed attributes, undeclared prefixes, a missing root element,
/// content outside the root element, and bytes the document's encoding
/// cannot decode.
pub fn parse_document(content: &[u8]) -> Result<Element, LoadError> {
    let mut reader = NsReader::from_reader(content);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position() as u64;
        // Settled by the declaration, which is read before any element
        let decoder = reader.decoder();
        let (namespace, event) = match reader.read_resolved_event() {
            Ok((resolved, event)) => (namespace_uri(decoder, resolved), event),
            Err(e) => return Err(LoadError::Xml(format!("at byte {}: {}", position, e))),
        };

        match event {
            Event::Start(start) => {
                let element = open_element(&reader, decoder, namespace?, &start)?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open_element(&reader, decoder, namespace?, &start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    LoadError::Xml(format!("at byte {}: unexpected closing tag", position))
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                push_text(&mut stack, &text, position)?;
            }
            Event::CData(cdata) => {
                let text = cdata.decode()?;
                push_text(&mut stack, &text, position)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(LoadError::Xml(format!(
            "unclosed element <{}> at end of document",
            open.name.local
        )));
    }
    root.ok_or_else(|| LoadError::Xml("document has no root element".to_string()))
}

fn namespace_uri(decoder: Decoder, resolved: ResolveResult<'_>) -> Result<Option<String>, LoadError> {
    match resolved {
        ResolveResult::Bound(Namespace(ns)) => Ok(Some(decode(decoder, ns)?)),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(LoadError::Xml(format!(
            "undeclared namespace prefix `{}`",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

fn open_element(
    reader: &NsReader<&[u8]>,
    decoder: Decoder,
    namespace: Option<String>,
    start: &BytesStart<'_>,
) -> Result<Element, LoadError> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_namespace_binding().is_some() || is_xml_reserved(attr.key) {
            continue;
        }
        let (resolved, local) = reader.resolve_attribute(attr.key);
        attributes.push(Attribute {
            name: ExpandedName {
                namespace: namespace_uri(decoder, resolved)?,
                local: decode(decoder, local.as_ref())?,
            },
            value: attr.decode_and_unescape_value(decoder)?.into_owned(),
        });
    }

    Ok(Element {
        name: ExpandedName {
            namespace,
            local: decode(decoder, start.local_name().as_ref())?,
        },
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

fn decode(decoder: Decoder, bytes: &[u8]) -> Result<String, LoadError> {
    Ok(decoder.decode(bytes)?.into_owned())
}

/// `xml:lang`, `xml:base` and friends carry nothing the loader reads
fn is_xml_reserved(key: QName<'_>) -> bool {
    key.prefix().is_some_and(|p| p.as_ref() == b"xml")
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), LoadError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => {
            return Err(LoadError::Xml(format!(
                "second root element <{}>",
                element.name.local
            )));
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str, position: u64) -> Result<(), LoadError> {
    match stack.last_mut() {
        // Only the text before the first child counts as the element's text
        Some(current) if current.children.is_empty() => current.text.push_str(text),
        Some(_) => {}
        None if !text.trim().is_empty() => {
            return Err(LoadError::Xml(format!(
                "at byte {}: text outside the root element",
                position
            )));
        }
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    #[test]
    fn test_prefixes_resolve_to_namespaces() {
        let doc = r#"<r:RDF xmlns:r="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns="urn:d#">
            <item r:about="urn:d#x">  hello  </item>
        </r:RDF>"#;
        let root = parse_document(doc.as_bytes()).unwrap();

        assert!(root.name.is(RDF, "RDF"));
        let item = &root.children[0];
        assert!(item.name.is("urn:d#", "item"));
        assert_eq!(item.attribute(RDF, "about"), Some("urn:d#x"));
        assert_eq!(item.text.trim(), "hello");
    }

    #[test]
    fn test_text_stops_at_first_child() {
        let root = parse_document(b"<a>lead<b/>tail</a>").unwrap();
        assert_eq!(root.text, "lead");
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_entities_and_cdata_are_unescaped() {
        let root = parse_document(b"<a>Fish &amp; Chips<![CDATA[ <raw>]]></a>").unwrap();
        assert_eq!(root.text, "Fish & Chips <raw>");
    }

    #[test]
    fn test_xml_base_is_ignored() {
        let root = parse_document(br#"<a xml:base="http://x.org/"/>"#).unwrap();
        assert!(root.attributes.is_empty());
    }

    #[test]
    fn test_mismatched_tags_rejected() {
        assert!(matches!(parse_document(b"<a><b></a></b>"), Err(LoadError::Xml(_))));
    }

    #[test]
    fn test_unclosed_element_rejected() {
        assert!(matches!(parse_document(b"<a><b>"), Err(LoadError::Xml(_))));
    }

    #[test]
    fn test_undeclared_prefix_rejected() {
        assert!(matches!(parse_document(b"<x:a/>"), Err(LoadError::Xml(_))));
    }

    #[test]
    fn test_empty_document_rejected() {
        assert!(matches!(parse_document(b""), Err(LoadError::Xml(_))));
        assert!(matches!(parse_document(b"not xml at all"), Err(LoadError::Xml(_))));
    }

    #[test]
    fn test_child_lookup_helpers() {
        let doc = r#"<root xmlns:r="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
            <r:type r:resource="A"/><other/><r:type r:resource="B"/>
        </root>"#;
        let root = parse_document(doc.as_bytes()).unwrap();

        let types: Vec<&str> = root
            .children_named(RDF, "type")
            .filter_map(|c| c.attribute(RDF, "resource"))
            .collect();
        assert_eq!(types, vec!["A", "B"]);
        assert!(root.child_named(RDF, "missing").is_none());
    }

    #[test]
    fn test_declared_latin1_is_decoded() {
        let mut doc = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<dish r:about=\"urn:d#Velout".to_vec();
        doc.push(0xE9);
        doc.extend_from_slice(b"\" xmlns:r=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\">Velout");
        doc.push(0xE9);
        doc.extend_from_slice(b"</dish>");

        let root = parse_document(&doc).unwrap();
        assert_eq!(root.attribute(RDF, "about"), Some("urn:d#Velouté"));
        assert_eq!(root.text, "Velouté");
    }

    #[test]
    fn test_undecodable_bytes_rejected() {
        let doc = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><a>caf\xE9</a>";
        assert!(matches!(parse_document(doc), Err(LoadError::Xml(_))));
    }
}
