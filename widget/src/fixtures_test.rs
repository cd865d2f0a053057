//! Host page fixtures shared by the unit tests.

use crate::document::{Document, NodeId, NodeKind, parse_style};
use crate::dom::Dom;

pub const ENDPOINT: &str = "http://example/cgi-bin/x";
pub const SLOT: &str = "shell-slot";

/// A complete XHTML host page with `head_extra` appended to `<head>` and
/// `body` as the body content. The params namespace is bound to `p:`.
pub fn host_page(head_extra: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:p="/2011/02/19/bash_c_ui/params">
<head>
<title>host</title>
{head_extra}
</head>
<body>
{body}
</body>
</html>
"#
    )
}

/// A params block with one URL entry and one mount entry.
pub fn params_block(url: &str, target_id: &str) -> String {
    format!(
        r#"<p:bash_c_params>
<p:bash_c_cgi_bin_url value="{url}"/>
<p:bash_c_ui target_id="{target_id}"/>
</p:bash_c_params>"#
    )
}

/// The canonical configured page: params for `ENDPOINT`/`SLOT` and a placeholder.
pub fn configured_page() -> String {
    host_page(&params_block(ENDPOINT, SLOT), &format!(r#"<div id="{SLOT}">loading</div>"#))
}

pub fn parse(source: &str) -> Document {
    crate::xml::parse(source).unwrap()
}

/// Read-side helpers the assertions use to inspect a document.
impl Document {
    /// One inline style property of an element.
    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        let style = self.attribute(&id, "style")?;
        parse_style(&style).into_iter().find(|(k, _)| k == property).map(|(_, v)| v)
    }

    /// The first element child of the document node.
    pub fn document_element(&self) -> Option<NodeId> {
        self.children_of(self.root())
            .iter()
            .copied()
            .find(|c| matches!(self.kind(*c), Some(NodeKind::Element { .. })))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|n| match self.kind(n) {
                Some(NodeKind::Text(t)) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Descendant elements (including `id`) with the given local name.
    pub fn elements_named(&self, id: NodeId, local: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|n| matches!(self.kind(*n), Some(NodeKind::Element { name, .. }) if name.local == local))
            .collect()
    }
}

#[test]
fn text_content_concatenates_in_order() {
    let doc = parse("<a>a<b>b</b>c</a>");
    let a = doc.document_element().unwrap();
    assert_eq!(doc.text_content(a), "abc");
}

#[test]
fn elements_named_includes_self() {
    let doc = parse("<div><div><span/></div></div>");
    let outer = doc.document_element().unwrap();
    assert_eq!(doc.elements_named(outer, "div").len(), 2);
    assert_eq!(doc.elements_named(outer, "div")[0], outer);
    assert_eq!(doc.elements_named(outer, "span").len(), 1);
}
