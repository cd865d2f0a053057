//! In-memory document: an arena of namespace-aware nodes.
//!
//! `Document` is what host pages are parsed into on the server and what the
//! test suite drives the widget against. It follows DOM tree semantics closely
//! enough for the widget: every node has at most one parent, inserting an
//! attached node moves it, and the document node is the root of the tree.
//!
//! Inline styles are not stored separately; [`Dom::set_style`] rewrites the
//! element's `style` attribute so serialization sees a single source.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::consts::XHTML_NS;
use crate::dom::{Dom, DomError, ElementName};

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// An element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute namespace URI; `None` for ordinary attributes.
    pub namespace: Option<String>,
    /// Local attribute name.
    pub name: String,
    /// Unescaped attribute value.
    pub value: String,
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document node. Exactly one per document, always [`Document::root`].
    Document,
    /// An element with its attributes in source order.
    Element { name: ElementName, attributes: Vec<Attribute> },
    /// Character data, unescaped.
    Text(String),
    /// Comment body, verbatim.
    Comment(String),
    /// Processing instruction body (target and data), verbatim.
    ProcessingInstruction(String),
    /// Doctype body, verbatim.
    Doctype(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    declaration: Option<String>,
}

impl Document {
    /// Create a document containing only the document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData { kind: NodeKind::Document, parent: None, children: Vec::new() }],
            declaration: None,
        }
    }

    /// The document node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The XML declaration body (e.g. `xml version="1.0"`), if any.
    #[must_use]
    pub fn declaration(&self) -> Option<&str> {
        self.declaration.as_deref()
    }

    /// Set or clear the XML declaration body.
    pub fn set_declaration(&mut self, declaration: Option<String>) {
        self.declaration = declaration;
    }

    /// Kind of the node, or `None` for a foreign handle.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|n| &n.kind)
    }

    /// Add a detached node of any kind.
    ///
    /// A second [`NodeKind::Document`] is stored as an empty comment so the
    /// document node stays unique.
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let kind = match kind {
            NodeKind::Document => NodeKind::Comment(String::new()),
            other => other,
        };
        self.nodes.push(NodeData { kind, parent: None, children: Vec::new() });
        NodeId(self.nodes.len() - 1)
    }

    /// Create a detached element in an arbitrary namespace.
    pub fn create_element_ns(&mut self, namespace: Option<&str>, local: &str) -> NodeId {
        self.create_node(NodeKind::Element {
            name: ElementName { namespace: namespace.map(str::to_owned), local: local.to_owned() },
            attributes: Vec::new(),
        })
    }

    /// Set an attribute in the given namespace, replacing an existing one with
    /// the same namespace and name.
    pub fn set_attribute_ns(
        &mut self,
        id: NodeId,
        namespace: Option<&str>,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        let data = self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode)?;
        let NodeKind::Element { attributes, .. } = &mut data.kind else {
            return Err(DomError::NotAnElement);
        };
        if let Some(existing) =
            attributes.iter_mut().find(|a| a.name == name && a.namespace.as_deref() == namespace)
        {
            existing.value = value.to_owned();
        } else {
            attributes.push(Attribute {
                namespace: namespace.map(str::to_owned),
                name: name.to_owned(),
                value: value.to_owned(),
            });
        }
        Ok(())
    }

    /// Attributes of an element in source order; empty for other nodes.
    #[must_use]
    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        match self.kind(id) {
            Some(NodeKind::Element { attributes, .. }) => attributes,
            _ => &[],
        }
    }

    /// `id` and all of its descendants in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if current.0 >= self.nodes.len() {
                continue;
            }
            out.push(current);
            stack.extend(self.children_of(current).iter().rev().copied());
        }
        out
    }

    /// Children of `id` as a slice; empty for foreign handles.
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map_or(&[], |n| n.children.as_slice())
    }

    fn node(&self, id: NodeId) -> Result<&NodeData, DomError> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode)
    }

    fn is_container(&self, id: NodeId) -> Result<bool, DomError> {
        Ok(matches!(self.node(id)?.kind, NodeKind::Document | NodeKind::Element { .. }))
    }

    /// Returns `true` if `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id.0).and_then(|n| n.parent);
        }
        false
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.is_container(parent)? {
            return Err(DomError::NotAContainer);
        }
        self.node(child)?;
        if child == self.root() || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::Hierarchy);
        }
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get(id.0).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.nodes.get_mut(id.0) {
            n.parent = None;
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for Document {
    type Node = NodeId;

    fn document_node(&self) -> NodeId {
        self.root()
    }

    fn create_element(&mut self, local: &str) -> Result<NodeId, DomError> {
        Ok(self.create_element_ns(Some(XHTML_NS), local))
    }

    fn create_text(&mut self, data: &str) -> Result<NodeId, DomError> {
        Ok(self.create_node(NodeKind::Text(data.to_owned())))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        self.check_insert(*parent, *child)?;
        self.detach(*child);
        if let Some(n) = self.nodes.get_mut(child.0) {
            n.parent = Some(*parent);
        }
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(*child);
        }
        Ok(())
    }

    fn replace_child(&mut self, parent: &NodeId, new_child: &NodeId, old_child: &NodeId) -> Result<(), DomError> {
        if !self.node(*parent)?.children.contains(old_child) {
            return Err(DomError::NotAChild);
        }
        if new_child == old_child {
            return Ok(());
        }
        self.check_insert(*parent, *new_child)?;
        self.detach(*new_child);

        let Some(p) = self.nodes.get_mut(parent.0) else {
            return Err(DomError::UnknownNode);
        };
        let Some(index) = p.children.iter().position(|c| c == old_child) else {
            return Err(DomError::NotAChild);
        };
        p.children[index] = *new_child;

        if let Some(n) = self.nodes.get_mut(new_child.0) {
            n.parent = Some(*parent);
        }
        if let Some(n) = self.nodes.get_mut(old_child.0) {
            n.parent = None;
        }
        Ok(())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.set_attribute_ns(*node, None, name, value)
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> Result<(), DomError> {
        let mut declarations = parse_style(&self.attribute(node, "style").unwrap_or_default());
        if let Some(existing) = declarations.iter_mut().find(|(k, _)| k == property) {
            existing.1 = value.to_owned();
        } else {
            declarations.push((property.to_owned(), value.to_owned()));
        }
        let rendered = declarations
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attribute_ns(*node, None, "style", &rendered)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.attributes(*node)
            .iter()
            .find(|a| a.namespace.is_none() && a.name == name)
            .map(|a| a.value.clone())
    }

    fn element_name(&self, node: &NodeId) -> Option<ElementName> {
        match self.kind(*node) {
            Some(NodeKind::Element { name, .. }) => Some(name.clone()),
            _ => None,
        }
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.children_of(*node).to_vec()
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|n| self.attribute(n, "id").as_deref() == Some(id))
    }
}

/// Split an inline style into `(property, value)` pairs, skipping malformed
/// declarations.
pub(crate) fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (k, v) = decl.split_once(':')?;
            let k = k.trim();
            if k.is_empty() {
                return None;
            }
            Some((k.to_owned(), v.trim().to_owned()))
        })
        .collect()
}
