//! The document operations the widget relies on.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout, parameter discovery, and mounting only ever touch the host page
//! through [`Dom`]. The in-memory [`crate::document::Document`] implements it
//! for tests and server-side prerendering; `web::WebDom` implements it over
//! `web_sys` in the browser.

/// Namespace URI and local name of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementName {
    /// Namespace URI, or `None` for elements in no namespace.
    pub namespace: Option<String>,
    /// Local part of the element name, without prefix.
    pub local: String,
}

impl ElementName {
    /// Returns `true` if this name has the given local part and namespace URI.
    #[must_use]
    pub fn is(&self, local: &str, namespace: &str) -> bool {
        self.local == local && self.namespace.as_deref() == Some(namespace)
    }
}

/// Error returned by fallible [`Dom`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node handle does not refer to a node in this document.
    #[error("unknown node")]
    UnknownNode,
    /// Children can only be inserted into documents and elements.
    #[error("node cannot have children")]
    NotAContainer,
    /// The insertion would make a node its own ancestor or move the document node.
    #[error("insertion violates the node hierarchy")]
    Hierarchy,
    /// `replace_child` was given a node that is not a child of `parent`.
    #[error("node is not a child of the given parent")]
    NotAChild,
    /// Attributes and styles can only be set on elements.
    #[error("node is not an element")]
    NotAnElement,
    /// The backing browser API threw.
    #[error("host document error: {0}")]
    Host(String),
}

/// Minimal namespace-aware document interface.
pub trait Dom {
    /// Handle to a node in this document.
    type Node: Clone;

    /// The document node itself (parent of the root element).
    fn document_node(&self) -> Self::Node;

    /// Create a detached element in the XHTML namespace.
    fn create_element(&mut self, local: &str) -> Result<Self::Node, DomError>;

    /// Create a detached text node.
    fn create_text(&mut self, data: &str) -> Result<Self::Node, DomError>;

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Put `new_child` where `old_child` is under `parent`; `old_child` ends up detached.
    fn replace_child(
        &mut self,
        parent: &Self::Node,
        new_child: &Self::Node,
        old_child: &Self::Node,
    ) -> Result<(), DomError>;

    /// Set a no-namespace attribute on an element.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    /// Set one inline style property on an element.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str) -> Result<(), DomError>;

    /// Value of a no-namespace attribute, if the node is an element that has it.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Element name of `node`, or `None` for non-element nodes.
    fn element_name(&self, node: &Self::Node) -> Option<ElementName>;

    /// Children of `node` in document order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Parent of `node`, if attached.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// First element in document order whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}
