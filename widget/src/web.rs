//! Browser entry point and the `web_sys` implementation of [`Dom`].
//!
//! Only compiled for `wasm32` with the `browser` feature. The start hook waits
//! for the window `load` event (or runs right away if the page has already
//! loaded), then runs [`bootstrap`] against the live document.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Node};

use crate::bootstrap::{bootstrap, page_loaded};
use crate::consts::XHTML_NS;
use crate::dom::{Dom, DomError, ElementName};

fn host_error(err: JsValue) -> DomError {
    DomError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// [`Dom`] over the browser's live document.
pub struct WebDom {
    document: Document,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The window's current document, if running in a page.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }
}

impl Dom for WebDom {
    type Node = Node;

    fn document_node(&self) -> Node {
        self.document.clone().into()
    }

    fn create_element(&mut self, local: &str) -> Result<Node, DomError> {
        let element = self
            .document
            .create_element_ns(Some(XHTML_NS), local)
            .map_err(host_error)?;
        Ok(element.into())
    }

    fn create_text(&mut self, data: &str) -> Result<Node, DomError> {
        Ok(self.document.create_text_node(data).into())
    }

    fn append_child(&mut self, parent: &Node, child: &Node) -> Result<(), DomError> {
        parent.append_child(child).map(|_| ()).map_err(host_error)
    }

    fn replace_child(&mut self, parent: &Node, new_child: &Node, old_child: &Node) -> Result<(), DomError> {
        parent.replace_child(new_child, old_child).map(|_| ()).map_err(host_error)
    }

    fn set_attribute(&mut self, node: &Node, name: &str, value: &str) -> Result<(), DomError> {
        let element = node.dyn_ref::<Element>().ok_or(DomError::NotAnElement)?;
        element.set_attribute(name, value).map_err(host_error)
    }

    fn set_style(&mut self, node: &Node, property: &str, value: &str) -> Result<(), DomError> {
        let element = node.dyn_ref::<HtmlElement>().ok_or(DomError::NotAnElement)?;
        element.style().set_property(property, value).map_err(host_error)
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        node.dyn_ref::<Element>()?.get_attribute_ns(None, name)
    }

    fn element_name(&self, node: &Node) -> Option<ElementName> {
        let element = node.dyn_ref::<Element>()?;
        Some(ElementName { namespace: element.namespace_uri(), local: element.local_name() })
    }

    fn children(&self, node: &Node) -> Vec<Node> {
        let mut out = Vec::new();
        let mut current = node.first_child();
        while let Some(child) = current {
            current = child.next_sibling();
            out.push(child);
        }
        out
    }

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.document.get_element_by_id(id).map(Into::into)
    }
}

fn on_load() {
    let Some(mut dom) = WebDom::current() else {
        log::warn!("no document available; web shell not bootstrapped");
        return;
    };
    let report = bootstrap(&mut dom);
    log::info!(
        "web shell bootstrap: {} mounted, {} missing, {} failed",
        report.mounted.len(),
        report.missing.len(),
        report.failed.len()
    );
}

/// WASM start hook: run bootstrap once the page has loaded.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    // The module may finish loading after the page did; `load` has then already fired.
    let loaded = window
        .document()
        .is_some_and(|d| page_loaded(&d.ready_state()));
    if loaded {
        on_load();
        return;
    }
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| on_load());
    if let Err(e) = window.add_event_listener_with_callback("load", listener.as_ref().unchecked_ref()) {
        log::error!("failed to register load listener: {}", host_error(e));
        return;
    }
    // The listener must outlive this call; it lives for the page lifetime.
    listener.forget();
}
