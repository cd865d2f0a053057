//! Startup parameters declared in the host page's `<head>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A host page configures the widget with a namespaced block placed directly
//! under `<head>`:
//!
//! ```xml
//! <p:bash_c_params xmlns:p="/2011/02/19/bash_c_ui/params">
//!     <p:bash_c_cgi_bin_url value="/cgi-bin/bash_c.cgi"/>
//!     <p:bash_c_ui target_id="shell-slot"/>
//! </p:bash_c_params>
//! ```
//!
//! Entries are read in document order. A URL entry sets the endpoint for every
//! mount entry after it, across blocks; a later URL entry overrides an earlier
//! one. Mount entries without a target id, or seen before any URL, are
//! dropped without error.
//!
//! TRADE-OFFS
//! ==========
//! Discovery only looks at direct children of `<head>`. A block placed in
//! `<body>` or nested inside another head element is ignored.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

use crate::consts::{ATTR_TARGET_ID, ATTR_VALUE, PARAM_CGI_BIN_URL, PARAM_UI, PARAMS_BLOCK, PARAMS_NS, XHTML_NS};
use crate::dom::Dom;

/// One widget to mount: which endpoint it talks to and which element it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRequest {
    /// CGI endpoint URL in effect when the mount entry was read.
    pub endpoint_url: String,
    /// Id of the placeholder element to replace.
    pub target_id: String,
}

/// Everything discovered in the page's configuration blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellParams {
    /// Mount requests in document order.
    pub mounts: Vec<MountRequest>,
    /// Mount entries that were dropped (missing target id or no URL yet).
    pub skipped: usize,
}

impl ShellParams {
    /// Returns `true` if no widget should be mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

fn is_element<D: Dom>(dom: &D, node: &D::Node, local: &str, namespace: &str) -> bool {
    dom.element_name(node).is_some_and(|name| name.is(local, namespace))
}

/// Call `visit` for every element directly under `<html><head>` named
/// `params_name` in `params_ns`, in document order.
pub fn head_params_iterate<D, F>(dom: &D, params_name: &str, params_ns: &str, mut visit: F)
where
    D: Dom,
    F: FnMut(&D::Node),
{
    let document = dom.document_node();
    for html in dom.children(&document) {
        if !is_element(dom, &html, "html", XHTML_NS) {
            continue;
        }
        for head in dom.children(&html) {
            if !is_element(dom, &head, "head", XHTML_NS) {
                continue;
            }
            for entry in dom.children(&head) {
                if is_element(dom, &entry, params_name, params_ns) {
                    visit(&entry);
                }
            }
        }
    }
}

/// Non-empty no-namespace attribute value.
fn non_empty_attribute<D: Dom>(dom: &D, node: &D::Node, name: &str) -> Option<String> {
    dom.attribute(node, name).filter(|v| !v.is_empty())
}

/// Read every `bash_c_params` block and resolve it into mount requests.
pub fn load_params<D: Dom>(dom: &D) -> ShellParams {
    let mut params = ShellParams::default();
    let mut endpoint_url: Option<String> = None;

    head_params_iterate(dom, PARAMS_BLOCK, PARAMS_NS, |block| {
        for entry in dom.children(block) {
            if is_element(dom, &entry, PARAM_CGI_BIN_URL, PARAMS_NS) {
                endpoint_url = non_empty_attribute(dom, &entry, ATTR_VALUE);
            } else if is_element(dom, &entry, PARAM_UI, PARAMS_NS) {
                let target_id = non_empty_attribute(dom, &entry, ATTR_TARGET_ID);
                match (target_id, endpoint_url.clone()) {
                    (Some(target_id), Some(endpoint_url)) => {
                        params.mounts.push(MountRequest { endpoint_url, target_id });
                    }
                    (target_id, url) => {
                        log::trace!(
                            "skipping {PARAM_UI} entry (target_id: {target_id:?}, endpoint set: {})",
                            url.is_some()
                        );
                        params.skipped += 1;
                    }
                }
            }
        }
    });

    params
}
