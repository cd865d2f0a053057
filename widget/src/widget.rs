//! The web shell widget: its static skeleton and how it is mounted.
//!
//! DESIGN
//! ======
//! `Widget` is a plain value: the endpoint it was created for plus the root
//! node it built. Construction is eager, so a widget that exists always has a
//! complete tree ready to be swapped into the page.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ bash -c <...> # Web Shell                    │  title
//! │ [Clear history] [Change CGI]         [About] │  menu bar
//! │ ┌──────────────────────────────────────────┐ │
//! │ │ history (multi-select)                   │ │  inset, fills
//! │ └──────────────────────────────────────────┘ │
//! │ Directory: [____________________________]    │  footer
//! │ $ bash -c  [____________________________]    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The menu buttons and both fields are inert: no listeners are attached and
//! the buttons are `type="button"`, so activating them changes nothing.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::consts::{
    BUTTON_ABOUT, BUTTON_CHANGE_CGI, BUTTON_CLEAR_HISTORY, HISTORY_ROWS, LABEL_COMMAND, LABEL_DIRECTORY, TITLE,
};
use crate::dom::{Dom, DomError};
use crate::layout::{h_box, inset, v_box};

/// Class on the widget root, used by page stylesheets.
pub const ROOT_CLASS: &str = "bash_c_ui";

/// A built, not necessarily mounted, web shell widget.
#[derive(Debug, Clone)]
pub struct Widget<N> {
    endpoint_url: String,
    root: N,
}

impl<N: Clone> Widget<N> {
    /// Build a widget bound to `endpoint_url`.
    pub fn create<D: Dom<Node = N>>(dom: &mut D, endpoint_url: &str) -> Result<Self, DomError> {
        let root = build_root(dom)?;
        dom.set_attribute(&root, "class", ROOT_CLASS)?;
        dom.set_attribute(&root, "data-endpoint", endpoint_url)?;
        Ok(Self { endpoint_url: endpoint_url.to_owned(), root })
    }

    /// The CGI endpoint this widget was created for.
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Root node of the widget's tree.
    #[must_use]
    pub fn root(&self) -> &N {
        &self.root
    }

    /// Replace the element with id `target_id` by this widget's root.
    ///
    /// Returns `false`, leaving the document untouched, when there is no such
    /// element or it has no parent.
    pub fn mount<D: Dom<Node = N>>(&self, dom: &mut D, target_id: &str) -> Result<bool, DomError> {
        let Some(target) = dom.element_by_id(target_id) else {
            return Ok(false);
        };
        let Some(parent) = dom.parent(&target) else {
            return Ok(false);
        };
        dom.replace_child(&parent, &self.root, &target)?;
        Ok(true)
    }
}

fn text_element<D: Dom>(dom: &mut D, tag: &str, text: &str) -> Result<D::Node, DomError> {
    let element = dom.create_element(tag)?;
    let content = dom.create_text(text)?;
    dom.append_child(&element, &content)?;
    Ok(element)
}

fn menu_button<D: Dom>(dom: &mut D, label: &str) -> Result<D::Node, DomError> {
    let button = text_element(dom, "button", label)?;
    dom.set_attribute(&button, "type", "button")?;
    Ok(button)
}

fn input_field<D: Dom>(dom: &mut D, name: &str) -> Result<D::Node, DomError> {
    let input = dom.create_element("input")?;
    dom.set_attribute(&input, "type", "text")?;
    dom.set_attribute(&input, "name", name)?;
    dom.set_style(&input, "width", "100%")?;
    dom.set_style(&input, "border", "none")?;
    inset(dom, &input)
}

fn labeled_row<D: Dom>(dom: &mut D, label: &str, field: &D::Node) -> Result<D::Node, DomError> {
    let label = text_element(dom, "span", label)?;
    dom.set_style(&label, "white-space", "nowrap")?;
    h_box(dom, &[label], field, &[])
}

fn build_root<D: Dom>(dom: &mut D) -> Result<D::Node, DomError> {
    let title = text_element(dom, "div", TITLE)?;
    dom.set_style(&title, "font-weight", "bold")?;

    let clear = menu_button(dom, BUTTON_CLEAR_HISTORY)?;
    let change_cgi = menu_button(dom, BUTTON_CHANGE_CGI)?;
    let about = menu_button(dom, BUTTON_ABOUT)?;
    let spacer = dom.create_element("div")?;
    let menu_bar = h_box(dom, &[clear, change_cgi], &spacer, &[about])?;

    let history = dom.create_element("select")?;
    dom.set_attribute(&history, "multiple", "multiple")?;
    dom.set_attribute(&history, "size", HISTORY_ROWS)?;
    dom.set_attribute(&history, "name", "history")?;
    dom.set_style(&history, "width", "100%")?;
    dom.set_style(&history, "height", "100%")?;
    let history_frame = inset(dom, &history)?;

    let directory = input_field(dom, "directory")?;
    let directory_row = labeled_row(dom, LABEL_DIRECTORY, &directory)?;
    let command = input_field(dom, "command")?;
    let command_row = labeled_row(dom, LABEL_COMMAND, &command)?;
    let footer = v_box(dom, &[directory_row], &command_row, &[])?;

    v_box(dom, &[title, menu_bar], &history_frame, &[footer])
}
