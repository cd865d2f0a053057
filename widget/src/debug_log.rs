//! On-page diagnostic sink.
//!
//! Pages that want to see bootstrap diagnostics include an element with id
//! `debug_log` (usually a hidden `<pre>`). Each message appends a rule, the
//! prefixed text, and a line break, then unhides the element. Pages without the
//! element get nothing; the message still goes to the `log` facade.

#[cfg(test)]
#[path = "debug_log_test.rs"]
mod debug_log_test;

use crate::consts::{DEBUG_LOG_ID, DEBUG_LOG_PREFIX};
use crate::dom::{Dom, DomError};

/// Append `message` to the page's debug sink.
///
/// Returns `true` if the sink exists and the message was written.
pub fn debug_log<D: Dom>(dom: &mut D, message: &str) -> bool {
    log::debug!("{message}");
    let Some(sink) = dom.element_by_id(DEBUG_LOG_ID) else {
        return false;
    };
    match write_entry(dom, &sink, message) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("debug sink write failed: {e}");
            false
        }
    }
}

fn write_entry<D: Dom>(dom: &mut D, sink: &D::Node, message: &str) -> Result<(), DomError> {
    let rule = dom.create_element("hr")?;
    dom.append_child(sink, &rule)?;
    let text = dom.create_text(&format!("{DEBUG_LOG_PREFIX}{message}"))?;
    dom.append_child(sink, &text)?;
    let line_break = dom.create_element("br")?;
    dom.append_child(sink, &line_break)?;
    dom.set_style(sink, "display", "block")
}
