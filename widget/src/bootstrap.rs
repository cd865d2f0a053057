//! Page bootstrap: discover parameters once, then mount each widget.
//!
//! Failure policy is "do nothing further": a missing block mounts nothing,
//! a missing target is skipped. DOM errors while building or mounting a widget
//! are reported to the page's debug sink and the remaining requests still run.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::debug_log::debug_log;
use crate::dom::Dom;
use crate::params::load_params;
use crate::widget::Widget;

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootReport {
    /// Target ids that were replaced by a widget, in mount order.
    pub mounted: Vec<String>,
    /// Target ids that were requested but not found (or had no parent).
    pub missing: Vec<String>,
    /// Target ids whose widget could not be built or mounted.
    pub failed: Vec<String>,
}

impl BootReport {
    /// Returns `true` if bootstrap changed the document.
    #[must_use]
    pub fn mutated(&self) -> bool {
        !self.mounted.is_empty()
    }
}

/// Whether a `document.readyState` value means the `load` event has already
/// fired, so bootstrap must run now rather than wait for it.
#[must_use]
pub fn page_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Mount one widget per configured mount request.
pub fn bootstrap<D: Dom>(dom: &mut D) -> BootReport {
    let params = load_params(dom);
    let mut report = BootReport::default();

    for request in params.mounts {
        let outcome = Widget::create(dom, &request.endpoint_url).and_then(|w| w.mount(dom, &request.target_id));
        match outcome {
            Ok(true) => {
                log::info!("mounted web shell at #{} ({})", request.target_id, request.endpoint_url);
                report.mounted.push(request.target_id);
            }
            Ok(false) => {
                log::debug!("mount target #{} not found", request.target_id);
                report.missing.push(request.target_id);
            }
            Err(e) => {
                debug_log(dom, &format!("failed to mount #{}: {e}", request.target_id));
                report.failed.push(request.target_id);
            }
        }
    }

    report
}
