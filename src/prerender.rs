//! Server-side widget mounting.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same bootstrap that runs in the browser runs here against an in-memory
//! copy of the host page. A prerendered page arrives with the widget already in
//! place of its placeholder; when the wasm module later bootstraps in the
//! browser it finds no placeholder and leaves the page alone.

use std::path::Path;

use widget::bootstrap::{BootReport, bootstrap};
use widget::xml::{self, XmlError};

/// Error returned by [`prerender_file`].
#[derive(Debug, thiserror::Error)]
pub enum PrerenderError {
    #[error("failed to read page: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse page: {0}")]
    Parse(#[from] XmlError),
}

/// A host page after bootstrap.
#[derive(Debug)]
pub struct Prerendered {
    /// Serialized page.
    pub body: String,
    /// What bootstrap did to the page.
    pub report: BootReport,
}

/// Parse `source`, mount every configured widget, and serialize the result.
pub fn prerender(source: &str) -> Result<Prerendered, PrerenderError> {
    let mut doc = xml::parse(source)?;
    let report = bootstrap(&mut doc);
    Ok(Prerendered { body: xml::serialize(&doc), report })
}

/// [`prerender`] the page stored at `path`.
pub async fn prerender_file(path: &Path) -> Result<Prerendered, PrerenderError> {
    let source = tokio::fs::read_to_string(path).await?;
    let page = prerender(&source)?;
    tracing::debug!(
        path = %path.display(),
        mounted = ?page.report.mounted,
        missing = ?page.report.missing,
        failed = ?page.report.failed,
        "page prerendered"
    );
    Ok(page)
}

#[cfg(test)]
#[path = "prerender_test.rs"]
mod tests;
