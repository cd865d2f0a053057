//! Prerender middleware for XHTML host pages.
//!
//! Only `GET` requests for `*.xhtml` files are considered. Anything that
//! cannot be prerendered (missing file, malformed XML, no widget configured)
//! falls through to the static file service untouched.

use std::path::{Component, Path, PathBuf};

use axum::extract::{Request, State};
use axum::http::{Method, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;

use crate::prerender::{PrerenderError, prerender_file};
use crate::state::AppState;

pub const XHTML_CONTENT_TYPE: &str = "application/xhtml+xml; charset=utf-8";

/// Map a request path to an XHTML file under `root`.
///
/// The path is percent-decoded first, the same way the static file service
/// resolves it. Returns `None` for non-XHTML paths, paths that are not valid
/// UTF-8 once decoded, and paths that would leave `root`.
pub fn page_path(root: &Path, uri_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(uri_path).decode_utf8().ok()?;
    let relative = Path::new(decoded.trim_start_matches('/'));
    if relative.extension().is_none_or(|ext| ext != "xhtml") {
        return None;
    }
    if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(root.join(relative))
}

pub async fn prerender_pages(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !state.config.prerender || request.method() != Method::GET {
        return next.run(request).await;
    }
    let Some(path) = page_path(&state.config.htdocs_dir, request.uri().path()) else {
        return next.run(request).await;
    };

    match prerender_file(&path).await {
        Ok(page) if page.report.mutated() => {
            ([(header::CONTENT_TYPE, XHTML_CONTENT_TYPE)], page.body).into_response()
        }
        Ok(_) => next.run(request).await,
        Err(PrerenderError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => next.run(request).await,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "prerender failed; serving page as-is");
            next.run(request).await
        }
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
