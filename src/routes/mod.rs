//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server's only job is to host the web shell's pages: everything under
//! `HTDOCS_DIR` is served as static files, and XHTML host pages pass through
//! the prerender middleware first so they arrive with the widget mounted.

pub mod pages;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Page served for `/`.
pub const INDEX_PAGE: &str = "/index.xhtml";

pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.htdocs_dir);

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PAGE) }))
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(state.clone(), pages::prerender_pages))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "prerender": state.config.prerender }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
