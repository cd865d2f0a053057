//! DOM bootstrap for the "bash -c <...> # Web Shell" widget.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and is also
//! linked natively by the page server for prerendering. It reads the widget's
//! startup parameters from a namespaced block in the host page's `<head>`,
//! builds the widget's table-layout skeleton, and swaps it into a placeholder
//! element.
//!
//! All logic is written against the [`dom::Dom`] trait so it can run on the
//! in-memory [`document::Document`] (tests, server) or the live browser
//! document (`web`, behind the `browser` feature).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | The `Dom` trait and its error type |
//! | [`document`] | In-memory namespace-aware document arena |
//! | [`xml`] | XHTML parse/serialize for [`document::Document`] |
//! | [`layout`] | Table-based horizontal/vertical boxes and inset frames |
//! | [`params`] | Head parameter discovery and typed mount requests |
//! | [`debug_log`] | Optional on-page diagnostic sink |
//! | [`widget`] | Widget construction and mounting |
//! | [`bootstrap`] | Load parameters and mount every configured widget |
//! | [`consts`] | Namespaces, element names, and labels |

pub mod bootstrap;
pub mod consts;
pub mod debug_log;
pub mod document;
pub mod dom;
pub mod layout;
pub mod params;
#[cfg(all(feature = "browser", target_arch = "wasm32"))]
pub mod web;
pub mod widget;
pub mod xml;

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures;
