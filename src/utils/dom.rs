//! Thin wrappers over browser globals.
//!
//! Every accessor returns `Option` or silently does nothing when the API is
//! missing, so callers never have to handle a headless environment.

use web_sys::{Document, Element, Storage};

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// `window.localStorage`, if storage is permitted.
pub fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `window.sessionStorage`, if storage is permitted.
pub fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Wall clock in milliseconds since the Unix epoch.
#[inline]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn query_selector(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Set an attribute on the `<html>` element.
pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(name, value);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// =============================================================================
// Location hash
// =============================================================================

/// Current `location.hash` with the leading `#` stripped.
pub fn get_hash() -> String {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    hash.strip_prefix('#').unwrap_or(&hash).to_string()
}

/// Assign `location.hash` (with its `#`). The browser records a history
/// entry and dispatches `hashchange`.
pub fn set_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(hash);
    }
}
