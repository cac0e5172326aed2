//! Small DOM helpers shared across components. All of them degrade to no-ops
//! when the document or the target element is missing.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlElement, ScrollBehavior, ScrollToOptions};

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Anti-forgery token for subscription posts: `csrf-token` meta tag first,
/// `csrftoken` cookie as a fallback.
pub fn csrf_token() -> Option<String> {
    let document = document()?;
    if let Ok(Some(meta)) = document.query_selector("meta[name='csrf-token']") {
        if let Some(content) = meta.get_attribute("content") {
            return Some(content);
        }
    }
    let cookie = document.dyn_ref::<HtmlDocument>()?.cookie().ok()?;
    cookie.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "csrftoken").then(|| value.to_string())
    })
}

/// Locks or releases page scrolling while an overlay is open.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn focus_selector(selector: &str) {
    if let Some(document) = document() {
        if let Ok(Some(element)) = document.query_selector(selector) {
            if let Some(element) = element.dyn_ref::<HtmlElement>() {
                let _ = element.focus();
            }
        }
    }
}

/// Smooth-scrolls to an in-page anchor (`"#contact"`), keeping the target
/// below the fixed navigation bar.
pub fn scroll_to_anchor(fragment: &str) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };
    let target = match document.query_selector(fragment) {
        Ok(Some(t)) => t,
        _ => return,
    };

    let header_height = document
        .query_selector(".top-nav")
        .ok()
        .flatten()
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);

    let top = target.get_bounding_client_rect().top()
        + window.page_y_offset().unwrap_or(0.0)
        - header_height
        - 20.0;

    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
