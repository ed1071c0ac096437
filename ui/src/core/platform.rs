//! Side effects that differ between the browser and the desktop webview.
//!
//! Scrolling and downloads go through `document::eval`, which both renderers
//! support; only the page origin needs a real cfg split.

use dioxus::prelude::*;

/// Origin used for the CMS request when there is no `window.location`.
pub const DEFAULT_ORIGIN: &str = "https://gripability.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// `https://host[:port]` of the running page.
#[cfg(target_arch = "wasm32")]
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .filter(|o| !o.is_empty() && o != "null")
        .unwrap_or_else(|| DEFAULT_ORIGIN.to_string())
}

/// Desktop has no page origin; `GRIPABILITY_CONTENT_ORIGIN` overrides the
/// public site.
#[cfg(not(target_arch = "wasm32"))]
pub fn origin() -> String {
    std::env::var("GRIPABILITY_CONTENT_ORIGIN")
        .ok()
        .filter(|o| !o.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ORIGIN.to_string())
}

/// Smooth-scroll the element with `id` into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    run_script(&format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
        js_string(id)
    ));
}

pub fn scroll_to_top() {
    run_script("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

/// Navigate the window to `url` (used for `mailto:` and `tel:` links).
pub fn open_external(url: &str) {
    run_script(&format!("window.location.href = {};", js_string(url)));
}

/// Download `href` under `filename` through a temporary anchor element.
pub fn trigger_download(href: &str, filename: &str) {
    run_script(&format!(
        "const a = document.createElement('a'); a.href = {}; a.download = {}; \
         document.body.appendChild(a); a.click(); document.body.removeChild(a);",
        js_string(href),
        js_string(filename)
    ));
}

fn run_script(js: &str) {
    let _ = document::eval(js);
}

/// Quote `s` as a JavaScript string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
