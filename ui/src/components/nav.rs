use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::catalog::ProductId;
use crate::core::config::{asset_path, SiteConfig};
use crate::core::{platform, timing};

/// Platforms register a `NavBuilder` providing fully constructed router `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each function receives the CSS class and the already localized label and
/// must return a link that renders exactly that label as its child.
///
/// If no builder is registered, links fall back to plain anchors with
/// root-relative hrefs and `go_home` becomes a no-op.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::nav::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |class, label| rsx!( Link { class, to: Route::Home {}, "{label}" } ),
///     product: |id, class, label| rsx!( Link {
///         class, to: Route::ProductPage { product_id: id.slug().to_string() }, "{label}"
///     } ),
///     impressum: |class, label| rsx!( Link { class, to: Route::Impressum {}, "{label}" } ),
///     go_home: || { navigator().push(Route::Home {}); },
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(class: &str, label: &str) -> Element,
    pub product: fn(id: ProductId, class: &str, label: &str) -> Element,
    pub impressum: fn(class: &str, label: &str) -> Element,
    /// Programmatic navigation to the home route (from event handlers).
    pub go_home: fn(),
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins; later calls (re-renders of the root) are ignored.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

pub fn home_link(class: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.home)(class, label),
        None => rsx!(a { class, href: asset_path(""), "{label}" }),
    }
}

pub fn product_link(id: ProductId, class: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.product)(id, class, label),
        None => rsx!(a { class, href: product_href(id), "{label}" }),
    }
}

pub fn impressum_link(class: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.impressum)(class, label),
        None => rsx!(a { class, href: asset_path("impressum"), "{label}" }),
    }
}

pub fn product_href(id: ProductId) -> String {
    asset_path(&format!("product/{}", id.slug()))
}

fn go_home() {
    if let Some(b) = NAV_BUILDER.get() {
        (b.go_home)();
    }
}

/// How long to wait before scrolling to a section: nothing on the home page,
/// the configured mount delay after navigating there.
pub fn section_scroll_delay(config: &SiteConfig, on_home: bool) -> Option<u64> {
    (!on_home).then_some(config.nav_scroll_delay_ms)
}

/// Scroll to a home-page section. From another page, navigate home first and
/// scroll once the home view had time to mount.
pub fn go_to_section(on_home: bool, id: &str) {
    let Some(delay_ms) = section_scroll_delay(&SiteConfig::current(), on_home) else {
        platform::scroll_to_section(id);
        return;
    };
    go_home();
    let id = id.to_string();
    spawn(async move {
        timing::sleep_ms(delay_ms).await;
        platform::scroll_to_section(&id);
    });
}

/// Logo behaviour: home page, top of page.
pub fn go_to_top(on_home: bool) {
    if !on_home {
        go_home();
    }
    platform::scroll_to_top();
}
