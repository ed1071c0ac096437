#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

use dioxus::logger::tracing::Level;
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::catalog::ProductId;
use ui::components::nav::{register_nav, NavBuilder};
use ui::components::{SiteFooter, SiteHeader};
use ui::site::use_site_provider;
use ui::views::{Home, Impressum, ProductPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
    #[route("/product/:product_id")]
    ProductPage { product_id: String },
    #[route("/impressum")]
    Impressum {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme, inlined so packaged builds need no stylesheet on disk.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(Level::INFO).ok();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Gripability – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(Level::INFO).ok();
    LaunchBuilder::server().launch(App);
}

fn nav_home(class: &str, label: &str) -> Element {
    rsx!(Link { class, to: Route::Home {}, "{label}" })
}
fn nav_product(id: ProductId, class: &str, label: &str) -> Element {
    rsx!(Link { class, to: Route::ProductPage { product_id: id.slug().to_string() }, "{label}" })
}
fn nav_impressum(class: &str, label: &str) -> Element {
    rsx!(Link { class, to: Route::Impressum {}, "{label}" })
}
fn nav_go_home() {
    navigator().push(Route::Home {});
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        product: nav_product,
        impressum: nav_impressum,
        go_home: nav_go_home,
    });
    // Content origin comes from GRIPABILITY_CONTENT_ORIGIN on desktop.
    use_site_provider();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // `cargo run` / `dx serve`: product images and PDFs from the web crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/public"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout around the shared header and footer, typed to this
/// crate's `Route` enum.
#[component]
fn DesktopLayout() -> Element {
    let on_home = matches!(use_route::<Route>(), Route::Home {});
    rsx! {
        SiteHeader { on_home }
        Outlet::<Route> {}
        SiteFooter { on_home }
    }
}
