use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::nav::{register_nav, NavBuilder};
use ui::components::{SiteFooter, SiteHeader};
use ui::catalog::ProductId;
use ui::site::use_site_provider;
use ui::views::{Home, Impressum, ProductPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/product/:product_id")]
    ProductPage { product_id: String },
    #[route("/impressum")]
    Impressum {},
}

fn nav_home(class: &str, label: &str) -> Element {
    rsx!(Link {
        class,
        to: Route::Home {},
        "{label}"
    })
}
fn nav_product(id: ProductId, class: &str, label: &str) -> Element {
    rsx!(Link {
        class,
        to: Route::ProductPage {
            product_id: id.slug().to_string(),
        },
        "{label}"
    })
}
fn nav_impressum(class: &str, label: &str) -> Element {
    rsx!(Link {
        class,
        to: Route::Impressum {},
        "{label}"
    })
}
fn nav_go_home() {
    navigator().push(Route::Home {});
}

fn main() {
    dioxus::logger::init(Level::INFO).ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        product: nav_product,
        impressum: nav_impressum,
        go_home: nav_go_home,
    });
    use_site_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Title { "Gripability" }

        Router::<Route> {}
    }
}

/// Web layout: shared header and footer around the routed page.
#[component]
fn WebLayout() -> Element {
    let on_home = matches!(use_route::<Route>(), Route::Home {});
    rsx! {
        SiteHeader { on_home }
        Outlet::<Route> {}
        SiteFooter { on_home }
    }
}
