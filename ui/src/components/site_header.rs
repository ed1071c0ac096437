use dioxus::prelude::*;

use crate::components::nav::{go_to_section, go_to_top};
use crate::core::config::asset_path;
use crate::site::use_site;

/// Header entries: translation key and home-page section id.
const NAV_ITEMS: [(&str, &str); 4] = [
    ("nav.home", "home"),
    ("nav.products", "products"),
    ("nav.contact", "contact"),
    ("nav.downloads", "downloads"),
];

/// Sticky site header with section navigation, language switch and a
/// collapsible menu for small screens.
#[component]
pub fn SiteHeader(on_home: bool) -> Element {
    let site = use_site();
    let tr = site.translator();
    let mut menu_open = use_signal(|| false);

    // The switch is labelled with the language it switches *to*.
    let other_language = tr.locale().toggled().language_name();
    let logo = asset_path("Logo.jpg");

    rsx! {
        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                button {
                    class: "site-header__brand",
                    r#type: "button",
                    onclick: move |_| {
                        menu_open.set(false);
                        go_to_top(on_home);
                    },
                    img { class: "site-header__logo", src: "{logo}", alt: "Gripability" }
                }

                nav { class: "site-header__links",
                    for (key, target) in NAV_ITEMS {
                        button {
                            key: "{target}",
                            class: "site-header__link",
                            r#type: "button",
                            onclick: move |_| go_to_section(on_home, target),
                            {tr.t(key)}
                        }
                    }
                }

                div { class: "site-header__actions",
                    button {
                        class: "site-header__locale",
                        r#type: "button",
                        aria_label: tr.t("nav.language.toggle"),
                        onclick: move |_| site.toggle_locale(),
                        "{other_language}"
                    }
                    button {
                        class: "site-header__menu-toggle",
                        r#type: "button",
                        aria_label: tr.t("nav.menu"),
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open() {
                nav { class: "site-header__mobile",
                    for (key, target) in NAV_ITEMS {
                        button {
                            key: "{target}",
                            class: "site-header__mobile-link",
                            r#type: "button",
                            onclick: move |_| {
                                menu_open.set(false);
                                go_to_section(on_home, target);
                            },
                            {tr.t(key)}
                        }
                    }
                    button {
                        class: "site-header__mobile-link site-header__mobile-locale",
                        r#type: "button",
                        onclick: move |_| {
                            menu_open.set(false);
                            site.toggle_locale();
                        },
                        "{other_language}"
                    }
                }
            }
        }
    }
}
