use dioxus::prelude::*;

use crate::components::nav::{go_to_section, impressum_link};
use crate::core::config::asset_path;
use crate::site::use_site;

const QUICK_LINKS: [(&str, &str); 5] = [
    ("nav.home", "home"),
    ("nav.products", "products"),
    ("nav.consultation", "consultation"),
    ("nav.contact", "contact"),
    ("nav.downloads", "downloads"),
];

#[component]
pub fn SiteFooter(on_home: bool) -> Element {
    let tr = use_site().translator();
    let logo = asset_path("Logo.jpg");

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__brand",
                    img { class: "site-footer__logo", src: "{logo}", alt: "Gripability" }
                    p { class: "site-footer__description", {tr.t("footer.description")} }
                }
                div { class: "site-footer__links",
                    h3 { {tr.t("footer.quickLinks")} }
                    ul {
                        for (key, target) in QUICK_LINKS {
                            li { key: "{target}",
                                button {
                                    class: "site-footer__link",
                                    r#type: "button",
                                    onclick: move |_| go_to_section(on_home, target),
                                    {tr.t(key)}
                                }
                            }
                        }
                        li { {impressum_link("site-footer__link", &tr.t("footer.impressum"))} }
                    }
                }
            }
            div { class: "site-footer__bottom",
                p { {tr.t("footer.copyright")} }
                p { class: "site-footer__tagline", {tr.t("footer.tagline")} }
            }
        }
    }
}
