use dioxus::prelude::*;

use crate::components::nav::go_to_section;
use crate::core::config::asset_path;
use crate::site::use_site;

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let tr = site.translator();
    // CMS may replace the background; otherwise the bundled photo.
    let background = tr
        .document()
        .and_then(|doc| doc.hero_background())
        .map(str::to_string)
        .unwrap_or_else(|| asset_path("herobg.jpg"));

    rsx! {
        section {
            id: "home",
            class: "hero",
            style: "background-image: url('{background}')",
            div { class: "hero__overlay" }
            div { class: "hero__content",
                h1 { class: "hero__headline", {tr.t("hero.headline")} }
                p { class: "hero__subheadline", {tr.t("hero.subheadline")} }
                div { class: "hero__actions",
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: move |_| go_to_section(true, "products"),
                        {tr.t("hero.cta1")}
                    }
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| go_to_section(true, "contact"),
                        {tr.t("hero.cta2")}
                    }
                }
            }
        }
    }
}
