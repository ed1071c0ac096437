use dioxus::prelude::*;

use crate::catalog::{pdf_for_slug, ProductId};
use crate::core::config::asset_path;
use crate::core::platform;
use crate::site::use_site;

/// Start a PDF download for a product slug. Unmapped slugs are logged by
/// `pdf_for_slug` and nothing happens.
pub fn download_pdf(slug: &str) {
    if let Some(file) = pdf_for_slug(slug) {
        platform::trigger_download(&asset_path(&format!("pdfs/{file}")), file);
    }
}

#[component]
pub fn Downloads() -> Element {
    let tr = use_site().translator();
    let pdf_label = tr.t("downloads.pdf");

    rsx! {
        section { id: "downloads", class: "section downloads",
            div { class: "section__inner",
                h2 { class: "section__headline", {tr.t("downloads.headline")} }
                p { class: "section__lead", {tr.t("downloads.description")} }
                div { class: "downloads__grid",
                    for id in ProductId::ALL {
                        div { key: "{id}", class: "download-card",
                            span { class: "download-card__icon", aria_hidden: "true", "PDF" }
                            h3 { class: "download-card__name", {tr.t(&id.name_key())} }
                            button {
                                class: "button button--outline",
                                r#type: "button",
                                onclick: move |_| download_pdf(id.slug()),
                                "{pdf_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
