use dioxus::prelude::*;

use crate::catalog::ProductId;
use crate::components::nav::product_link;
use crate::site::use_site;

#[component]
pub fn Products() -> Element {
    let tr = use_site().translator();
    let view_label = tr.t("products.viewProduct");

    rsx! {
        section { id: "products", class: "section products",
            div { class: "section__inner",
                h2 { class: "section__headline", {tr.t("products.headline")} }
                div { class: "products__grid",
                    for id in ProductId::ALL {
                        article { key: "{id}", class: "product-card product-card--{id}",
                            img {
                                class: "product-card__image",
                                src: id.card_image(),
                                alt: tr.t(&id.name_key()),
                            }
                            div { class: "product-card__body",
                                h3 { class: "product-card__name", {tr.t(&id.name_key())} }
                                p { class: "product-card__desc", {tr.t(&id.desc_key())} }
                                {product_link(id, "button button--primary product-card__link", &view_label)}
                            }
                        }
                    }
                }
            }
        }
    }
}
