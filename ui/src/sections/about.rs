use dioxus::prelude::*;

use crate::site::use_site;

#[component]
pub fn About() -> Element {
    let tr = use_site().translator();

    rsx! {
        section { id: "about", class: "section about",
            div { class: "section__inner about__grid",
                div { class: "about__text",
                    h2 { class: "section__headline", {tr.t("about.headline")} }
                    p { {tr.t("about.text1")} }
                    p { {tr.t("about.text2")} }
                }
                div { class: "about__badge",
                    span { class: "about__years", {tr.t("about.years")} }
                    span { class: "about__years-label", {tr.t("about.yearsLabel")} }
                    span { class: "about__trusted", {tr.t("about.trusted")} }
                }
            }
        }
    }
}
