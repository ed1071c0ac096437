use dioxus::prelude::*;

use crate::sections::{About, Contact, Downloads, Hero, Products};
use crate::site::use_site;

#[component]
pub fn Home() -> Element {
    // Subscribe to the locale so the hidden marker (and every section) refreshes.
    let locale = use_site().locale();

    rsx! {
        main { class: "page page-home",
            div { style: "display:none", "{locale}" }
            Hero {}
            About {}
            Products {}
            Contact {}
            Downloads {}
        }
    }
}
