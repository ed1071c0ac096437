use dioxus::prelude::*;

use crate::components::nav::home_link;
use crate::core::platform;
use crate::site::use_site;

/// Legal notice (§ 5 TMG). Company data is not translated.
#[component]
pub fn Impressum() -> Element {
    let tr = use_site().translator();

    use_effect(|| platform::scroll_to_top());

    rsx! {
        main { class: "page page-impressum",
            article { class: "impressum",
                h1 { {tr.t("impressum.title")} }

                section { class: "impressum__block",
                    h2 { {tr.t("impressum.companyInfo")} }
                    p {
                        "Gripability GmbH"
                        br {}
                        "Am Wiesengrund 3"
                        br {}
                        "36399 Freiensteinau"
                    }
                }

                section { class: "impressum__block",
                    h3 { {tr.t("impressum.representedBy")} }
                    p { "Herr Patrick Oeffner" }
                }

                section { class: "impressum__block",
                    h3 { {tr.t("impressum.contact")} }
                    dl { class: "impressum__contact",
                        dt { {tr.t("impressum.phone")} }
                        dd { "+49 (0) 6669 900 880" }
                        dt { {tr.t("impressum.fax")} }
                        dd { "+49 (0) 6669 900 881" }
                        dt { {tr.t("impressum.email")} }
                        dd { a { href: "mailto:mail@gripability.de", "mail@gripability.de" } }
                    }
                }

                section { class: "impressum__block",
                    h3 { {tr.t("impressum.register")} }
                    p { {tr.t("impressum.registerEntry")} }
                    dl { class: "impressum__contact",
                        dt { {tr.t("impressum.court")} }
                        dd { "Gießen" }
                        dt { {tr.t("impressum.registerNumber")} }
                        dd { "HRB 6436" }
                    }
                }

                section { class: "impressum__block",
                    h3 { {tr.t("impressum.webdesign")} }
                    p { "jegumedia, Bremen" }
                }

                section { class: "impressum__block impressum__disclaimer",
                    h2 { {tr.t("impressum.disclaimer")} }
                    h3 { {tr.t("impressum.contentLiability")} }
                    p { {tr.t("impressum.contentText")} }
                    h3 { {tr.t("impressum.linkLiability")} }
                    p { {tr.t("impressum.linkText")} }
                    h3 { {tr.t("impressum.copyright")} }
                    p { {tr.t("impressum.copyrightText")} }
                    h3 { {tr.t("impressum.dataProtection")} }
                    p { {tr.t("impressum.dataProtectionText")} }
                }

                {home_link("button button--primary impressum__back", &tr.t("impressum.backToHome"))}
            }
        }
    }
}
