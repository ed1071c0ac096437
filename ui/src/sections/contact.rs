use dioxus::prelude::*;

use crate::consultation::{ConsultationForm, Field};
use crate::core::config::{asset_path, SiteConfig};
use crate::core::platform;
use crate::core::timing::{self, SystemClock};
use crate::site::use_site;

/// `tel:` URI for a display phone number.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

#[component]
pub fn Contact() -> Element {
    let tr = use_site().translator();
    let email = tr.t("contact.email");
    let phone = tr.t("contact.phone");
    let map = asset_path("MapImage.png");

    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "section__inner",
                h2 { class: "section__headline", {tr.t("contact.headline")} }
                p { class: "section__lead", {tr.t("contact.direct")} }
                div { class: "contact__grid",
                    div { class: "contact__details",
                        h3 { {tr.t("contact.getInTouch")} }
                        dl {
                            dt { {tr.t("contact.emailLabel")} }
                            dd { a { href: "mailto:{email}", "{email}" } }
                            dt { {tr.t("contact.phoneLabel")} }
                            dd { a { href: tel_href(&phone), "{phone}" } }
                        }
                        img { class: "contact__map", src: "{map}", alt: tr.t("contact.mapAlt") }
                    }
                    ConsultationPanel {}
                }
            }
        }
    }
}

#[component]
fn ConsultationPanel() -> Element {
    let tr = use_site().translator();
    let mut form = use_signal(|| {
        ConsultationForm::with_reset_delay(SiteConfig::current().form_reset_ms)
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let config = SiteConfig::current();
        let link = form.write().submit(&config.contact_email, &SystemClock);
        platform::open_external(&link);

        // Revert once the success panel has been shown long enough.
        spawn(async move {
            loop {
                let remaining = form.peek().remaining_ms(&SystemClock);
                match remaining {
                    Some(0) => {
                        form.write().tick(&SystemClock);
                        break;
                    }
                    Some(ms) => timing::sleep_ms(ms).await,
                    None => break,
                }
            }
        });
    };

    let current = form.read();
    let fields = current.fields();

    rsx! {
        div { id: "consultation", class: "consultation",
            h3 { class: "consultation__headline", {tr.t("consultation.headline")} }
            p { class: "consultation__text", {tr.t("consultation.text")} }

            if current.is_submitted() {
                div { class: "consultation__sent", role: "status",
                    span { class: "consultation__sent-icon", aria_hidden: "true", "✓" }
                    h4 { {tr.t("consultation.sentTitle")} }
                    p { {tr.t("consultation.sentText")} }
                }
            } else {
                form { class: "consultation__form", onsubmit: on_submit,
                    h4 { {tr.t("consultation.formTitle")} }
                    input {
                        class: "consultation__input",
                        r#type: "text",
                        name: "name",
                        required: true,
                        placeholder: tr.t("consultation.name"),
                        value: "{fields.name}",
                        oninput: move |e| form.write().set(Field::Name, e.value()),
                    }
                    input {
                        class: "consultation__input",
                        r#type: "email",
                        name: "email",
                        required: true,
                        placeholder: tr.t("consultation.email"),
                        value: "{fields.email}",
                        oninput: move |e| form.write().set(Field::Email, e.value()),
                    }
                    input {
                        class: "consultation__input",
                        r#type: "text",
                        name: "country",
                        required: true,
                        placeholder: tr.t("consultation.country"),
                        value: "{fields.country}",
                        oninput: move |e| form.write().set(Field::Country, e.value()),
                    }
                    textarea {
                        class: "consultation__input consultation__message",
                        name: "message",
                        rows: "4",
                        required: true,
                        placeholder: tr.t("consultation.message"),
                        value: "{fields.message}",
                        oninput: move |e| form.write().set(Field::Message, e.value()),
                    }
                    button { class: "button button--primary", r#type: "submit",
                        {tr.t("consultation.send")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_links_strip_whitespace() {
        assert_eq!(tel_href("+49 (0) 6669 90 08 80"), "tel:+49(0)6669900880");
        assert_eq!(tel_href(""), "tel:");
    }
}
