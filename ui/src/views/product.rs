use dioxus::prelude::*;

use crate::catalog::{describe, DetailSection, Layout, ProductDescriptor, TechnicalSpecs};
use crate::components::nav::{go_to_section, home_link};
use crate::core::platform;
use crate::resolver::Translator;
use crate::site::use_site;

/// Gallery carousel position. Shows [`Carousel::PER_VIEW`] images at a time
/// and moves one image per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub const PER_VIEW: usize = 3;

    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Galleries that fit in one view render as a plain grid.
    pub fn is_scrollable(self) -> bool {
        self.len > Self::PER_VIEW
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn can_prev(self) -> bool {
        self.index > 0
    }

    pub fn can_next(self) -> bool {
        self.index + Self::PER_VIEW < self.len
    }

    pub fn prev(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        if self.can_next() {
            Self {
                index: self.index + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// One dot per reachable start position.
    pub fn dot_count(self) -> usize {
        self.len.saturating_sub(Self::PER_VIEW - 1)
    }

    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.dot_count().saturating_sub(1)),
            ..self
        }
    }

    /// CSS `translateX` offset of the track, in percent.
    pub fn offset_percent(self) -> f64 {
        self.index as f64 * (100.0 / Self::PER_VIEW as f64)
    }
}

#[component]
pub fn ProductPage(product_id: String) -> Element {
    let tr = use_site().translator();

    // Also runs when the route switches straight to another product.
    use_effect(use_reactive!(|product_id| {
        tracing::debug!(product = %product_id, "showing product page");
        platform::scroll_to_top();
    }));

    match describe(&product_id, &tr) {
        Some(product) => rsx! { ProductDetail { product, tr } },
        None => rsx! {
            main { class: "page page-product page-product--missing",
                div { class: "not-found",
                    h1 { {tr.t("product.notFound")} }
                    {home_link("button button--primary", &tr.t("product.returnHome"))}
                }
            }
        },
    }
}

#[component]
fn ProductDetail(product: ProductDescriptor, tr: Translator) -> Element {
    let id = product.id;

    rsx! {
        main { class: "page page-product page-product--{id}",
            section { class: "product-hero",
                div { class: "section__inner",
                    button {
                        class: "product-hero__back",
                        r#type: "button",
                        onclick: move |_| go_to_section(false, "products"),
                        "← "
                        {tr.t("backToProducts")}
                    }
                    div { class: "product-hero__grid",
                        div { class: "product-hero__text",
                            if product.requires_consultation {
                                span { class: "badge badge--consultation", {tr.t("product.consultation")} }
                            }
                            h1 { class: "product-hero__name", "{product.name}" }
                            p { class: "product-hero__desc", "{product.description}" }
                            p { class: "product-hero__long", "{product.long_description}" }
                            div { class: "product-hero__actions",
                                button {
                                    class: "button button--primary",
                                    r#type: "button",
                                    onclick: move |_| go_to_section(false, "contact"),
                                    {tr.t("getInContactWithUs")}
                                }
                                a {
                                    class: "button button--outline",
                                    href: "{product.pdf_path}",
                                    download: id.pdf_file(),
                                    {tr.t("product.download")}
                                }
                            }
                        }
                        if let Some(first) = product.images.first() {
                            img { class: "product-hero__image", src: "{first}", alt: "{product.name}" }
                        }
                    }
                }
            }

            section { class: "section product-gallery",
                div { class: "section__inner",
                    h2 { class: "section__headline", {tr.t("productGallery")} }
                    // Keyed by product so the carousel position resets on navigation.
                    Gallery { key: "{id}", images: product.images.clone(), alt: product.name.clone(), tr: tr.clone() }
                }
            }

            section { class: "section product-features",
                div { class: "section__inner",
                    h2 { class: "section__headline", {tr.t("keyFeatures")} }
                    ul { class: "feature-list",
                        for (i, feature) in product.features.iter().enumerate() {
                            li { key: "{i}", class: "feature-list__item",
                                span { class: "feature-list__check", aria_hidden: "true", "✓" }
                                h3 { "{feature}" }
                            }
                        }
                    }
                }
            }

            for section in [&product.how_it_works, &product.indications, &product.applications, &product.extras]
                .into_iter()
                .flatten()
            {
                DetailBlock { key: "{section.title}", section: section.clone() }
            }

            if let Some(specs) = &product.technical_specs {
                SpecsBlock { specs: specs.clone(), tr: tr.clone() }
            }

            section { class: "section product-cta",
                div { class: "section__inner product-cta__box",
                    h2 { {tr.t("readyToOrder")} }
                    if product.requires_consultation {
                        p { {tr.t("consultationRequired")} }
                    } else {
                        p { {tr.t("availableImmediate")} }
                    }
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: move |_| go_to_section(false, "contact"),
                        if product.requires_consultation {
                            {tr.t("bookConsultation")}
                        } else {
                            {tr.t("getQuote")}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Gallery(images: Vec<String>, alt: String, tr: Translator) -> Element {
    let mut carousel = use_signal(|| Carousel::new(images.len()));
    let state = carousel();

    if !state.is_scrollable() {
        return rsx! {
            div { class: "gallery gallery--grid",
                for (i, src) in images.iter().enumerate() {
                    img { key: "{i}", class: "gallery__image", src: "{src}", alt: "{alt}" }
                }
            }
        };
    }

    let offset = state.offset_percent();
    rsx! {
        div { class: "gallery gallery--carousel",
            div { class: "gallery__viewport",
                div {
                    class: "gallery__track",
                    style: "transform: translateX(-{offset}%)",
                    for (i, src) in images.iter().enumerate() {
                        div { key: "{i}", class: "gallery__slide",
                            img { class: "gallery__image", src: "{src}", alt: "{alt}" }
                        }
                    }
                }
            }
            if state.can_prev() {
                button {
                    class: "gallery__arrow gallery__arrow--prev",
                    r#type: "button",
                    aria_label: tr.t("gallery.previous"),
                    onclick: move |_| carousel.set(state.prev()),
                    "‹"
                }
            }
            if state.can_next() {
                button {
                    class: "gallery__arrow gallery__arrow--next",
                    r#type: "button",
                    aria_label: tr.t("gallery.next"),
                    onclick: move |_| carousel.set(state.next()),
                    "›"
                }
            }
            div { class: "gallery__dots",
                for dot in 0..state.dot_count() {
                    button {
                        key: "{dot}",
                        class: dot_class(dot == state.index()),
                        r#type: "button",
                        aria_label: format!("{} {}", tr.t("gallery.goTo"), dot + 1),
                        onclick: move |_| carousel.set(state.go_to(dot)),
                    }
                }
            }
        }
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "gallery__dot gallery__dot--active"
    } else {
        "gallery__dot"
    }
}

#[component]
fn DetailBlock(section: DetailSection) -> Element {
    let layout_class = match section.layout {
        Layout::Cards => "detail--cards",
        Layout::Steps => "detail--steps",
        Layout::Highlights => "detail--highlights",
        Layout::Bullets => "detail--bullets",
    };

    rsx! {
        section { class: "section detail {layout_class}",
            div { class: "section__inner",
                h2 { class: "section__headline", "{section.title}" }
                if let Some(intro) = &section.intro {
                    p { class: "section__lead", "{intro}" }
                }
                if section.layout == Layout::Bullets {
                    ul { class: "detail__bullets",
                        for (i, entry) in section.entries.iter().enumerate() {
                            li { key: "{i}", "{entry.title}" }
                        }
                    }
                } else {
                    div { class: "detail__entries",
                        for (i, entry) in section.entries.iter().enumerate() {
                            div { key: "{i}", class: "detail__entry",
                                if section.layout == Layout::Steps {
                                    span { class: "detail__step", "{i + 1}" }
                                }
                                h3 { class: "detail__title", "{entry.title}" }
                                if let Some(description) = &entry.description {
                                    p { class: "detail__description", "{description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SpecsBlock(specs: TechnicalSpecs, tr: Translator) -> Element {
    rsx! {
        section { class: "section product-specs",
            div { class: "section__inner",
                h2 { class: "section__headline", "{specs.title}" }
                div { class: "specs__grid",
                    for (i, row) in specs.rows.iter().enumerate() {
                        div { key: "{i}", class: "specs__row",
                            div { class: "specs__label", "{row.label}" }
                            div { class: "specs__value", "{row.value}" }
                        }
                    }
                }
                div { class: "specs__quality",
                    h3 { {tr.t("qualityCertification")} }
                    p { {tr.t("qualityCertificationText")} }
                }
            }
        }
    }
}
