#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Checks that the selectors the shared `ui` components render are still defined
in the unified theme (`ui/assets/theme/main.css`). A plain substring check is
enough to catch a dropped or renamed class.

When a component's markup changes class names, update REQUIRED_SELECTORS too.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".section {",
    ".section__inner",
    ".section__headline",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".button--outline",
    ".badge--consultation",
    // Header & footer
    ".site-header {",
    ".site-header__links",
    ".site-header__locale",
    ".site-header__menu-toggle",
    ".site-header__mobile",
    ".site-footer {",
    ".site-footer__link",
    ".site-footer__bottom",
    // Home sections
    ".hero__overlay",
    ".hero__actions",
    ".about__badge",
    ".products__grid",
    ".product-card",
    ".downloads__grid",
    ".download-card",
    ".contact__grid",
    ".consultation__form",
    ".consultation__sent",
    // Product page
    ".product-hero__grid",
    ".gallery--grid",
    ".gallery--carousel",
    ".gallery__track",
    ".gallery__arrow--prev",
    ".gallery__arrow--next",
    ".gallery__dot--active",
    ".feature-list__item",
    ".detail--cards",
    ".detail--steps",
    ".detail__bullets",
    ".specs__grid",
    ".specs__quality",
    ".not-found",
    // Legal notice
    ".impressum__block",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn carousel_arrows_come_in_pairs() {
    let has_prev = THEME_CSS.contains(".gallery__arrow--prev");
    let has_next = THEME_CSS.contains(".gallery__arrow--next");
    assert!(
        has_prev && has_next,
        "Gallery arrow selectors missing (prev: {has_prev}, next: {has_next})"
    );
}
