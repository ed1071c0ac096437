#![cfg(test)]
//! The desktop build inlines `ui/assets/theme/main.css` at compile time. A
//! truncated or moved theme only shows up at runtime, so fail here instead.
//!
//! If the theme moves, update both this test and `MAIN_CSS_INLINE` in
//! `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-primary", "body {", ".button--primary", ".hero {"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
