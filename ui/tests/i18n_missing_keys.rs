use std::collections::{BTreeSet, HashSet};

use fluent_syntax::{ast, parser};

/// Translation completeness test.
/// Ensures the German table provides exactly the keys present in the
/// fallback (en) `gripability-ui.ftl`, and neither file defines a key twice.
///
/// Message ids come from the Fluent parser; terms and comments are skipped.
///
/// If you add a message:
/// 1. Add it to `ui/i18n/en/gripability-ui.ftl`
/// 2. Add the German text under the same id in `ui/i18n/de/gripability-ui.ftl`
/// 3. Run `cargo test -p gripability-ui` to confirm completeness.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN: &str = include_str!("../i18n/en/gripability-ui.ftl");
    const DE: &str = include_str!("../i18n/de/gripability-ui.ftl");

    let fallback_keys = extract_keys(EN);
    assert!(!fallback_keys.is_empty(), "Fallback (en) contains no keys.");
    assert_no_dup_keys(EN, "en");
    assert_no_dup_keys(DE, "de");

    let german = extract_keys(DE);
    let missing: BTreeSet<_> = fallback_keys.difference(&german).collect();
    let extra: BTreeSet<_> = german.difference(&fallback_keys).collect();

    assert!(
        missing.is_empty() && extra.is_empty(),
        "Locale de differs from en.\n  missing: {missing:?}\n  extra: {extra:?}"
    );
}

/// Dotted keys map onto Fluent ids by replacing `.` with `-`, so ids must not
/// need a literal hyphen of their own.
#[test]
fn ids_map_back_to_dotted_keys() {
    const EN: &str = include_str!("../i18n/en/gripability-ui.ftl");
    for key in extract_keys(EN) {
        assert!(
            !key.starts_with('-') && !key.ends_with('-') && !key.contains("--"),
            "id `{key}` cannot be expressed as a dotted key"
        );
    }
}

/// Message ids of a Fluent file, duplicates included, in source order.
fn message_ids(src: &str) -> Vec<String> {
    let resource = match parser::parse(src) {
        Ok(resource) => resource,
        Err((_, errors)) => panic!("FTL syntax errors: {errors:?}"),
    };
    resource
        .body
        .iter()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}

fn extract_keys(src: &str) -> HashSet<String> {
    message_ids(src).into_iter().collect()
}

/// Assert no duplicate key definitions in a single FTL file.
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for key in message_ids(src) {
        if !seen.insert(key.clone()) {
            dups.insert(key);
        }
    }
    assert!(dups.is_empty(), "Locale {locale} defines keys twice: {dups:?}");
}
