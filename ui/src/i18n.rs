//! Static translation table for the Gripability site.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent-bundle` (message formatting)
//! - `unic-langid` (parsing user / browser language tags into a [`Locale`])
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/gripability-ui.ftl   (fallback/reference)
//!   de/gripability-ui.ftl
//! ```
//!
//! Views never read this table directly: they go through
//! [`crate::resolver::Translator`], which prefers CMS text when a content
//! document is loaded and falls back to the static value here, then to the key
//! itself.
//!
//! Translation keys are dotted (`hero.headline`). Fluent identifiers cannot
//! contain dots, so each key is stored with `.` written as `-`
//! (`hero-headline`). Keys never contain `-` themselves, which keeps the mapping
//! reversible.
//!
//! Keys whose last segment is a number (`product.xhand.features.0`,
//! `product.xhand.features.1`, ...) additionally form a list value under their
//! prefix (`product.xhand.features`).
//!
//! To add a message:
//! 1. Add the id to `en/gripability-ui.ftl` and `de/gripability-ui.ftl`.
//! 2. Run tests; `tests/i18n_missing_keys.rs` fails on any mismatch.
//!
//! NOTE: The filename `gripability-ui.ftl` is canonical across all locales.
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use fluent_bundle::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Fluent "domain" (matches the crate / the FTL filename in every locale folder).
const DOMAIN: &str = "gripability-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The two languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// Short code used for folder names and CMS field suffixes (`headline_de`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// The other locale. Toggling twice is the identity.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::En => Locale::De,
            Locale::De => Locale::En,
        }
    }

    /// Endonym shown on the language switch.
    pub fn language_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale `{0}` (expected en or de)")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Accepts any well-formed language tag whose primary language is English
    /// or German (`de`, `de-DE`, `en-US`, `EN`).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let langid: LanguageIdentifier = tag
            .parse()
            .map_err(|_| UnsupportedLocale(tag.to_string()))?;
        match langid.language.as_str() {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            _ => Err(UnsupportedLocale(tag.to_string())),
        }
    }
}

/// A static translation value: a plain string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Default)]
struct LocaleTable {
    text: BTreeMap<String, String>,
    lists: BTreeMap<String, Vec<String>>,
}

/// Flat locale → key → value mapping built from the embedded Fluent files.
#[derive(Debug, Default)]
pub struct StaticTable {
    locales: HashMap<Locale, LocaleTable>,
}

impl StaticTable {
    /// Build a table from raw FTL sources, one per locale.
    ///
    /// Syntax errors are logged and the parsable part of the resource is kept;
    /// a broken file degrades to missing keys, never to a panic.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (Locale, &'a str)>) -> Self {
        let mut locales = HashMap::new();
        for (locale, source) in sources {
            locales.insert(locale, build_locale(locale, source));
        }
        Self { locales }
    }

    /// Load every locale folder embedded under `i18n/`. Folders that do not
    /// name a supported locale are skipped.
    pub fn embedded() -> Self {
        let mut sources = Vec::new();
        for folder in available_languages() {
            let locale = match folder.parse::<Locale>() {
                Ok(locale) => locale,
                Err(err) => {
                    tracing::warn!(%err, "skipping translation folder");
                    continue;
                }
            };
            let path = format!("{folder}/{DOMAIN}.ftl");
            match Localizations::get(&path) {
                Some(file) => {
                    sources.push((locale, String::from_utf8_lossy(file.data.as_ref()).into_owned()))
                }
                None => tracing::warn!(%locale, path = %path, "no embedded translations"),
            }
        }
        for locale in Locale::ALL {
            if !sources.iter().any(|(l, _)| *l == locale) {
                tracing::warn!(%locale, "locale has no translation folder");
            }
        }
        Self::from_sources(sources.iter().map(|(l, s)| (*l, s.as_str())))
    }

    pub fn text(&self, locale: Locale, key: &str) -> Option<&str> {
        self.locales
            .get(&locale)
            .and_then(|t| t.text.get(key))
            .map(String::as_str)
    }

    pub fn list(&self, locale: Locale, key: &str) -> Option<&[String]> {
        self.locales
            .get(&locale)
            .and_then(|t| t.lists.get(key))
            .map(Vec::as_slice)
    }

    /// Text wins over list when both exist under the same key.
    pub fn value(&self, locale: Locale, key: &str) -> Option<TranslationValue> {
        if let Some(text) = self.text(locale, key) {
            return Some(TranslationValue::Text(text.to_string()));
        }
        self.list(locale, key)
            .map(|items| TranslationValue::List(items.to_vec()))
    }

    /// All plain-text keys of a locale, sorted.
    pub fn keys(&self, locale: Locale) -> Vec<&str> {
        self.locales
            .get(&locale)
            .map(|t| t.text.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

static TABLE: Lazy<StaticTable> = Lazy::new(StaticTable::embedded);

/// The process-wide table built from the embedded files.
pub fn static_table() -> &'static StaticTable {
    &TABLE
}

/// List available (embedded) locale folder names.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// `hero.headline` -> `hero-headline`
pub fn fluent_id(key: &str) -> String {
    key.replace('.', "-")
}

/// `hero-headline` -> `hero.headline`
pub fn key_from_fluent_id(id: &str) -> String {
    id.replace('-', ".")
}

fn build_locale(locale: Locale, source: &str) -> LocaleTable {
    let resource = match FluentResource::try_new(source.to_string()) {
        Ok(res) => res,
        Err((res, errors)) => {
            tracing::warn!(%locale, count = errors.len(), "translation file has syntax errors");
            res
        }
    };
    let ids = message_ids(&resource);
    let mut bundle = FluentBundle::new(vec![locale.langid()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, count = errors.len(), "duplicate translation ids");
    }

    let mut table = LocaleTable::default();
    for id in &ids {
        let Some(pattern) = bundle.get_message(id).and_then(|m| m.value()) else {
            continue;
        };
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(%locale, %id, "could not format translation");
            continue;
        }
        table.text.insert(key_from_fluent_id(id), value.into_owned());
    }

    let mut indexed: BTreeMap<String, BTreeMap<usize, String>> = BTreeMap::new();
    for (key, value) in &table.text {
        if let Some((prefix, last)) = key.rsplit_once('.') {
            if let Ok(index) = last.parse::<usize>() {
                indexed
                    .entry(prefix.to_string())
                    .or_default()
                    .insert(index, value.clone());
            }
        }
    }
    for (prefix, items) in indexed {
        table.lists.insert(prefix, items.into_values().collect());
    }
    table
}

/// Message ids in source order, taken from the parsed resource. Terms
/// (`-brand`) and comments are not messages.
fn message_ids(resource: &FluentResource) -> Vec<String> {
    resource
        .entries()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en"));
        assert!(langs.iter().any(|l| l == "de"));
    }

    #[test]
    fn basic_lookup_works() {
        assert_eq!(static_table().text(Locale::En, "nav.home"), Some("Home"));
        assert_eq!(static_table().text(Locale::De, "nav.home"), Some("Startseite"));
    }

    #[test]
    fn static_key_sets_are_equal() {
        let table = static_table();
        let en = table.keys(Locale::En);
        let de = table.keys(Locale::De);
        assert!(!en.is_empty());
        assert_eq!(en, de);
    }

    #[test]
    fn indexed_keys_form_lists() {
        let features = static_table()
            .list(Locale::En, "product.xhand.features")
            .expect("x-hand feature list");
        assert_eq!(features.len(), 7);
        assert_eq!(
            features[0],
            "High-quality pneumatic system with precision components"
        );
        assert!(matches!(
            static_table().value(Locale::De, "product.tbrush.features"),
            Some(TranslationValue::List(items)) if items.len() == 5
        ));
    }

    #[test]
    fn locale_parses_language_tags() {
        assert_eq!("de".parse::<Locale>(), Ok(Locale::De));
        assert_eq!("de-DE".parse::<Locale>(), Ok(Locale::De));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn toggling_twice_restores_locale() {
        for locale in Locale::ALL {
            assert_eq!(locale.toggled().toggled(), locale);
            assert_ne!(locale.toggled(), locale);
        }
    }

    #[test]
    fn broken_source_keeps_valid_messages() {
        let table = StaticTable::from_sources([(Locale::En, "good-key = fine\nbad key\n")]);
        assert_eq!(table.text(Locale::En, "good.key"), Some("fine"));
        assert_eq!(table.text(Locale::De, "good.key"), None);
    }

    #[test]
    fn only_messages_become_keys() {
        let source = "# comment\n-brand = Gripability\nnav-home = Home\n    .title = Start\nnav_menu = Menu\n";
        let table = StaticTable::from_sources([(Locale::En, source)]);
        assert_eq!(table.keys(Locale::En), ["nav.home", "nav_menu"]);
        assert_eq!(table.text(Locale::En, "nav.home"), Some("Home"));
    }

    #[test]
    fn embedded_table_covers_every_locale_folder() {
        let table = static_table();
        for folder in available_languages() {
            let locale: Locale = folder.parse().expect("folder names a supported locale");
            assert!(!table.keys(locale).is_empty(), "no keys loaded for {folder}");
        }
    }

    #[test]
    fn multiline_values_are_joined() {
        let table = StaticTable::from_sources([(Locale::En, "a-b =\n    one\n    two\n")]);
        assert_eq!(table.text(Locale::En, "a.b"), Some("one\ntwo"));
    }
}
