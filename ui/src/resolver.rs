//! Translation resolution: CMS value, then static table, then the key itself.
//!
//! ```ignore
//! let tr = use_site().translator();
//! rsx! { h1 { {tr.t("hero.headline")} } }
//! ```
//!
//! Resolution never fails. A key missing everywhere is rendered verbatim,
//! which makes gaps visible on the page instead of hiding them.

use std::rc::Rc;

use crate::content::ContentDocument;
use crate::i18n::{static_table, Locale, StaticTable, TranslationValue};

/// Top-level document sections the CMS is allowed to override.
pub const CMS_SECTIONS: [&str; 5] = ["hero", "about", "products", "consultation", "contact"];

/// Resolve `key` against the embedded static table.
pub fn resolve(key: &str, locale: Locale, document: Option<&ContentDocument>) -> String {
    resolve_in(static_table(), key, locale, document)
}

/// Resolve `key` against an explicit table.
pub fn resolve_in(
    table: &StaticTable,
    key: &str,
    locale: Locale,
    document: Option<&ContentDocument>,
) -> String {
    if let Some(value) = document.and_then(|doc| cms_value(doc, key, locale)) {
        return value.to_string();
    }
    table
        .text(locale, key)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

fn cms_value<'d>(doc: &'d ContentDocument, key: &str, locale: Locale) -> Option<&'d str> {
    let (section, field) = key.split_once('.')?;
    if !CMS_SECTIONS.contains(&section) {
        return None;
    }
    // Contact details are the same in every language.
    if section == "contact" && (field == "email" || field == "phone") {
        return doc.field("contact", field);
    }
    let localized = format!("{field}_{}", locale.code());
    if let Some(value) = doc.field(section, &localized) {
        return Some(value);
    }
    if section == "products" {
        let (product, product_field) = field.split_once('.')?;
        return doc.product_field(product, &format!("{product_field}_{}", locale.code()));
    }
    None
}

/// Locale plus the loaded document (if any): everything a view needs to turn
/// keys into text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translator {
    locale: Locale,
    document: Option<Rc<ContentDocument>>,
}

impl Translator {
    pub fn new(locale: Locale, document: Option<Rc<ContentDocument>>) -> Self {
        Self { locale, document }
    }

    /// Resolver used while the content fetch is pending or after it failed.
    pub fn static_only(locale: Locale) -> Self {
        Self::new(locale, None)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn document(&self) -> Option<&ContentDocument> {
        self.document.as_deref()
    }

    pub fn t(&self, key: &str) -> String {
        resolve(key, self.locale, self.document())
    }

    /// Items of a list value. Each item resolves individually as `key.<i>`,
    /// so a missing entry shows its own key. A plain-text value is not a list.
    pub fn list(&self, key: &str) -> Vec<String> {
        let len = match static_table().value(self.locale, key) {
            Some(TranslationValue::List(items)) => items.len(),
            _ => 0,
        };
        (0..len).map(|i| self.t(&format!("{key}.{i}"))).collect()
    }
}
