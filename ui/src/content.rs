//! CMS content document and the one-shot fetch that loads it.
//!
//! The document is plain JSON keyed by section:
//! ```json
//! {
//!   "hero": { "headline_en": "...", "headline_de": "...", "background_image": "..." },
//!   "contact": { "email": "...", "phone": "..." },
//!   "products": { "xhand": { "name_en": "...", "desc_de": "..." } }
//! }
//! ```
//! It is fetched once per session, never retried and never mutated
//! afterwards. A failed or pending fetch only means views keep rendering from
//! the static table.

use std::future::Future;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("content request returned HTTP {0}")]
    Status(u16),
    #[error("content document is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument(Map<String, Value>);

impl ContentDocument {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.0.get(name).and_then(Value::as_object)
    }

    /// A non-empty string at `document[section][field]`.
    pub fn field(&self, section: &str, field: &str) -> Option<&str> {
        non_empty(self.section(section)?.get(field)?)
    }

    /// A non-empty string at `document.products[product][field]`.
    pub fn product_field(&self, product: &str, field: &str) -> Option<&str> {
        let product = self.section("products")?.get(product)?.as_object()?;
        non_empty(product.get(field)?)
    }

    /// CMS override for the hero background image URL.
    pub fn hero_background(&self) -> Option<&str> {
        self.field("hero", "background_image")
    }
}

fn non_empty(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Where the fetch currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ContentState {
    #[default]
    Pending,
    Loaded(Rc<ContentDocument>),
    Failed(String),
}

impl ContentState {
    pub fn document(&self) -> Option<Rc<ContentDocument>> {
        match self {
            ContentState::Loaded(doc) => Some(Rc::clone(doc)),
            _ => None,
        }
    }
}

/// Anything that can produce the content document.
pub trait ContentSource {
    fn fetch(&self) -> impl Future<Output = Result<ContentDocument, ContentError>>;
}

/// GET `url` and decode the body as a [`ContentDocument`]. No auth, no timeout.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    url: String,
}

impl HttpContentSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContentSource for HttpContentSource {
    async fn fetch(&self) -> Result<ContentDocument, ContentError> {
        let response = reqwest::get(&self.url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        ContentDocument::from_json(&body)
    }
}

/// Run one fetch and fold the outcome into a [`ContentState`].
pub async fn load(source: &impl ContentSource) -> ContentState {
    match source.fetch().await {
        Ok(doc) => {
            tracing::info!(sections = doc.0.len(), "site content loaded");
            ContentState::Loaded(Rc::new(doc))
        }
        Err(err) => {
            tracing::warn!(error = %err, "site content unavailable; using static translations");
            ContentState::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct InMemory(&'static str);

    impl ContentSource for InMemory {
        async fn fetch(&self) -> Result<ContentDocument, ContentError> {
            ContentDocument::from_json(self.0)
        }
    }

    struct Unreachable;

    impl ContentSource for Unreachable {
        async fn fetch(&self) -> Result<ContentDocument, ContentError> {
            Err(ContentError::Status(404))
        }
    }

    const SAMPLE: &str = r#"{
        "hero": { "headline_en": "X", "headline_de": "", "background_image": "/img/bg.jpg" },
        "contact": { "email": "office@example.com" },
        "products": { "xhand": { "name_en": "CMS X-Hand" } }
    }"#;

    #[test]
    fn fields_are_read_and_empty_strings_are_absent() {
        let doc = ContentDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.field("hero", "headline_en"), Some("X"));
        assert_eq!(doc.field("hero", "headline_de"), None);
        assert_eq!(doc.field("about", "headline_en"), None);
        assert_eq!(doc.field("contact", "email"), Some("office@example.com"));
        assert_eq!(doc.product_field("xhand", "name_en"), Some("CMS X-Hand"));
        assert_eq!(doc.product_field("bhand", "name_en"), None);
        assert_eq!(doc.hero_background(), Some("/img/bg.jpg"));
    }

    #[test]
    fn non_string_values_are_ignored() {
        let doc = ContentDocument::from_json(r#"{"hero": {"headline_en": 3}, "about": "flat"}"#)
            .unwrap();
        assert_eq!(doc.field("hero", "headline_en"), None);
        assert_eq!(doc.field("about", "headline_en"), None);
    }

    #[test]
    fn load_success_yields_document() {
        let state = block_on(load(&InMemory(SAMPLE)));
        let doc = state.document().expect("loaded");
        assert_eq!(doc.field("hero", "headline_en"), Some("X"));
        assert!(matches!(state, ContentState::Loaded(_)));
    }

    #[test]
    fn load_failure_records_message() {
        let state = block_on(load(&Unreachable));
        assert!(state.document().is_none());
        assert_eq!(
            state,
            ContentState::Failed("content request returned HTTP 404".to_string())
        );
    }

    #[test]
    fn malformed_json_is_a_decode_failure() {
        let state = block_on(load(&InMemory("{ not json")));
        assert!(matches!(
            &state,
            ContentState::Failed(m) if m.starts_with("content document is not valid JSON")
        ));
    }

    #[test]
    fn initial_state_is_pending() {
        assert_eq!(ContentState::default(), ContentState::Pending);
        assert!(ContentState::default().document().is_none());
    }
}
