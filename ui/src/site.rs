//! Session-wide site state: the active locale and the CMS fetch.
//!
//! Platforms call [`use_site_provider`] once in their root component; every
//! view below reads it back with [`use_site`]. Each signal has a single
//! writer (the language toggle and the fetch future respectively).

use dioxus::prelude::*;

use crate::content::{self, ContentState, HttpContentSource};
use crate::core::config::SiteConfig;
use crate::core::platform::{self, Platform};
use crate::i18n::Locale;
use crate::resolver::Translator;

#[derive(Clone, Copy, PartialEq)]
pub struct SiteContext {
    pub locale: Signal<Locale>,
    pub content: Signal<ContentState>,
}

impl SiteContext {
    /// Translator for the current render. Reading it subscribes the calling
    /// component to locale and content changes.
    pub fn translator(&self) -> Translator {
        Translator::new(*self.locale.read(), self.content.read().document())
    }

    pub fn locale(&self) -> Locale {
        *self.locale.read()
    }

    pub fn set_locale(&self, locale: Locale) {
        let mut signal = self.locale;
        if *signal.peek() != locale {
            tracing::debug!(%locale, "locale changed");
            signal.set(locale);
        }
    }

    pub fn toggle_locale(&self) {
        self.set_locale(self.locale.peek().toggled());
    }
}

/// Provide the site context and start the one-shot content fetch.
///
/// The fetch runs on the calling component's scope and is dropped with it;
/// there is no retry and no timeout.
pub fn use_site_provider() -> SiteContext {
    let locale = use_signal(Locale::default);
    let mut state = use_signal(ContentState::default);
    let ctx = use_context_provider(|| SiteContext {
        locale,
        content: state,
    });

    use_future(move || async move {
        let url = SiteConfig::current().content_url(&platform::origin());
        let source = HttpContentSource::new(url);
        tracing::info!(
            platform = ?Platform::current(),
            url = source.url(),
            "fetching site content"
        );
        let outcome = content::load(&source).await;
        state.set(outcome);
    });

    ctx
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}
