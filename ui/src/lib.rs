//! Shared UI crate for the Gripability site. Translation, content fetch,
//! product catalog and every view live here; platform crates only add the
//! router and launch.

use dioxus::prelude::*;

pub mod catalog;
pub mod consultation;
pub mod content;
pub mod core;
pub mod i18n;
pub mod resolver;
pub mod sections;
pub mod site;
pub mod views;

pub mod components {
    // Typed-link registry filled by the platform crate (components/nav.rs)
    pub mod nav;
    pub use nav::{register_nav, NavBuilder};

    mod site_footer;
    mod site_header;
    pub use site_footer::SiteFooter;
    pub use site_header::SiteHeader;
}

/// Shared theme, linked by web and inlined by desktop.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
