//! Build-time site configuration.
//!
//! Everything here is fixed when the binary is compiled; there is no config
//! file. The asset base path comes from, in order:
//! 1. `GRIPABILITY_BASE_PATH` in the build environment,
//! 2. `/Gripability-Development/` when the `subdir` feature is enabled
//!    (project-pages hosting),
//! 3. `/`.

/// Contact address used for the consultation `mailto:` link.
pub const CONTACT_EMAIL: &str = "mail@gripability.com";

/// How long the form shows its success panel before clearing itself.
pub const FORM_RESET_MS: u64 = 3000;

/// Delay between navigating home and scrolling to a section, giving the home
/// view time to mount.
pub const NAV_SCROLL_DELAY_MS: u64 = 100;

const SUBDIR_BASE: &str = "/Gripability-Development/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Always starts and ends with `/`.
    pub base_path: String,
    /// Relative to `base_path`.
    pub content_path: String,
    pub contact_email: String,
    pub form_reset_ms: u64,
    pub nav_scroll_delay_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::with_base("/")
    }
}

impl SiteConfig {
    /// Configuration compiled into this binary.
    pub fn current() -> Self {
        let base = match option_env!("GRIPABILITY_BASE_PATH") {
            Some(base) if !base.trim().is_empty() => base,
            _ if cfg!(feature = "subdir") => SUBDIR_BASE,
            _ => "/",
        };
        Self::with_base(base)
    }

    pub fn with_base(base: &str) -> Self {
        Self {
            base_path: normalize_base(base),
            content_path: "site-content.json".to_string(),
            contact_email: CONTACT_EMAIL.to_string(),
            form_reset_ms: FORM_RESET_MS,
            nav_scroll_delay_ms: NAV_SCROLL_DELAY_MS,
        }
    }

    /// Prefix a public asset (`images/Logo.jpg`, `pdfs/...`) with the base path.
    pub fn asset_path(&self, relative: &str) -> String {
        format!("{}{}", self.base_path, relative.trim_start_matches('/'))
    }

    /// Absolute URL of the CMS document for `origin` (`https://host[:port]`).
    pub fn content_url(&self, origin: &str) -> String {
        format!(
            "{}{}",
            origin.trim_end_matches('/'),
            self.asset_path(&self.content_path)
        )
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Shorthand for `SiteConfig::current().asset_path(..)`.
pub fn asset_path(relative: &str) -> String {
    SiteConfig::current().asset_path(relative)
}
