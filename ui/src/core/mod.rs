//! Platform-agnostic plumbing shared by every view: build configuration,
//! clocks and the handful of browser/webview side effects the site needs.

pub mod config;
pub mod platform;
pub mod timing;
